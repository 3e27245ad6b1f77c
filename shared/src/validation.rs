//! Input validation functions
//!
//! Validation happens before any generation work: an invalid biometric or
//! journal input stops the request, it is never silently clamped.

use crate::models::{BiometricInput, JournalEntry};

/// Validate a height value in the caller's unit system
pub fn validate_height(height: f64) -> Result<(), String> {
    if height.is_nan() || height.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height <= 0.0 {
        return Err("Height must be positive".to_string());
    }
    Ok(())
}

/// Validate a weight value in the caller's unit system
pub fn validate_weight(weight: f64) -> Result<(), String> {
    if weight.is_nan() || weight.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    Ok(())
}

/// Validate the complete biometric input for plan generation
pub fn validate_biometrics(input: &BiometricInput) -> Result<(), String> {
    validate_height(input.height_value)?;
    validate_weight(input.weight_value)?;
    Ok(())
}

/// Validate sleep hours (0-24)
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if !(0.0..=24.0).contains(&hours) {
        return Err("Sleep hours must be between 0 and 24".to_string());
    }
    Ok(())
}

/// Validate water intake in glasses (0-20)
pub fn validate_water_intake(glasses: f64) -> Result<(), String> {
    if glasses.is_nan() || glasses.is_infinite() {
        return Err("Water intake must be a valid number".to_string());
    }
    if !(0.0..=20.0).contains(&glasses) {
        return Err("Water intake must be between 0 and 20 glasses".to_string());
    }
    Ok(())
}

/// Validate a schedule item duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes == 0 {
        return Err("Duration must be positive".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a journal entry before analysis
pub fn validate_journal_entry(entry: &JournalEntry) -> Result<(), String> {
    if entry.content.trim().is_empty() {
        return Err("Journal content cannot be empty".to_string());
    }
    validate_sleep_hours(entry.sleep_hours)?;
    validate_water_intake(entry.water_intake)?;
    Ok(())
}
