//! GymTrack Shared Library
//!
//! This crate contains the data model, health-metric calculations, unit
//! handling, and validation shared between the engine and any frontend.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use units::*;

pub use models::{
    AiAnalysis, BiometricInput, DayPlan, Exercise, FitnessLevel, Goal, JournalEntry, Mood,
    ScheduleItem, WorkoutPlan, WorkoutType,
};
