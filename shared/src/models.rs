//! Data models for the GymTrack engine
//!
//! Field names serialize in camelCase to match the generation-service wire
//! contract, so AI-path and local-path outputs are structurally
//! interchangeable JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

pub use crate::units::UnitSystem;

/// Fitness goal driving plan template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Phrasing used when embedding the goal in a delegation prompt
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Maintain => "Maintain fitness",
            Goal::Gain => "Build muscle",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Gain => write!(f, "gain"),
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Self-reported fitness level; also stamped onto exercise difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessLevel::Beginner => write!(f, "beginner"),
            FitnessLevel::Intermediate => write!(f, "intermediate"),
            FitnessLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(format!("Unknown fitness level: {}", s)),
        }
    }
}

/// Biometric and goal input for one plan generation request.
///
/// Ephemeral: constructed per request, never persisted directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricInput {
    pub height_value: f64,
    pub weight_value: f64,
    pub unit_system: UnitSystem,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
}

/// A single exercise within a workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Supports ranges ("8-10") and durations ("30 seconds")
    pub reps: String,
    pub rest_seconds: u32,
    pub target_muscle: String,
    pub difficulty: FitnessLevel,
}

/// One day of the weekly schedule.
///
/// Exercise names are loosely coupled to `Exercise` entries — no referential
/// integrity is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<String>,
}

/// A complete generated workout plan.
///
/// Immutable once saved: there is no update operation, only create/delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub title: String,
    pub description: String,
    pub bmi_category: String,
    pub exercises: Vec<Exercise>,
    pub tips: Vec<String>,
    /// Always exactly 7 entries, one per weekday
    pub weekly_schedule: Vec<DayPlan>,
}

/// Self-reported mood for a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Bad,
    Terrible,
}

impl Mood {
    /// True for moods that indicate a good day
    pub fn is_positive(&self) -> bool {
        matches!(self, Mood::Great | Mood::Good)
    }

    /// True for moods that warrant self-care suggestions
    pub fn is_negative(&self) -> bool {
        matches!(self, Mood::Bad | Mood::Terrible)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Great => write!(f, "great"),
            Mood::Good => write!(f, "good"),
            Mood::Neutral => write!(f, "neutral"),
            Mood::Bad => write!(f, "bad"),
            Mood::Terrible => write!(f, "terrible"),
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "neutral" => Ok(Mood::Neutral),
            "bad" => Ok(Mood::Bad),
            "terrible" => Ok(Mood::Terrible),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

/// One daily journal entry.
///
/// One entry per date per user is the natural key at the remote storage
/// boundary (upsert-on-conflict); local history does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    pub mood: Mood,
    pub workout_done: bool,
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: f64,
    #[validate(range(min = 0.0, max = 20.0))]
    pub water_intake: f64,
    /// Once set, never recomputed in place — re-analysis creates a new value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

/// Structured analysis of a journal entry.
///
/// Produced by either the AI path or the local heuristic; both satisfy the
/// same shape. Created once, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub summary: String,
    pub positives: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: Vec<String>,
    /// Always within [0, 100]
    pub overall_score: u8,
}

/// Category of a scheduled workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Rest,
    Hiit,
}

/// A user-created calendar entry.
///
/// Mutated only on its `completed` flag; deleted explicitly. No AI
/// involvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub title: String,
    pub duration_minutes: u32,
    pub completed: bool,
    pub notes: String,
}
