//! Journal entry analysis
//!
//! Mirrors the planner's hybrid shape: optional single delegation attempt,
//! deterministic rule-based fallback. The local heuristic starts from a base
//! score of 50 and awards points for workout completion, sleep in range,
//! hydration, positive mood, and detailed writing.

use crate::gateway::{ApiCredential, Contract, DelegationGateway};
use gymtrack_shared::errors::GenerationError;
use gymtrack_shared::models::{AiAnalysis, JournalEntry};
use gymtrack_shared::validation::validate_journal_entry;
use tracing::warn;

const SYSTEM_PROMPT: &str = "You are a supportive fitness coach and life advisor. Analyze daily journal entries and provide constructive feedback. Always respond with valid JSON.";

impl Contract for AiAnalysis {
    fn enforce(&self) -> Result<(), String> {
        if self.overall_score > 100 {
            return Err(format!("overall score {} exceeds 100", self.overall_score));
        }
        if self.summary.trim().is_empty() {
            return Err("analysis summary is empty".to_string());
        }
        if self.positives.is_empty() {
            return Err("analysis carries no positives".to_string());
        }
        if self.recommendations.is_empty() {
            return Err("analysis carries no recommendations".to_string());
        }
        Ok(())
    }
}

/// Journal analyzer service
pub struct JournalAnalyzer;

impl JournalAnalyzer {
    /// Analyze a journal entry.
    ///
    /// With a credential, one delegation attempt is made; any gateway
    /// failure falls back to the local heuristic. Without one, the heuristic
    /// runs directly. Only invalid input is an error.
    pub async fn analyze(
        gateway: &DelegationGateway,
        entry: &JournalEntry,
        credential: Option<&ApiCredential>,
    ) -> Result<AiAnalysis, GenerationError> {
        validate_journal_entry(entry).map_err(GenerationError::InvalidInput)?;

        if credential.is_some() {
            let user_prompt = Self::build_prompt(entry);
            match gateway
                .request::<AiAnalysis>(credential, SYSTEM_PROMPT, &user_prompt)
                .await
            {
                Ok(analysis) => return Ok(analysis),
                Err(e) => {
                    warn!(error = %e, "journal delegation failed, using local analysis");
                }
            }
        }

        Ok(Self::local_analysis(entry))
    }

    fn build_prompt(entry: &JournalEntry) -> String {
        format!(
            r#"Analyze this fitness journal entry and provide feedback:

Entry: "{content}"
Mood: {mood}
Workout completed: {workout}
Sleep: {sleep} hours
Water intake: {water} glasses

Respond with JSON:
{{
  "summary": "Brief summary of the day",
  "positives": ["positive1", "positive2"],
  "improvements": ["area to improve 1"],
  "recommendations": ["actionable recommendation 1", "recommendation 2"],
  "overallScore": 85
}}"#,
            content = entry.content,
            mood = entry.mood,
            workout = if entry.workout_done { "Yes" } else { "No" },
            sleep = entry.sleep_hours,
            water = entry.water_intake,
        )
    }

    /// Deterministic rule-based analysis.
    ///
    /// Rule order is fixed, so list ordering is stable for identical input.
    /// Long sleep (over 9 hours) adds an improvement without a paired
    /// recommendation; short sleep adds both.
    pub fn local_analysis(entry: &JournalEntry) -> AiAnalysis {
        let mut positives = Vec::new();
        let mut improvements = Vec::new();
        let mut recommendations = Vec::new();
        let mut score: i32 = 50;

        if entry.workout_done {
            positives.push("Great job completing your workout today!".to_string());
            score += 15;
        } else {
            improvements
                .push("Try to fit in a workout tomorrow, even if it's just a short one".to_string());
            recommendations
                .push("Schedule your workout at a specific time to build consistency".to_string());
        }

        if entry.sleep_hours >= 7.0 && entry.sleep_hours <= 9.0 {
            positives.push(format!(
                "Excellent sleep duration ({} hours) - optimal for recovery",
                entry.sleep_hours
            ));
            score += 10;
        } else if entry.sleep_hours < 7.0 {
            improvements.push(format!(
                "Sleep of {} hours is below optimal. Aim for 7-9 hours",
                entry.sleep_hours
            ));
            recommendations.push("Try going to bed 30 minutes earlier tonight".to_string());
        } else {
            improvements.push(
                "Sleeping more than 9 hours might indicate fatigue - check your routine"
                    .to_string(),
            );
        }

        if entry.water_intake >= 8.0 {
            positives.push(format!(
                "Great hydration with {} glasses of water",
                entry.water_intake
            ));
            score += 10;
        } else {
            improvements.push(format!(
                "Water intake of {} glasses is below recommended 8 glasses",
                entry.water_intake
            ));
            recommendations
                .push("Keep a water bottle at your desk as a reminder to drink more".to_string());
        }

        if entry.mood.is_positive() {
            positives.push("Positive mood is a great indicator of overall well-being".to_string());
            score += 10;
        } else if entry.mood.is_negative() {
            recommendations
                .push("Consider a short walk or meditation to help improve your mood".to_string());
            recommendations.push(
                "Reach out to a friend or family member if you're feeling down".to_string(),
            );
        }

        if entry.content.len() > 100 {
            positives
                .push("Detailed journaling helps with self-reflection and mindfulness".to_string());
            score += 5;
        } else {
            recommendations.push(
                "Try adding more detail to your entries for better self-reflection".to_string(),
            );
        }

        if recommendations.is_empty() {
            recommendations.push(
                "Keep up the great work! Consistency is key to achieving your goals".to_string(),
            );
        }

        if positives.is_empty() {
            positives.push("Every day is a step forward in your fitness journey".to_string());
        }

        AiAnalysis {
            summary: format!(
                "Today was a {} day. {} Sleep: {}h, Hydration: {} glasses.",
                entry.mood,
                if entry.workout_done {
                    "You completed your workout."
                } else {
                    "Rest day."
                },
                entry.sleep_hours,
                entry.water_intake
            ),
            positives,
            improvements,
            recommendations,
            overall_score: score.min(100) as u8,
        }
    }
}
