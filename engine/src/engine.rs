//! Engine facade
//!
//! Wires configuration, the delegation gateway, and the generators into one
//! entry point. The credential comes from configuration here but callers of
//! the individual generators may still thread their own.

use crate::config::AppConfig;
use crate::gateway::{ApiCredential, DelegationGateway};
use crate::history::{self, LocalHistory};
use crate::journal::JournalAnalyzer;
use crate::planner::PlanGenerator;
use anyhow::Result;
use chrono::NaiveDate;
use gymtrack_shared::errors::GenerationError;
use gymtrack_shared::health_metrics::{
    self, BmiResult, WeeklyAggregate, STREAK_WINDOW_DAYS, WEEKLY_WINDOW_DAYS,
};
use gymtrack_shared::models::{AiAnalysis, BiometricInput, JournalEntry, ScheduleItem, WorkoutPlan};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// The recommendation engine
pub struct Engine {
    config: Arc<AppConfig>,
    gateway: DelegationGateway,
}

impl Engine {
    pub fn new(config: AppConfig) -> Result<Self> {
        let gateway = DelegationGateway::new(&config.ai)?;
        info!(
            model = %config.ai.model,
            delegation = config.ai.api_key.is_some(),
            "engine initialized"
        );
        Ok(Self {
            config: Arc::new(config),
            gateway,
        })
    }

    fn credential(&self) -> Option<ApiCredential> {
        self.config.ai.credential()
    }

    /// Generate a workout plan, delegating when a credential is configured
    pub async fn generate_plan(
        &self,
        input: &BiometricInput,
    ) -> Result<(BmiResult, WorkoutPlan), GenerationError> {
        let credential = self.credential();
        PlanGenerator::generate(&self.gateway, input, credential.as_ref()).await
    }

    /// Analyze a journal entry, delegating when a credential is configured
    pub async fn analyze_entry(&self, entry: &JournalEntry) -> Result<AiAnalysis, GenerationError> {
        let credential = self.credential();
        JournalAnalyzer::analyze(&self.gateway, entry, credential.as_ref()).await
    }

    /// Local journal-entry collection under the configured data directory
    pub fn journal_history(&self) -> Result<LocalHistory<JournalEntry>, history::HistoryError> {
        LocalHistory::open(&self.config.history.data_dir, history::JOURNAL_COLLECTION)
    }

    /// Local schedule-item collection under the configured data directory
    pub fn schedule_history(&self) -> Result<LocalHistory<ScheduleItem>, history::HistoryError> {
        LocalHistory::open(&self.config.history.data_dir, history::SCHEDULE_COLLECTION)
    }

    /// Consecutive-day workout streak ending at `reference`, looking back
    /// over the standard window. Only completed items count.
    pub fn workout_streak(items: &[ScheduleItem], reference: NaiveDate) -> u32 {
        let completed: HashSet<NaiveDate> = items
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.date)
            .collect();
        health_metrics::compute_streak(&completed, reference, STREAK_WINDOW_DAYS)
    }

    /// Rolling weekly averages over journal entries ending at `reference`
    pub fn weekly_stats(entries: &[JournalEntry], reference: NaiveDate) -> WeeklyAggregate {
        health_metrics::compute_weekly_aggregate(entries, reference, WEEKLY_WINDOW_DAYS)
    }
}
