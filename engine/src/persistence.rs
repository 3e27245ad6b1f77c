//! Remote persistence collaborator
//!
//! The storage surface the client syncs through when a backend is
//! available. `PersistenceStore` is the seam; `MemoryStore` is the
//! in-process implementation used for tests and offline operation.
//!
//! Plans are immutable once saved (create, list, delete only). Journal and
//! schedule records upsert on the (user, date) pair, so one record per user
//! per day is the invariant at this boundary.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use gymtrack_shared::errors::PersistenceError;
use gymtrack_shared::health_metrics::BmiResult;
use gymtrack_shared::models::{
    BiometricInput, FitnessLevel, Goal, JournalEntry, ScheduleItem, WorkoutPlan,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A saved workout plan, stamped with identity and provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: Uuid,
    pub user_id: String,
    pub bmi_value: f64,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    pub plan: WorkoutPlan,
    pub created_at: DateTime<Utc>,
}

impl PlanRecord {
    /// Stamp a freshly generated plan with a new id and the current time
    pub fn stamp(
        user_id: impl Into<String>,
        input: &BiometricInput,
        bmi: &BmiResult,
        plan: WorkoutPlan,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            bmi_value: bmi.value,
            goal: input.goal,
            fitness_level: input.fitness_level,
            plan,
            created_at: Utc::now(),
        }
    }
}

/// A saved journal entry, one per user per date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalRecord {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub entry: JournalEntry,
    pub created_at: DateTime<Utc>,
}

impl JournalRecord {
    pub fn stamp(user_id: impl Into<String>, entry: JournalEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            date: entry.date,
            entry,
            created_at: Utc::now(),
        }
    }
}

/// A saved day of scheduled workouts, one per user per date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub items: Vec<ScheduleItem>,
    pub created_at: DateTime<Utc>,
}

impl ScheduleRecord {
    pub fn stamp(user_id: impl Into<String>, date: NaiveDate, items: Vec<ScheduleItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            date,
            items,
            created_at: Utc::now(),
        }
    }
}

/// Remote storage surface
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a new plan record
    async fn save_plan(&self, record: PlanRecord) -> Result<(), PersistenceError>;

    /// All plans for a user, newest first
    async fn list_plans_by_user(&self, user_id: &str) -> Result<Vec<PlanRecord>, PersistenceError>;

    /// Delete a plan by id. `NotFound` if no such plan exists.
    async fn delete_plan(&self, id: Uuid) -> Result<(), PersistenceError>;

    /// Insert or replace the journal record for (user, date)
    async fn upsert_journal(&self, record: JournalRecord) -> Result<(), PersistenceError>;

    /// Journal records for a user, newest date first
    async fn list_journal_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<JournalRecord>, PersistenceError>;

    /// Insert or replace the schedule record for (user, date)
    async fn upsert_schedule(&self, record: ScheduleRecord) -> Result<(), PersistenceError>;

    /// Schedule records for a user, newest date first
    async fn list_schedule_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ScheduleRecord>, PersistenceError>;
}

/// In-memory store backed by `tokio::sync::RwLock`
#[derive(Default)]
pub struct MemoryStore {
    plans: RwLock<Vec<PlanRecord>>,
    journal: RwLock<Vec<JournalRecord>>,
    schedules: RwLock<Vec<ScheduleRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceStore for MemoryStore {
    async fn save_plan(&self, record: PlanRecord) -> Result<(), PersistenceError> {
        self.plans.write().await.push(record);
        Ok(())
    }

    async fn list_plans_by_user(&self, user_id: &str) -> Result<Vec<PlanRecord>, PersistenceError> {
        let plans = self.plans.read().await;
        let mut matching: Vec<PlanRecord> = plans
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn delete_plan(&self, id: Uuid) -> Result<(), PersistenceError> {
        let mut plans = self.plans.write().await;
        let before = plans.len();
        plans.retain(|p| p.id != id);
        if plans.len() == before {
            return Err(PersistenceError::NotFound(format!("plan {id}")));
        }
        Ok(())
    }

    async fn upsert_journal(&self, record: JournalRecord) -> Result<(), PersistenceError> {
        let mut journal = self.journal.write().await;
        if let Some(existing) = journal
            .iter_mut()
            .find(|r| r.user_id == record.user_id && r.date == record.date)
        {
            // Replacement keeps the original record identity
            existing.entry = record.entry;
        } else {
            journal.push(record);
        }
        Ok(())
    }

    async fn list_journal_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<JournalRecord>, PersistenceError> {
        let journal = self.journal.read().await;
        let mut matching: Vec<JournalRecord> = journal
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matching)
    }

    async fn upsert_schedule(&self, record: ScheduleRecord) -> Result<(), PersistenceError> {
        let mut schedules = self.schedules.write().await;
        if let Some(existing) = schedules
            .iter_mut()
            .find(|r| r.user_id == record.user_id && r.date == record.date)
        {
            existing.items = record.items;
        } else {
            schedules.push(record);
        }
        Ok(())
    }

    async fn list_schedule_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ScheduleRecord>, PersistenceError> {
        let schedules = self.schedules.read().await;
        let mut matching: Vec<ScheduleRecord> = schedules
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matching)
    }
}
