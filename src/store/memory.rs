use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::plan::Plan;
use crate::models::progress::{ExerciseRef, ProgressLog};
use crate::store::{PlanStore, StoreError, StoredPlan, new_plan_id};

struct Record {
    stored: StoredPlan,
    progress: ProgressLog,
}

/// Process-local store. Records vanish on restart.
#[derive(Default)]
pub struct MemoryPlanStore {
    records: Mutex<HashMap<String, Record>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, HashMap<String, Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_live<T>(
        &self,
        id: &str,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut Record) -> T,
    ) -> Result<T, StoreError> {
        let mut records = self.records();
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if record.stored.is_expired(now) {
            return Err(StoreError::Expired {
                id: id.to_string(),
                expired_at: record.stored.expires_at,
            });
        }
        Ok(f(record))
    }
}

impl PlanStore for MemoryPlanStore {
    fn create(&self, plan: Plan, created_at: DateTime<Utc>, ttl: Duration) -> StoredPlan {
        let mut records = self.records();

        let mut id = new_plan_id();
        while records
            .get(&id)
            .is_some_and(|r| !r.stored.is_expired(created_at))
        {
            id = new_plan_id();
        }

        let stored = StoredPlan {
            id: id.clone(),
            plan,
            created_at,
            expires_at: created_at + ttl,
        };
        records.insert(
            id,
            Record {
                stored: stored.clone(),
                progress: ProgressLog::default(),
            },
        );
        stored
    }

    fn get(&self, id: &str, now: DateTime<Utc>) -> Result<StoredPlan, StoreError> {
        self.with_live(id, now, |record| record.stored.clone())
    }

    fn progress(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<(StoredPlan, ProgressLog), StoreError> {
        self.with_live(id, now, |record| {
            (record.stored.clone(), record.progress.clone())
        })
    }

    fn set_exercise(
        &self,
        id: &str,
        now: DateTime<Utc>,
        exercise: ExerciseRef,
        checked: bool,
    ) -> Result<ProgressLog, StoreError> {
        self.with_live(id, now, |record| {
            record.progress.set_exercise(exercise, checked);
            record.progress.clone()
        })
    }

    fn set_note(
        &self,
        id: &str,
        now: DateTime<Utc>,
        workout_index: usize,
        note: String,
    ) -> Result<ProgressLog, StoreError> {
        self.with_live(id, now, |record| {
            record.progress.set_note(workout_index, note);
            record.progress.clone()
        })
    }

    fn reset_progress(&self, id: &str, now: DateTime<Utc>) -> Result<(), StoreError> {
        self.with_live(id, now, |record| record.progress.clear())
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records();
        let before = records.len();
        records.retain(|_, record| !record.stored.is_expired(now));
        before - records.len()
    }
}
