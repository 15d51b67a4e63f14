use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::models::plan::Plan;
use crate::models::progress::{ExerciseRef, ProgressLog};

pub mod memory;

const ID_LEN: usize = 6;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("plan {0} not found")]
    NotFound(String),
    #[error("plan {id} expired at {expired_at}")]
    Expired {
        id: String,
        expired_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
    pub id: String,
    pub plan: Plan,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StoredPlan {
    /// A plan is still live at the exact instant it expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Storage for generated plans and the progress recorded against them.
///
/// Every read takes the current time so expiry stays a property of the
/// record rather than of a background sweep.
pub trait PlanStore: Send + Sync {
    fn create(&self, plan: Plan, created_at: DateTime<Utc>, ttl: Duration) -> StoredPlan;

    fn get(&self, id: &str, now: DateTime<Utc>) -> Result<StoredPlan, StoreError>;

    /// The plan and its progress, read together.
    fn progress(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<(StoredPlan, ProgressLog), StoreError>;

    fn set_exercise(
        &self,
        id: &str,
        now: DateTime<Utc>,
        exercise: ExerciseRef,
        checked: bool,
    ) -> Result<ProgressLog, StoreError>;

    fn set_note(
        &self,
        id: &str,
        now: DateTime<Utc>,
        workout_index: usize,
        note: String,
    ) -> Result<ProgressLog, StoreError>;

    fn reset_progress(&self, id: &str, now: DateTime<Utc>) -> Result<(), StoreError>;

    /// Drop expired plans with their progress, returning how many went.
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

pub fn new_plan_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
