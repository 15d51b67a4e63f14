use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::store::PlanStore;

pub async fn start_scheduler(
    store: Arc<dyn PlanStore>,
    schedule: &str,
) -> anyhow::Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _l| {
        let store = Arc::clone(&store);
        Box::pin(async move {
            run_purge(store.as_ref());
        })
    })
    .with_context(|| format!("PURGE_SCHEDULE is not a valid cron expression: {schedule:?}"))?;

    scheduler.add(job).await?;

    scheduler.start().await?;
    tracing::info!(%schedule, "cron.purge_scheduled");
    Ok(scheduler)
}

pub fn run_purge(store: &dyn PlanStore) -> usize {
    let removed = store.purge_expired(Utc::now());
    tracing::info!(removed, "cron.purge_completed");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answers::Answers;
    use crate::services::plan_builder::build_plan;
    use crate::store::memory::MemoryPlanStore;
    use chrono::Duration;

    #[tokio::test]
    async fn test_invalid_schedule_names_variable() {
        let store: Arc<dyn PlanStore> = Arc::new(MemoryPlanStore::new());
        let Err(err) = start_scheduler(store, "every quarter hour").await else {
            panic!("scheduler accepted an invalid cron expression");
        };
        assert!(err.to_string().contains("PURGE_SCHEDULE"));
    }

    #[test]
    fn test_run_purge_removes_only_expired() {
        let store = MemoryPlanStore::new();
        let plan = build_plan(&Answers::default());
        store.create(plan.clone(), Utc::now() - Duration::days(10), Duration::days(7));
        let live = store.create(plan, Utc::now(), Duration::days(7));

        assert_eq!(run_purge(&store), 1);
        assert!(store.get(&live.id, Utc::now()).is_ok());
    }
}
