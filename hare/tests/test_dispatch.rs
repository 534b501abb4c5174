#![cfg(feature = "dispatch")]

//! These talk to a live Redis, run them with `cargo test -- --ignored`.

mod common;

use common::create_test_forum;
use hare::prelude::*;
use hare_core::{HorizonKeys, JOB_RECORD_TTL_SECS, QueueKeys, Result, generate_job_id};
use redis::AsyncCommands;

const APP_NAME: &str = "HareTest";

/// Unique queue name so parallel tests don't see each other's payloads
fn test_queue(prefix: &str) -> String {
    format!("{}_{}", prefix, generate_job_id())
}

async fn clean_job(forum: &Forum, queue: &str, job_id: &str) -> Result<()> {
    let queue_keys = QueueKeys::with_queue(queue);
    let horizon_keys = HorizonKeys::with_app_name(APP_NAME);
    let mut conn = forum.get_connection().await?;

    #[rustfmt::skip]
    let _: () = redis::pipe()
        .del(queue_keys.queue_list()).ignore()
        .del(queue_keys.notify_list()).ignore()
        .del(queue_keys.delayed_set()).ignore()
        .del(horizon_keys.job_record_hash(job_id)).ignore()
        .zrem(horizon_keys.pending_jobs_set(), job_id).ignore()
        .zrem(horizon_keys.recent_jobs_set(), job_id).ignore()
        .query_async(&mut conn)
        .await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_dispatch_job() -> Result<()> {
    let forum = create_test_forum();
    let dispatcher = Dispatcher::with_store(forum.clone());
    let inspector = Inspector::new(forum.clone(), APP_NAME);

    let queue = test_queue("test_dispatch");
    let config = DispatchConfig::new(APP_NAME, "App\\Jobs\\Ping").queue(&queue);
    let params = [JobParam::protected("target", "example.com")];
    let job_id = dispatcher.dispatch(&config, &params).await?;

    assert_eq!(inspector.queue_length(&queue).await?, 1);
    assert_eq!(inspector.delayed_length(&queue).await?, 0);
    assert!(inspector.job_exists(&job_id).await?);

    let record = inspector.get_job_record(&job_id).await?;
    assert_eq!(record.id, job_id);
    assert_eq!(record.status, JobStatus::Pending);
    assert_eq!(record.queue, queue);
    assert_eq!(record.payload_json()?["uuid"], job_id.as_str());

    let mut conn = forum.get_connection().await?;
    let queued: Vec<String> = conn
        .lrange(QueueKeys::with_queue(&queue).queue_list(), 0, -1)
        .await?;
    assert_eq!(queued, vec![record.payload.clone()]);
    let payload: serde_json::Value = serde_json::from_str(&queued[0])?;
    assert_eq!(payload["uuid"], job_id.as_str());
    assert_eq!(payload["pushedAt"], record.created_at);
    assert_eq!(payload["data"]["commandName"], "App\\Jobs\\Ping");

    let ttl = inspector.get_record_ttl(&job_id).await?;
    assert!(ttl > 0 && ttl <= JOB_RECORD_TTL_SECS);

    let pending_score = inspector.get_pending_score(&job_id).await?;
    assert_eq!(pending_score, Some(-record.created_at));
    assert_eq!(inspector.get_recent_score(&job_id).await?, pending_score);

    clean_job(&forum, &queue, &job_id).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_dispatch_delayed_job() -> Result<()> {
    let forum = create_test_forum();
    let dispatcher = Dispatcher::with_store(forum.clone());
    let inspector = Inspector::new(forum.clone(), APP_NAME);

    let queue = test_queue("test_delay");
    let config = DispatchConfig::new(APP_NAME, "App\\Jobs\\Ping")
        .queue(&queue)
        .delay(60);
    let job_id = dispatcher.dispatch(&config, &[]).await?;

    assert_eq!(inspector.queue_length(&queue).await?, 0);
    assert_eq!(inspector.delayed_length(&queue).await?, 1);

    let record = inspector.get_job_record(&job_id).await?;
    let mut conn = forum.get_connection().await?;
    let run_at: Option<i64> = conn
        .zscore(QueueKeys::with_queue(&queue).delayed_set(), &record.payload)
        .await?;
    assert_eq!(run_at, Some(record.created_at + 60));

    clean_job(&forum, &queue, &job_id).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_job_not_found() {
    let inspector = Inspector::new(create_test_forum(), APP_NAME);
    let unknown_job_id = generate_job_id();

    assert!(!inspector.job_exists(&unknown_job_id).await.unwrap());
    assert!(matches!(
        inspector.get_job_record(&unknown_job_id).await.err().unwrap(),
        HareError::JobNotFound(_)
    ));
    assert!(matches!(
        inspector.get_record_ttl(&unknown_job_id).await.err().unwrap(),
        HareError::JobNotFound(_)
    ));
}
