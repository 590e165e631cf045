// Behavior of the simulated-latency chat pipeline: the configured delay,
// the busy flag that rejects concurrent submissions, and the blank-input
// no-op.

use std::time::{Duration, Instant};

use argo_dashboard_service::catalog::models::ChatData;
use argo_dashboard_service::services::{ChatError, ChatService};

#[tokio::test]
async fn reply_arrives_after_the_configured_delay() {
    let service = ChatService::new(Duration::from_millis(50));

    let started = Instant::now();
    let reply = service.respond("temperature please").await.unwrap().unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert!(matches!(reply.data, Some(ChatData::TemperatureAnalysis { .. })));
}

#[tokio::test]
async fn second_submission_is_rejected_while_one_is_pending() {
    let service = ChatService::new(Duration::from_millis(200));

    let first = tokio::spawn({
        let service = service.clone();
        async move { service.respond("show me temperature data").await }
    });

    // Let the first request reach its simulated-latency sleep.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let second = service.respond("salinity instead").await;
    assert!(matches!(second, Err(ChatError::Busy)));

    let first = first.await.unwrap().unwrap().unwrap();
    assert!(matches!(first.data, Some(ChatData::TemperatureAnalysis { .. })));
}

#[tokio::test]
async fn busy_flag_clears_once_the_reply_is_delivered() {
    let service = ChatService::new(Duration::from_millis(10));

    let first = service.respond("float positions").await.unwrap().unwrap();
    assert!(matches!(first.data, Some(ChatData::FloatSearch { .. })));

    let second = service.respond("oxygen levels").await.unwrap().unwrap();
    assert!(matches!(second.data, Some(ChatData::BgcAnalysis { .. })));
}

#[tokio::test]
async fn blank_input_is_a_no_op_and_does_not_take_the_busy_slot() {
    let service = ChatService::new(Duration::from_millis(500));

    let started = Instant::now();
    let reply = service.respond("   \n\t  ").await.unwrap();
    assert!(reply.is_none());
    // No delay is simulated for ignored input.
    assert!(started.elapsed() < Duration::from_millis(100));

    let follow_up = service.respond("temperature").await;
    assert!(follow_up.is_ok());
}
