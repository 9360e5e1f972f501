pub mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::json;
use similar_asserts::assert_eq;

use common::{succeeded_with_values, FakeWarehouse};
use warehouse_execution::{Error, Table};

const MAX_WAIT: Duration = Duration::from_secs(30);

#[tokio::test]
async fn inline_result_is_returned_without_polling() {
    let warehouse = FakeWarehouse::new(
        json!({
            "statement_id": "stmt-1",
            "status": {"state": "SUCCEEDED"},
            "manifest": {"schema": {"columns": [{"name": "value"}]}},
            "result": {"data_array": [["Paris"]]}
        }),
        vec![],
    );
    let executor = warehouse.start().await;

    let response = executor.execute("SELECT 1", MAX_WAIT).await.unwrap();
    let table = Table::decode(&response);

    assert_eq!(table.first_column_values(), vec!["Paris".to_string()]);
    assert_eq!(warehouse.poll_count(), 0);
}

#[tokio::test]
async fn statement_is_polled_until_succeeded() {
    let warehouse = FakeWarehouse::new(
        json!({"statement_id": "stmt-2"}),
        vec![
            json!({"status": {"state": "PENDING"}}),
            succeeded_with_values("value", &["Paraguay"]),
        ],
    );
    let executor = warehouse.start().await;

    let response = executor.execute("SELECT 1", MAX_WAIT).await.unwrap();
    let table = Table::decode(&response);

    assert_eq!(table.first_column_values(), vec!["Paraguay".to_string()]);
    assert_eq!(warehouse.poll_count(), 2);
}

#[tokio::test]
async fn failed_statement_errors_before_the_budget_elapses() {
    let warehouse = FakeWarehouse::new(
        json!({"statement_id": "stmt-3"}),
        vec![json!({
            "status": {"state": "FAILED", "error": {"message": "table not found"}}
        })],
    );
    let executor = warehouse.start().await;

    let started = Instant::now();
    let err = executor.execute("SELECT 1", MAX_WAIT).await.unwrap_err();

    match err {
        Error::Query { state, message } => {
            assert_eq!(state, "FAILED");
            assert_eq!(message, "table not found");
        }
        other => panic!("expected Query error, got {other:?}"),
    }
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(warehouse.poll_count(), 1);
}

#[tokio::test]
async fn canceled_statement_is_a_query_error() {
    let warehouse = FakeWarehouse::new(
        json!({"statement_id": "stmt-4"}),
        vec![json!({"status": {"state": "CANCELED"}})],
    );
    let executor = warehouse.start().await;

    let err = executor.execute("SELECT 1", MAX_WAIT).await.unwrap_err();
    assert!(matches!(err, Error::Query { state, .. } if state == "CANCELED"));
}

#[tokio::test]
async fn missing_statement_id_is_a_submission_error() {
    let warehouse = FakeWarehouse::new(json!({}), vec![]);
    let executor = warehouse.start().await;

    let err = executor.execute("SELECT 1", MAX_WAIT).await.unwrap_err();
    assert!(matches!(err, Error::Submission(_)));
}

#[tokio::test]
async fn empty_inline_result_still_requires_a_handle() {
    // inline data that is present but empty must not short-circuit polling
    let warehouse = FakeWarehouse::new(
        json!({"result": {"data_array": []}}),
        vec![],
    );
    let executor = warehouse.start().await;

    let err = executor.execute("SELECT 1", MAX_WAIT).await.unwrap_err();
    assert!(matches!(err, Error::Submission(_)));
}

#[tokio::test]
async fn non_success_submit_status_is_a_transport_error() {
    let warehouse = FakeWarehouse::rejecting(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "warehouse is down"}),
    );
    let executor = warehouse.start().await;

    let err = executor.execute("SELECT 1", MAX_WAIT).await.unwrap_err();
    match err {
        Error::Transport { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("warehouse is down"));
        }
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn exhausted_poll_budget_is_a_timeout() {
    // the poll queue is empty, so the statement stays RUNNING forever
    let warehouse = FakeWarehouse::new(json!({"statement_id": "stmt-5"}), vec![]);
    let executor = warehouse.start().await;

    let err = executor
        .execute("SELECT 1", Duration::from_secs(2))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }));
    assert!(warehouse.poll_count() >= 1);
}
