//! An in-process stand-in for the warehouse statement endpoint.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use warehouse_execution::StatementExecutor;

pub struct FakeWarehouse {
    submit_status: StatusCode,
    submit_body: Value,
    poll_bodies: Mutex<VecDeque<Value>>,
    polls: AtomicUsize,
}

impl FakeWarehouse {
    /// A warehouse that accepts the submission with `submit_body` and then
    /// serves `poll_bodies` in order. Once the queue is drained, further
    /// polls report a statement that is still running.
    pub fn new(submit_body: Value, poll_bodies: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            submit_status: StatusCode::OK,
            submit_body,
            poll_bodies: Mutex::new(poll_bodies.into()),
            polls: AtomicUsize::new(0),
        })
    }

    /// A warehouse that rejects the submission outright.
    pub fn rejecting(submit_status: StatusCode, submit_body: Value) -> Arc<Self> {
        Arc::new(Self {
            submit_status,
            submit_body,
            poll_bodies: Mutex::new(VecDeque::new()),
            polls: AtomicUsize::new(0),
        })
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    /// Serve the fake warehouse on an ephemeral port and return an executor
    /// pointed at it.
    pub async fn start(self: &Arc<Self>) -> StatementExecutor {
        let router = Router::new()
            .route("/statements", post(submit))
            .route("/statements/:statement_id", get(poll))
            .with_state(self.clone());

        let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
            .serve(router.into_make_service());
        let address = server.local_addr();
        tokio::spawn(server);

        StatementExecutor::new(
            format!("http://{address}/statements"),
            "test-token".to_string(),
            "test-warehouse".to_string(),
        )
    }
}

async fn submit(State(warehouse): State<Arc<FakeWarehouse>>) -> (StatusCode, Json<Value>) {
    (
        warehouse.submit_status,
        Json(warehouse.submit_body.clone()),
    )
}

async fn poll(
    State(warehouse): State<Arc<FakeWarehouse>>,
    Path(_statement_id): Path<String>,
) -> Json<Value> {
    warehouse.polls.fetch_add(1, Ordering::SeqCst);
    let next = warehouse.poll_bodies.lock().unwrap().pop_front();
    Json(next.unwrap_or_else(|| json!({"status": {"state": "RUNNING"}})))
}

/// A succeeded response carrying a one-column inline table.
pub fn succeeded_with_values(column: &str, values: &[&str]) -> Value {
    json!({
        "status": {"state": "SUCCEEDED"},
        "manifest": {"schema": {"columns": [{"name": column}]}},
        "result": {"data_array": values.iter().map(|v| vec![*v]).collect::<Vec<_>>()}
    })
}
