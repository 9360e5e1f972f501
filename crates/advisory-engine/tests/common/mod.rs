//! A recording stand-in for the warehouse: replies inline on submission and
//! remembers every statement it was sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use warehouse_execution::StatementExecutor;

pub struct RecordingWarehouse {
    statements: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Value>>,
    poll_responses: Mutex<VecDeque<Value>>,
}

impl RecordingWarehouse {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            statements: Mutex::new(vec![]),
            responses: Mutex::new(VecDeque::new()),
            poll_responses: Mutex::new(VecDeque::new()),
        })
    }

    /// Queue the response for the next submission. When the queue is empty,
    /// the warehouse answers with an empty successful result.
    pub fn enqueue(&self, response: Value) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queue the response for the next status poll.
    pub fn enqueue_poll(&self, response: Value) {
        self.poll_responses.lock().unwrap().push_back(response);
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

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

async fn submit(
    State(warehouse): State<Arc<RecordingWarehouse>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let statement = body["statement"].as_str().unwrap_or_default().to_string();
    warehouse.statements.lock().unwrap().push(statement);

    let next = warehouse.responses.lock().unwrap().pop_front();
    Json(next.unwrap_or_else(|| json!({"statement_id": "stmt-default"})))
}

async fn poll(
    State(warehouse): State<Arc<RecordingWarehouse>>,
    Path(_statement_id): Path<String>,
) -> Json<Value> {
    let next = warehouse.poll_responses.lock().unwrap().pop_front();
    Json(next.unwrap_or_else(|| {
        json!({
            "status": {"state": "SUCCEEDED"},
            "manifest": {"schema": {"columns": [{"name": "value"}]}},
            "result": {"data_array": []}
        })
    }))
}

/// An inline successful response with a one-column result.
pub fn values_response(column: &str, values: &[&str]) -> Value {
    json!({
        "statement_id": "stmt-1",
        "status": {"state": "SUCCEEDED"},
        "manifest": {"schema": {"columns": [{"name": column}]}},
        "result": {"data_array": values.iter().map(|v| vec![*v]).collect::<Vec<_>>()}
    })
}
