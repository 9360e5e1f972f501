//! Submit a statement to the warehouse and poll it to completion.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info_span, Instrument};

use crate::error::Error;
use crate::response::StatementResponse;

/// Ask the warehouse to return small results directly in the submission
/// response instead of requiring a follow-up fetch.
const INLINE_DISPOSITION: &str = "INLINE";

/// Fixed delay between successive polls of a running statement.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

const SUCCEEDED: &str = "SUCCEEDED";
const FAILED: &str = "FAILED";
const CANCELED: &str = "CANCELED";

/// Executes SQL statements against the warehouse statement endpoint.
///
/// Holds no per-statement state; every call is an independent
/// submit-then-poll cycle.
#[derive(Debug, Clone)]
pub struct StatementExecutor {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    warehouse_id: String,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    statement: &'a str,
    warehouse_id: &'a str,
    disposition: &'a str,
}

impl StatementExecutor {
    pub fn new(endpoint: String, access_token: String, warehouse_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            access_token,
            warehouse_id,
        }
    }

    /// Submit `statement` and wait for its result.
    ///
    /// A submission response that already carries inline data is returned
    /// without polling. Otherwise the statement handle is polled at a fixed
    /// interval until the statement succeeds, reaches a terminal failure
    /// state, or `max_wait` elapses.
    pub async fn execute(
        &self,
        statement: &str,
        max_wait: Duration,
    ) -> Result<StatementResponse, Error> {
        let submitted = self
            .submit(statement)
            .instrument(info_span!("Submit statement"))
            .await?;

        if submitted.has_inline_result() {
            return Ok(submitted);
        }

        let statement_id = submitted.statement_id.ok_or_else(|| {
            Error::Submission("no statement_id in submission response".to_string())
        })?;

        self.poll(&statement_id, max_wait)
            .instrument(info_span!("Poll statement", statement_id = %statement_id))
            .await
    }

    async fn submit(&self, statement: &str) -> Result<StatementResponse, Error> {
        tracing::debug!(statement, "submitting statement");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&SubmitRequest {
                statement,
                warehouse_id: &self.warehouse_id,
                disposition: INLINE_DISPOSITION,
            })
            .send()
            .await?;

        parse_response(response).await
    }

    async fn poll(
        &self,
        statement_id: &str,
        max_wait: Duration,
    ) -> Result<StatementResponse, Error> {
        let status_url = format!("{}/{}", self.endpoint, statement_id);
        let started = Instant::now();

        while started.elapsed() < max_wait {
            tokio::time::sleep(POLL_INTERVAL).await;

            let response = self
                .client
                .get(&status_url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;
            let current = parse_response(response).await?;

            let state = current
                .status
                .as_ref()
                .map(|status| status.state.clone())
                .unwrap_or_default();

            match state.as_str() {
                SUCCEEDED => return Ok(current),
                FAILED | CANCELED => {
                    let message = current
                        .status
                        .and_then(|status| status.error)
                        .and_then(|error| error.message)
                        .unwrap_or_default();
                    return Err(Error::Query { state, message });
                }
                // any other state counts as still in progress
                _ => {}
            }
        }

        Err(Error::Timeout { waited: max_wait })
    }
}

async fn parse_response(response: reqwest::Response) -> Result<StatementResponse, Error> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Transport {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}
