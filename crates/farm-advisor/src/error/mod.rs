use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub enum ServerError {
    MissingFields(Vec<String>),
    Warehouse(warehouse_execution::Error),
    NoData,
}

#[derive(Serialize)]
struct JsonErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message, missing) = match self {
            ServerError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                format!("Please enter: {}", fields.join(", ")),
                fields,
            ),
            ServerError::Warehouse(err) => (StatusCode::BAD_GATEWAY, err.to_string(), vec![]),
            ServerError::NoData => (
                StatusCode::NOT_FOUND,
                "No data found for the requested location".to_string(),
                vec![],
            ),
        };

        log::error!("Returning error: {message} with status code: {status}");
        (status, Json(JsonErrorResponse { message, missing })).into_response()
    }
}

impl From<warehouse_execution::Error> for ServerError {
    fn from(value: warehouse_execution::Error) -> Self {
        ServerError::Warehouse(value)
    }
}
