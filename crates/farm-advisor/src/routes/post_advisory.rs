use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use advisory_engine::advisory::fetch_best_advisory;
use advisory_engine::autopick;
use advisory_engine::render::render_advisory;
use advisory_engine::translate::{language_code, translate};

use crate::error::ServerError;
use crate::state::ServerState;

use super::get_suggest::city_filter;

#[derive(Debug, Deserialize)]
pub struct AdvisoryRequest {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Serialize)]
pub struct AdvisoryResponse {
    /// The values the query actually ran with, after auto-picking.
    pub country: String,
    pub region: String,
    pub city: String,
    pub advisory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_warning: Option<String>,
}

#[axum_macros::debug_handler(state = ServerState)]
pub async fn post_advisory(
    State(state): State<ServerState>,
    Json(request): Json<AdvisoryRequest>,
) -> Result<Json<AdvisoryResponse>, ServerError> {
    let missing = missing_fields(&request);
    if !missing.is_empty() {
        return Err(ServerError::MissingFields(missing));
    }

    log::info!(
        "advisory requested for {}/{}/{} (soil type: {})",
        request.country,
        request.region,
        request.city,
        request.soil_type
    );

    // resolve typed text to canonical table values before filtering
    let country = autopick::resolve_field(
        &state.suggestions,
        &state.executor,
        &state.advisory_table,
        "soil_country",
        &request.country,
        None,
    )
    .await
    .picked;

    let filter = city_filter(&country, &request.region);
    let filter = (!filter.is_empty()).then_some(filter);
    let city = autopick::resolve_field(
        &state.suggestions,
        &state.executor,
        &state.advisory_table,
        "city",
        &request.city,
        filter.as_deref(),
    )
    .await
    .picked;

    let row = fetch_best_advisory(
        &state.executor,
        &state.advisory_table,
        &country,
        &request.region,
        &city,
    )
    .await?
    .ok_or(ServerError::NoData)?;

    let advisory = render_advisory(&row);

    // translation problems must not sink the advisory itself
    let description = row.text("description").unwrap_or_default();
    let (translated_description, translation_warning) = if description.trim().is_empty() {
        (
            None,
            Some("AI description not available: no description in row".to_string()),
        )
    } else {
        match translate(
            &state.executor,
            &description,
            language_code(&request.language),
        )
        .await
        {
            Ok(text) => (Some(text), None),
            Err(err) => (None, Some(format!("AI description not available: {err}"))),
        }
    };

    Ok(Json(AdvisoryResponse {
        country,
        region: request.region,
        city,
        advisory,
        translated_description,
        translation_warning,
    }))
}

/// The required fields that are absent from the request, named the way the
/// user sees them. No remote call happens while this is non-empty.
fn missing_fields(request: &AdvisoryRequest) -> Vec<String> {
    let mut missing = vec![];
    if request.country.trim().is_empty() {
        missing.push("Country".to_string());
    }
    if request.region.trim().is_empty() {
        missing.push("State/Region".to_string());
    }
    if request.city.trim().is_empty() {
        missing.push("City/District".to_string());
    }
    missing
}
