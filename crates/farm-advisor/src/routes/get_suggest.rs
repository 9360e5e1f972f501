use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use advisory_engine::autopick;
use advisory_engine::sql::escape_literal;

use crate::state::ServerState;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestField {
    Country,
    City,
}

#[derive(Deserialize)]
pub struct SuggestParams {
    pub field: SuggestField,
    #[serde(default)]
    pub typed: String,
    /// Picked country, used to narrow city suggestions.
    #[serde(default)]
    pub country: String,
    /// Picked region, used to narrow city suggestions.
    #[serde(default)]
    pub region: String,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub picked: String,
    pub matches: Vec<String>,
}

#[axum_macros::debug_handler(state = ServerState)]
pub async fn get_suggest(
    State(state): State<ServerState>,
    Query(params): Query<SuggestParams>,
) -> Json<SuggestResponse> {
    let (column, extra_filter) = match params.field {
        SuggestField::Country => ("soil_country", None),
        SuggestField::City => ("city", Some(city_filter(&params.country, &params.region))),
    };
    let extra_filter = extra_filter.filter(|filter| !filter.is_empty());

    let resolved = autopick::resolve_field(
        &state.suggestions,
        &state.executor,
        &state.advisory_table,
        column,
        &params.typed,
        extra_filter.as_deref(),
    )
    .await;

    Json(SuggestResponse {
        picked: resolved.picked,
        matches: resolved.matches,
    })
}

/// Equality constraints a city lookup inherits from the picked country and
/// region.
pub fn city_filter(country: &str, region: &str) -> String {
    let mut filters = vec![];
    if !country.is_empty() {
        filters.push(format!(
            "lower(soil_country) = lower('{}')",
            escape_literal(country)
        ));
    }
    if !region.is_empty() {
        filters.push(format!(
            "lower(soil_stateOrRegion) = lower('{}')",
            escape_literal(region)
        ));
    }
    filters.join(" AND ")
}
