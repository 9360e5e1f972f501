use axum::Json;
use serde::Serialize;

use advisory_engine::translate::LANGUAGES;

/// The fixed-choice region selector.
pub const REGIONS: [&str; 5] = ["Region-0", "Region-1", "Region-2", "Region-3", "Region-4"];

/// The fixed-choice soil type selector.
pub const SOIL_TYPES: [&str; 6] = ["Alluvial", "Black", "Red", "Laterite", "Sandy", "Clay"];

#[derive(Serialize)]
pub struct OptionsResponse {
    regions: Vec<&'static str>,
    soil_types: Vec<&'static str>,
    languages: Vec<&'static str>,
}

#[axum_macros::debug_handler()]
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        regions: REGIONS.to_vec(),
        soil_types: SOIL_TYPES.to_vec(),
        languages: LANGUAGES.iter().map(|(label, _)| *label).collect(),
    })
}
