//! Render one advisory row into the fixed farmer-facing report.

use serde_json::Value;

use crate::advisory::AdvisoryRow;

/// Two-decimal formatting for anything numeric (including numeric strings),
/// the raw string form otherwise, and "N/A" for absent fields.
fn fmt(value: Option<&Value>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => format!("{f:.2}"),
            None => n.to_string(),
        },
        Some(Value::String(s)) => match s.parse::<f64>() {
            Ok(f) => format!("{f:.2}"),
            Err(_) => s.clone(),
        },
        Some(other) => other.to_string(),
    }
}

fn text_or(row: &AdvisoryRow, field: &str, default: &str) -> String {
    row.text(field).unwrap_or_else(|| default.to_string())
}

/// Produce the advisory report for one row. Pure and total: every missing
/// field renders as a placeholder.
pub fn render_advisory(row: &AdvisoryRow) -> String {
    let crop = text_or(row, "crop_cropName", "a suitable crop");
    let stage = text_or(row, "crop_growthStage", "unknown stage");
    let soil_category = text_or(row, "soilMoistureCategory", "Unknown");
    let pest_category = text_or(row, "pestRiskCategory", "Unknown");
    let rainfall_type = text_or(row, "rainfall_rainfallType", "Unknown");

    format!(
        "### ✅ Farm Advisory Summary\n\
         \n\
         **Recommended focus crop:** **{crop}**  \n\
         **Current crop stage:** {stage}\n\
         \n\
         ---\n\
         \n\
         ### 🌱 Crop Health\n\
         - Health score: **{health}**\n\
         - NDVI index: **{ndvi}**\n\
         - Leaf moisture: **{leaf}**\n\
         \n\
         ---\n\
         \n\
         ### 🧪 Soil Condition\n\
         - Soil moisture: **{soil_moisture}** (**{soil_category}**)\n\
         - Soil temperature: **{soil_temperature} °C**\n\
         - Soil humidity: **{soil_humidity} %**\n\
         \n\
         **Action:** If soil moisture is low, use drip irrigation or mulching.\n\
         \n\
         ---\n\
         \n\
         ### 🐛 Pest Risk\n\
         - Category: **{pest_category}**\n\
         - Risk score: **{pest_risk}**\n\
         \n\
         **Action:** If risk is High, inspect leaves weekly and use IPM.\n\
         \n\
         ---\n\
         \n\
         ### 🌧 Weather & Rainfall\n\
         - Rainfall: **{rainfall} mm**\n\
         - Type: **{rainfall_type}**\n\
         \n\
         ---\n\
         \n\
         ### 📈 Yield & Profitability (AI)\n\
         - Yield prediction: **{yield_score}**\n\
         - Profitability: **{profitability}**\n\
         - Sustainability: **{sustainability}**\n\
         \n\
         ---\n\
         \n\
         ### 💰 Market Signal\n\
         - Market crop price: **{price}**\n\
         \n\
         ---\n\
         \n\
         ✅ **Farmer-friendly advice:**  \n\
         Focus on **{crop}** now. Keep soil moisture healthy, watch pests \
         (**{pest_category}**) and plan irrigation based on rainfall.",
        health = fmt(row.get("crop_cropHealthScore")),
        ndvi = fmt(row.get("crop_ndviIndex")),
        leaf = fmt(row.get("crop_leafMoisture")),
        soil_moisture = fmt(row.get("soil_soilMoisture")),
        soil_temperature = fmt(row.get("soil_temperature")),
        soil_humidity = fmt(row.get("soil_humidity")),
        pest_risk = fmt(row.get("pest_pestRisk")),
        rainfall = fmt(row.get("rainfall_rainfallMm")),
        yield_score = fmt(row.get("yieldPredictionScore")),
        profitability = fmt(row.get("profitabilityIndex")),
        sustainability = fmt(row.get("sustainabilityScore")),
        price = fmt(row.get("market_cropPrice")),
    )
}
