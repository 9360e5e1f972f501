//! The advisory lookup: one filtered query over the analytics table, best
//! row first.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

use warehouse_execution::{Error, StatementExecutor, Table};

use crate::sql::escape_literal;

/// Poll budget for the advisory query.
const ADVISORY_MAX_WAIT: Duration = Duration::from_secs(40);

/// The columns the advisory report consumes, in manifest order.
const ADVISORY_COLUMNS: [&str; 22] = [
    "date",
    "soil_country",
    "soil_stateOrRegion",
    "city",
    "crop_cropName",
    "crop_growthStage",
    "crop_cropHealthScore",
    "crop_ndviIndex",
    "crop_leafMoisture",
    "soil_soilMoisture",
    "soil_temperature",
    "soil_humidity",
    "soilMoistureCategory",
    "pestRiskCategory",
    "pest_pestRisk",
    "rainfall_rainfallMm",
    "rainfall_rainfallType",
    "yieldPredictionScore",
    "profitabilityIndex",
    "sustainabilityScore",
    "market_cropPrice",
    "description",
];

/// One record of the analytics table, keyed by column name. Read-only;
/// consumed once to render the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvisoryRow(pub BTreeMap<String, Value>);

impl AdvisoryRow {
    /// A field value, treating JSON null the same as absence.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    /// The raw string form of a field, if present.
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// The final filter query: case-insensitive equality on country, region and
/// city, best rows first.
pub fn build_advisory_query(table: &str, country: &str, region: &str, city: &str) -> String {
    format!(
        "SELECT {columns} FROM {table} \
         WHERE lower(soil_country) = lower('{country}') \
         AND lower(soil_stateOrRegion) = lower('{region}') \
         AND lower(city) = lower('{city}') \
         ORDER BY profitabilityIndex DESC, yieldPredictionScore DESC \
         LIMIT 5",
        columns = ADVISORY_COLUMNS.join(", "),
        country = escape_literal(country),
        region = escape_literal(region),
        city = escape_literal(city),
    )
}

/// Run the advisory query and return the best row, if any.
pub async fn fetch_best_advisory(
    executor: &StatementExecutor,
    table: &str,
    country: &str,
    region: &str,
    city: &str,
) -> Result<Option<AdvisoryRow>, Error> {
    let sql = build_advisory_query(table, country, region, city);
    let response = executor.execute(&sql, ADVISORY_MAX_WAIT).await?;
    Ok(Table::decode(&response).first_row().map(AdvisoryRow))
}
