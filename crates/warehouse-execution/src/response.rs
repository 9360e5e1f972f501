//! Wire format of the warehouse statement API and conversion into tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A statement submission or poll response. Every part is optional on the
/// wire; the decoder below is responsible for making sense of what is there.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatementResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatementStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Manifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultData>,
}

impl StatementResponse {
    /// Whether the response already carries non-empty inline row data, in
    /// either of the two row encodings.
    pub fn has_inline_result(&self) -> bool {
        self.result.as_ref().is_some_and(|result| {
            result.data_array.as_ref().is_some_and(|rows| !rows.is_empty())
                || result
                    .data_typed_array
                    .as_ref()
                    .is_some_and(|rows| !rows.is_empty())
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatementStatus {
    #[serde(default)]
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StatementError>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatementError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub schema: Schema,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Schema {
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ColumnInfo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResultData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_array: Option<Vec<Vec<Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_typed_array: Option<Vec<Vec<TypedCell>>>,
}

/// One cell of the typed row encoding. At most one of the fields is
/// populated; the warehouse leaves all of them out for a NULL cell.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TypedCell {
    #[serde(rename = "str", skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<i64>,
    #[serde(rename = "bool", skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
}

impl TypedCell {
    /// The first populated field wins, in {string, double, long, bool}
    /// priority order; a cell with none populated is NULL.
    pub fn into_scalar(self) -> Value {
        let TypedCell {
            string,
            double,
            long,
            boolean,
        } = self;
        [
            string.map(Value::from),
            double.map(Value::from),
            long.map(Value::from),
            boolean.map(Value::from),
        ]
        .into_iter()
        .flatten()
        .next()
        .unwrap_or(Value::Null)
    }
}

/// An ordered, rectangular view of a statement result. Column names come
/// from the manifest, never from the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Decode a statement response into a table. Total: structural absence
    /// of any part yields an empty table rather than an error. A response
    /// without a schema manifest decodes as empty even when inline row data
    /// is present.
    pub fn decode(response: &StatementResponse) -> Table {
        let columns: Vec<String> = match &response.manifest {
            None => vec![],
            Some(manifest) => manifest
                .schema
                .columns
                .iter()
                .map(|column| column.name.clone())
                .collect(),
        };
        if columns.is_empty() {
            return Table::default();
        }

        let result = match &response.result {
            None => return Table { columns, rows: vec![] },
            Some(result) => result,
        };

        let width = columns.len();
        let rows = if let Some(data_array) = &result.data_array {
            data_array
                .iter()
                .map(|row| rectangular(row.clone(), width))
                .collect()
        } else if let Some(data_typed_array) = &result.data_typed_array {
            data_typed_array
                .iter()
                .map(|row| {
                    rectangular(
                        row.iter().cloned().map(TypedCell::into_scalar).collect(),
                        width,
                    )
                })
                .collect()
        } else {
            vec![]
        };

        Table { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row as a field-name-to-value map.
    pub fn first_row(&self) -> Option<BTreeMap<String, Value>> {
        self.rows.first().map(|row| {
            self.columns
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect()
        })
    }

    /// The values of the first column, nulls dropped, in row order.
    pub fn first_column_values(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.first())
            .filter(|value| !value.is_null())
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// Pad or truncate a row to the manifest width so the table stays
/// rectangular.
fn rectangular(mut row: Vec<Value>, width: usize) -> Vec<Value> {
    row.resize(width, Value::Null);
    row
}
