//! Translate advisory text through the warehouse-side translation function.
//!
//! There is no separate translation endpoint: the call is a single-row SQL
//! expression sent over the same submission/poll channel as everything else.

use std::time::Duration;

use warehouse_execution::{Error as ExecutionError, StatementExecutor, Table};

use crate::sql::escape_literal;

/// Poll budget for a translation statement.
const TRANSLATE_MAX_WAIT: Duration = Duration::from_secs(40);

/// Output languages offered to the user, paired with the code understood by
/// the warehouse translation function.
pub const LANGUAGES: [(&str, &str); 8] = [
    ("English", "en"),
    ("Hindi", "hi"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Thai", "th"),
];

/// Look up the language code for a display label.
pub fn language_code(label: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Languages without a code require model serving infrastructure that is
    /// not assumed available.
    #[error("this language requires a model serving endpoint that is not available")]
    UnsupportedLanguage,

    #[error("translation returned an empty result")]
    EmptyResult,

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Translate `text` into the language identified by `lang_code`. Empty input
/// short-circuits to an empty translation without touching the warehouse.
pub async fn translate(
    executor: &StatementExecutor,
    text: &str,
    lang_code: Option<&str>,
) -> Result<String, TranslateError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(String::new());
    }

    let lang_code = lang_code.ok_or(TranslateError::UnsupportedLanguage)?;

    let sql = format!(
        "SELECT ai_translate('{}', '{}') AS translated",
        escape_literal(text),
        escape_literal(lang_code),
    );
    let response = executor.execute(&sql, TRANSLATE_MAX_WAIT).await?;

    Table::decode(&response)
        .first_column_values()
        .into_iter()
        .next()
        .ok_or(TranslateError::EmptyResult)
}
