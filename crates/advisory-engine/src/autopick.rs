//! Auto-pick resolution for typed input fields.
//!
//! As the user types, the first matching distinct value is silently
//! substituted as the "picked" value. Downstream filters consume the picked
//! value, not the raw text.

use warehouse_execution::StatementExecutor;

use crate::suggestions::SuggestionCache;

/// How many distinct matches an auto-pick lookup requests.
pub const AUTO_PICK_LIMIT: usize = 50;

/// A resolved field: the picked value plus the matches it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub picked: String,
    pub matches: Vec<String>,
}

/// Pick the value a field resolves to: empty input stays empty; the first
/// match wins when there is one (the suggestion query orders ascending, so
/// this is the lexicographically smallest); otherwise the typed text passes
/// through unchanged.
pub fn auto_pick(typed: &str, matches: &[String]) -> String {
    let typed = typed.trim();
    if typed.is_empty() {
        return String::new();
    }
    matches
        .first()
        .cloned()
        .unwrap_or_else(|| typed.to_string())
}

/// Resolve a typed field through the suggestion cache and auto-pick the
/// result.
pub async fn resolve_field(
    cache: &SuggestionCache,
    executor: &StatementExecutor,
    table: &str,
    column: &str,
    typed: &str,
    extra_filter: Option<&str>,
) -> Resolved {
    let matches = cache
        .suggest(executor, table, column, typed, extra_filter, AUTO_PICK_LIMIT)
        .await;
    let picked = auto_pick(typed, &matches);
    Resolved { picked, matches }
}
