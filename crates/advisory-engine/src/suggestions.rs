//! Prefix suggestions over the advisory table, memoized for a short window.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use warehouse_execution::{StatementExecutor, Table};

use crate::sql::escape_literal;

/// Poll budget for a suggestion query.
const SUGGESTION_MAX_WAIT: Duration = Duration::from_secs(30);

/// How long a cached suggestion list stays valid.
pub const SUGGESTION_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    column: String,
    prefix: String,
    extra_filter: String,
    limit: usize,
}

struct CacheEntry {
    values: Vec<String>,
    expires_at: Instant,
}

/// A time-bound memoization table for suggestion queries: full parameter
/// tuple to (list, expiry), with expiry checked on read. Suggestions are
/// best-effort, so execution problems degrade to an empty list instead of
/// surfacing.
pub struct SuggestionCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::with_ttl(SUGGESTION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The first page of distinct values of `column` starting with `typed`,
    /// optionally constrained by `extra_filter`, ascending. A cache hit
    /// answers without a remote call.
    pub async fn suggest(
        &self,
        executor: &StatementExecutor,
        table: &str,
        column: &str,
        typed: &str,
        extra_filter: Option<&str>,
        limit: usize,
    ) -> Vec<String> {
        let typed = typed.trim();
        if typed.is_empty() {
            return vec![];
        }

        let key = CacheKey {
            column: column.to_string(),
            prefix: typed.to_string(),
            extra_filter: extra_filter.unwrap_or_default().to_string(),
            limit,
        };
        if let Some(values) = self.lookup(&key) {
            return values;
        }

        let sql = build_suggestion_query(table, column, typed, extra_filter, limit);
        let values = match executor.execute(&sql, SUGGESTION_MAX_WAIT).await {
            Ok(response) => distinct_values(&Table::decode(&response)),
            Err(err) => {
                tracing::warn!("suggestion query failed: {err}");
                return vec![];
            }
        };

        self.store(key, values.clone());
        values
    }

    fn lookup(&self, key: &CacheKey) -> Option<Vec<String>> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.values.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn store(&self, key: CacheKey, values: Vec<String>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key,
            CacheEntry {
                values,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

/// `SELECT DISTINCT {column} AS value ... WHERE lower({column}) LIKE
/// 'prefix%' [AND extra] ORDER BY value LIMIT {limit}`, with the prefix
/// lowercased and escaped.
fn build_suggestion_query(
    table: &str,
    column: &str,
    typed: &str,
    extra_filter: Option<&str>,
    limit: usize,
) -> String {
    let prefix = escape_literal(&typed.to_lowercase());
    let mut predicate = format!("WHERE lower({column}) LIKE '{prefix}%'");
    if let Some(extra) = extra_filter {
        if !extra.is_empty() {
            predicate.push_str(" AND ");
            predicate.push_str(extra);
        }
    }
    format!(
        "SELECT DISTINCT {column} AS value FROM {table} {predicate} ORDER BY value LIMIT {limit}"
    )
}

/// First column of the table, nulls dropped, deduplicated preserving
/// first-seen order.
fn distinct_values(table: &Table) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .first_column_values()
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
