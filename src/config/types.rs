// Configuration type definitions

use serde::Deserialize;

/// Default public AppView host for actor search
pub const DEFAULT_HOST: &str = "https://public.api.bsky.app";

/// Default bound on suggestion rows
pub const DEFAULT_ROWS: u16 = 5;

/// Upper bound accepted by the search endpoint's `limit` parameter
const MAX_ROWS: u16 = 100;

/// Suggestion source configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    rows: Option<RowsValue>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            host: default_host(),
            rows: None,
        }
    }
}

impl SourceConfig {
    /// Resolved row bound: lenient, non-numeric or out-of-range values fall
    /// back to the default.
    pub fn rows(&self) -> u16 {
        match &self.rows {
            None => DEFAULT_ROWS,
            Some(RowsValue::Count(n)) => clamp_rows(*n),
            Some(RowsValue::Text(s)) => resolve_rows(s),
        }
    }

    /// CLI override; the raw value goes through the same lenient resolution
    pub fn override_rows(&mut self, raw: &str) {
        self.rows = Some(RowsValue::Text(raw.to_string()));
    }
}

/// `rows` may arrive as an integer or a string; both are accepted
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RowsValue {
    Count(i64),
    Text(String),
}

/// Parse a textual row count, falling back to the default on anything that
/// isn't a positive integer.
pub fn resolve_rows(raw: &str) -> u16 {
    raw.trim()
        .parse::<i64>()
        .map(clamp_rows)
        .unwrap_or(DEFAULT_ROWS)
}

fn clamp_rows(n: i64) -> u16 {
    if n < 1 {
        DEFAULT_ROWS
    } else {
        (n.min(i64::from(MAX_ROWS))) as u16
    }
}

/// Theme overrides section - named style variables, all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    pub background: Option<String>,
    pub border: Option<String>,
    pub hover: Option<String>,
    pub handle: Option<String>,
    pub avatar_fallback: Option<Vec<String>>,
    pub padding: Option<u16>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
