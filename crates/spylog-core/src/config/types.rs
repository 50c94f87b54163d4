//! Resolved configuration types

use super::error::ConfigError;
use super::keys::{self, Setting};
use super::resolve::Resolver;
use super::source::SourceKind;
use serde::Serialize;
use std::path::PathBuf;

/// Fully resolved proxy configuration.
///
/// Built in one pass by [`Resolver::resolve`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpyLogConfig {
    /// Spy log delegator implementation; never empty
    pub spy_log_delegator_name: String,
    /// Package prefix for locating the calling frame
    pub debug_stack_prefix: Option<String>,
    /// Warn threshold for SQL timing, in milliseconds
    pub sql_timing_warn_threshold_ms: Option<u64>,
    /// Error threshold for SQL timing, in milliseconds
    pub sql_timing_error_threshold_ms: Option<u64>,
    pub dump_boolean_as_true_false: bool,
    /// Wrap column for dumped SQL (0 = no wrapping)
    pub dump_sql_max_line_length: u32,
    pub dump_full_debug_stack_trace: bool,
    pub statement_usage_warn: bool,
    pub dump_sql_select: bool,
    pub dump_sql_insert: bool,
    pub dump_sql_update: bool,
    pub dump_sql_delete: bool,
    pub dump_sql_create: bool,
    pub dump_sql_add_semicolon: bool,
    pub trim_sql: bool,
    pub trim_extra_blank_lines: bool,
    pub suppress_get_generated_keys_exception: bool,
    pub auto_load_popular_drivers: bool,
    /// Extra driver class names
    pub additional_drivers: Vec<String>,
    /// Properties file consulted during resolution
    pub properties_file: PropertiesFileStatus,
    /// Per-setting value and origin, in catalogue order
    pub entries: Vec<ResolvedEntry>,
}

/// Properties file lookup outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesFileStatus {
    /// Resource name that was requested
    pub requested: String,
    /// Where the requested name came from
    pub requested_from: SourceKind,
    /// File actually read, if one was found
    pub path: Option<PathBuf>,
    /// Entries loaded from the file
    pub entries: usize,
}

/// One setting's resolved value and origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntry {
    pub key: &'static str,
    /// Normalised value; `None` for unset optional settings
    pub value: Option<String>,
    /// Supplying source; `None` for unset optional settings
    pub source: Option<SourceKind>,
}

impl SpyLogConfig {
    /// Resolve from the process environment and default resource roots.
    ///
    /// This is the explicit construction path for applications that pass the
    /// configuration around instead of using [`crate::global`].
    pub fn load() -> Self {
        Resolver::from_process().resolve()
    }

    /// Resolved value of `key` (namespaced or legacy spelling)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] if `key` is not a recognised
    /// setting.
    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        self.entry(key).map(|e| e.value.as_deref())
    }

    /// Resolved entry for `key` (namespaced or legacy spelling)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] if `key` is not a recognised
    /// setting.
    pub fn entry(&self, key: &str) -> Result<&ResolvedEntry, ConfigError> {
        let setting =
            Setting::lookup(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        self.entries
            .iter()
            .find(|e| e.key == setting.key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    /// Source that supplied the delegator name
    pub fn spy_log_delegator_source(&self) -> SourceKind {
        self.entry(keys::SPY_LOG_DELEGATOR_NAME)
            .ok()
            .and_then(|e| e.source)
            .unwrap_or(SourceKind::Default)
    }
}

impl Default for SpyLogConfig {
    /// Configuration with every setting at its compiled-in default
    fn default() -> Self {
        Resolver::new(Default::default(), Vec::new())
            .with_properties_file_disabled()
            .resolve()
    }
}
