//! Configuration resolution
//!
//! Each setting is resolved independently by walking the source chain:
//!
//! 1. Direct overrides ([`ConfigOverrides`])
//! 2. Properties file (location from `log4jdbc.log4j2.properties.file`)
//! 3. Process environment, namespaced key then legacy key
//! 4. Compiled-in defaults
//!
//! Blank values count as unset. A value that does not parse as the setting's
//! kind is logged and skipped, so the next source gets a turn. Resolution
//! never fails.

use super::error::ConfigError;
use super::keys::{self, Setting};
use super::location::{default_resource_roots, locate};
use super::properties::Properties;
use super::source::{
    ConfigOverrides, ConfigSource, DefaultSource, EnvSource, OverrideSource,
    PropertiesFileSource, SourceKind,
};
use super::types::{PropertiesFileStatus, ResolvedEntry, SpyLogConfig};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Builds a [`SpyLogConfig`] from an explicit set of inputs
pub struct Resolver {
    overrides: ConfigOverrides,
    env: EnvSource,
    resource_roots: Vec<PathBuf>,
    read_properties_file: bool,
    extra_sources: Vec<Box<dyn ConfigSource>>,
}

impl Resolver {
    /// Resolver over the given environment snapshot and resource roots
    pub fn new(env: EnvSource, resource_roots: Vec<PathBuf>) -> Self {
        Self {
            overrides: ConfigOverrides::default(),
            env,
            resource_roots,
            read_properties_file: true,
            extra_sources: Vec::new(),
        }
    }

    /// Resolver over the live process environment and default resource roots
    pub fn from_process() -> Self {
        Self::new(EnvSource::from_process(), default_resource_roots())
    }

    /// Replace the direct overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Prepend a resource root (searched before the existing ones)
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_roots.insert(0, root.into());
        self
    }

    /// Skip the properties file entirely
    pub fn with_properties_file_disabled(mut self) -> Self {
        self.read_properties_file = false;
        self
    }

    /// Append a source below the environment and above the defaults
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.extra_sources.push(source);
        self
    }

    /// Resolve every setting.
    pub fn resolve(self) -> SpyLogConfig {
        let (properties, properties_file) = self.load_properties_file();

        let mut chain: Vec<Box<dyn ConfigSource>> = vec![
            Box::new(OverrideSource::new(self.overrides)),
            Box::new(PropertiesFileSource::new(properties)),
            Box::new(self.env),
        ];
        chain.extend(self.extra_sources);
        chain.push(Box::new(DefaultSource));

        let mut walk = Walk {
            chain: &chain,
            entries: Vec::with_capacity(keys::SETTINGS.len()),
        };

        let spy_log_delegator_name = walk
            .pick(&keys::SPY_LOG_DELEGATOR, parse_text)
            .unwrap_or_else(|| keys::DEFAULT_SPY_LOG_DELEGATOR.to_string());

        let config = SpyLogConfig {
            spy_log_delegator_name,
            debug_stack_prefix: walk.pick(&keys::DEBUG_STACK_PREFIX, parse_text),
            sql_timing_warn_threshold_ms: walk
                .pick(&keys::SQL_TIMING_WARN_THRESHOLD, parse_millis),
            sql_timing_error_threshold_ms: walk
                .pick(&keys::SQL_TIMING_ERROR_THRESHOLD, parse_millis),
            dump_boolean_as_true_false: walk.flag(&keys::DUMP_BOOLEAN_AS_TRUE_FALSE),
            dump_sql_max_line_length: walk
                .pick(&keys::DUMP_SQL_MAX_LINE_LENGTH, parse_count)
                .unwrap_or_default(),
            dump_full_debug_stack_trace: walk.flag(&keys::DUMP_FULL_DEBUG_STACK_TRACE),
            statement_usage_warn: walk.flag(&keys::STATEMENT_WARN),
            dump_sql_select: walk.flag(&keys::DUMP_SQL_SELECT),
            dump_sql_insert: walk.flag(&keys::DUMP_SQL_INSERT),
            dump_sql_update: walk.flag(&keys::DUMP_SQL_UPDATE),
            dump_sql_delete: walk.flag(&keys::DUMP_SQL_DELETE),
            dump_sql_create: walk.flag(&keys::DUMP_SQL_CREATE),
            dump_sql_add_semicolon: walk.flag(&keys::DUMP_SQL_ADD_SEMICOLON),
            trim_sql: walk.flag(&keys::TRIM_SQL),
            trim_extra_blank_lines: walk.flag(&keys::TRIM_EXTRA_BLANK_LINES),
            suppress_get_generated_keys_exception: walk
                .flag(&keys::SUPPRESS_GENERATED_KEYS_EXCEPTION),
            auto_load_popular_drivers: walk.flag(&keys::AUTO_LOAD_POPULAR_DRIVERS),
            additional_drivers: walk.pick(&keys::DRIVERS, parse_list).unwrap_or_default(),
            properties_file,
            entries: walk.entries,
        };

        info!(
            "Using spy log delegator {} (from {})",
            config.spy_log_delegator_name,
            config.spy_log_delegator_source()
        );
        config
    }

    /// Find and read the properties file. Absence is not an error.
    fn load_properties_file(&self) -> (Properties, PropertiesFileStatus) {
        let (requested, requested_from) = if let Some(v) = self.overrides.get(keys::PROPERTIES_FILE)
            && !v.trim().is_empty()
        {
            (v.trim().to_string(), SourceKind::Override)
        } else if let Some(v) = self.env.get(keys::PROPERTIES_FILE) {
            (v.trim().to_string(), SourceKind::Environment)
        } else {
            (keys::DEFAULT_PROPERTIES_FILE.to_string(), SourceKind::Default)
        };

        let mut status = PropertiesFileStatus {
            requested,
            requested_from,
            path: None,
            entries: 0,
        };

        if !self.read_properties_file {
            return (Properties::default(), status);
        }

        let Some(path) = locate(&status.requested, &self.resource_roots) else {
            info!(
                "Properties file {} not found; using environment and defaults",
                status.requested
            );
            return (Properties::default(), status);
        };

        match Properties::load(&path) {
            Ok(properties) => {
                debug!(
                    "Loaded {} entries from properties file {path:?}",
                    properties.entry_count()
                );
                status.entries = properties.entry_count();
                status.path = Some(path);
                (properties, status)
            }
            Err(e) => {
                warn!("{e}; using environment and defaults");
                (Properties::default(), status)
            }
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::from_process()
    }
}

/// One resolution pass over the source chain
struct Walk<'a> {
    chain: &'a [Box<dyn ConfigSource>],
    entries: Vec<ResolvedEntry>,
}

impl Walk<'_> {
    /// First value for `setting` that parses; records the entry either way.
    fn pick<T>(&mut self, setting: &Setting, parse: fn(&str) -> Option<T>) -> Option<T> {
        for source in self.chain {
            let Some(candidate) = source.lookup(setting) else {
                continue;
            };
            let raw = candidate.value.trim();
            match parse(raw) {
                Some(value) => {
                    debug!("{} = {raw:?} (from {})", setting.key, candidate.source);
                    self.entries.push(ResolvedEntry {
                        key: setting.key,
                        value: Some(raw.to_string()),
                        source: Some(candidate.source),
                    });
                    return Some(value);
                }
                None => {
                    let err = ConfigError::InvalidValue {
                        key: setting.key.to_string(),
                        value: raw.to_string(),
                        expected: setting.kind.describe(),
                    };
                    warn!("{err} (from {}); trying next source", source.name());
                }
            }
        }

        debug!("{} is not set", setting.key);
        self.entries.push(ResolvedEntry {
            key: setting.key,
            value: None,
            source: None,
        });
        None
    }

    fn flag(&mut self, setting: &Setting) -> bool {
        self.pick(setting, parse_flag).unwrap_or_default()
    }
}

fn parse_text(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

fn parse_millis(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn parse_list(raw: &str) -> Option<Vec<String>> {
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
