//! Configuration sources
//!
//! A resolver holds an ordered list of [`ConfigSource`]s and asks each in
//! turn for a setting. The first non-blank value that parses wins. Adding a
//! source means appending to the list.

use super::keys::{Setting, env_spelling};
use super::properties::Properties;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Set directly by the hosting application
    Override,
    /// Properties file
    PropertiesFile,
    /// Process environment, namespaced key
    Environment,
    /// Process environment, legacy key
    EnvironmentLegacy,
    /// Compiled-in default
    Default,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceKind::Override => "override",
            SourceKind::PropertiesFile => "properties file",
            SourceKind::Environment => "environment",
            SourceKind::EnvironmentLegacy => "environment (legacy key)",
            SourceKind::Default => "default",
        };
        f.write_str(label)
    }
}

/// Raw value offered by a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Unparsed value
    pub value: String,
    /// Supplying source
    pub source: SourceKind,
}

impl Candidate {
    fn new(value: &str, source: SourceKind) -> Self {
        Self {
            value: value.to_string(),
            source,
        }
    }
}

/// A layer of configuration values.
pub trait ConfigSource: Send + Sync {
    /// Label used in log output
    fn name(&self) -> &'static str;

    /// Offer a value for `setting`.
    ///
    /// Blank values must be reported as `None` so lower sources get a turn.
    fn lookup(&self, setting: &Setting) -> Option<Candidate>;
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Values set directly by the hosting application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    values: BTreeMap<String, String>,
}

impl ConfigOverrides {
    /// Empty override set
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set `key` to `value`. Legacy keys are stored under their namespaced
    /// spelling.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(canonical_key(key), value.into());
        self
    }

    /// Builder form of [`ConfigOverrides::set`]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove the override for `key`
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(&canonical_key(key))
    }

    /// Override value for `key`, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&canonical_key(key)).map(String::as_str)
    }

    /// True if nothing is overridden
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every override
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

fn canonical_key(key: &str) -> String {
    match Setting::lookup(key) {
        Some(setting) => setting.key.to_string(),
        None => key.trim().to_string(),
    }
}

/// Highest-priority layer: [`ConfigOverrides`]
#[derive(Debug, Clone, Default)]
pub struct OverrideSource {
    overrides: ConfigOverrides,
}

impl OverrideSource {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }
}

impl ConfigSource for OverrideSource {
    fn name(&self) -> &'static str {
        "override"
    }

    fn lookup(&self, setting: &Setting) -> Option<Candidate> {
        non_blank(self.overrides.get(setting.key))
            .map(|v| Candidate::new(v, SourceKind::Override))
    }
}

/// Entries of the properties file. Only namespaced keys are read.
#[derive(Debug, Clone, Default)]
pub struct PropertiesFileSource {
    properties: Properties,
}

impl PropertiesFileSource {
    pub fn new(properties: Properties) -> Self {
        Self { properties }
    }
}

impl ConfigSource for PropertiesFileSource {
    fn name(&self) -> &'static str {
        "properties file"
    }

    fn lookup(&self, setting: &Setting) -> Option<Candidate> {
        non_blank(self.properties.get(setting.key))
            .map(|v| Candidate::new(v, SourceKind::PropertiesFile))
    }
}

/// Snapshot of process-level key/value overrides.
///
/// Each key is matched verbatim (`log4jdbc.spylogdelegator.name`) and in
/// environment spelling (`LOG4JDBC_SPYLOGDELEGATOR_NAME`). The namespaced
/// key is consulted before the legacy key (`spylogdelegator.name`,
/// `SPYLOGDELEGATOR_NAME`).
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: BTreeMap<String, String>,
}

impl EnvSource {
    /// Snapshot the current process environment. Variables that are not
    /// valid UTF-8 are ignored.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Value for `key` in either spelling, ignoring blanks
    pub fn get(&self, key: &str) -> Option<&str> {
        non_blank(self.vars.get(key).map(String::as_str))
            .or_else(|| non_blank(self.vars.get(&env_spelling(key)).map(String::as_str)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn lookup(&self, setting: &Setting) -> Option<Candidate> {
        if let Some(v) = self.get(setting.key) {
            return Some(Candidate::new(v, SourceKind::Environment));
        }
        self.get(setting.legacy_key())
            .map(|v| Candidate::new(v, SourceKind::EnvironmentLegacy))
    }
}

/// Lowest layer: catalogue defaults.
///
/// Unlike the other sources this one reports empty defaults (an empty driver
/// list is still a value).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl ConfigSource for DefaultSource {
    fn name(&self) -> &'static str {
        "default"
    }

    fn lookup(&self, setting: &Setting) -> Option<Candidate> {
        setting
            .default
            .map(|v| Candidate::new(v, SourceKind::Default))
    }
}
