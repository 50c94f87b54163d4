//! Configuration resolution
//!
//! Resolves the proxy configuration from multiple sources with priority:
//! 1. Direct overrides set by the hosting application
//! 2. Properties file (`log4jdbc.log4j2.properties.file`, default
//!    `/log4jdbc.log4j2.properties`)
//! 3. Process environment, namespaced key then legacy key
//! 4. Defaults

mod error;
pub mod keys;
mod location;
mod properties;
mod resolve;
mod source;
mod types;

pub use error::ConfigError;
pub use keys::{Setting, SettingKind, SETTINGS};
pub use location::{default_resource_roots, locate, RESOURCE_PATH_ENV};
pub use properties::Properties;
pub use resolve::Resolver;
pub use source::{
    Candidate, ConfigOverrides, ConfigSource, DefaultSource, EnvSource, OverrideSource,
    PropertiesFileSource, SourceKind,
};
pub use types::{PropertiesFileStatus, ResolvedEntry, SpyLogConfig};
