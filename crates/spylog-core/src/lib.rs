//! Configuration core for the log4jdbc JDBC-call logging proxy
//!
//! The proxy's spy objects only need to know which logging strategy (spy log
//! delegator) to hand intercepted calls to, plus a handful of formatting and
//! timing switches. This crate resolves those settings from direct overrides,
//! a properties file, and the process environment, in that order, falling
//! back to compiled-in defaults.
//!
//! - [`config`] holds the settings catalogue, the sources and the resolver.
//! - [`global`] keeps one resolved configuration for the whole process.

pub mod config;
pub mod global;
pub mod logging;

pub use config::{ConfigOverrides, Resolver, SpyLogConfig};
