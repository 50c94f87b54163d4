//! Catalogue of recognised settings
//!
//! Every setting has a namespaced key (`log4jdbc.*`) and a legacy key, which
//! is the namespaced key without the `log4jdbc.` prefix. Older deployments
//! set the legacy spelling, so the environment source still honours it.

/// Prefix shared by every namespaced key.
pub const NAMESPACE_PREFIX: &str = "log4jdbc.";

/// Key naming the spy log delegator implementation.
pub const SPY_LOG_DELEGATOR_NAME: &str = "log4jdbc.spylogdelegator.name";

/// Delegator used when no source names one.
pub const DEFAULT_SPY_LOG_DELEGATOR: &str = "net.sf.log4jdbc.log.log4j2.Log4j2SpyLogDelegator";

/// Key naming the properties file location.
pub const PROPERTIES_FILE: &str = "log4jdbc.log4j2.properties.file";

/// Properties file location used when [`PROPERTIES_FILE`] is unset.
pub const DEFAULT_PROPERTIES_FILE: &str = "/log4jdbc.log4j2.properties";

/// Value shape of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Free-form string, always present
    Text,
    /// Free-form string, absent unless some source sets it
    OptionalText,
    /// Boolean (`true/yes/on/1`, `false/no/off/0`)
    Flag,
    /// Unsigned 32-bit integer
    Count,
    /// Unsigned 64-bit integer, absent unless some source sets it
    OptionalMillis,
    /// Comma-separated list
    List,
}

impl SettingKind {
    /// Human-readable name used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            SettingKind::Text | SettingKind::OptionalText => "string",
            SettingKind::Flag => "boolean",
            SettingKind::Count => "unsigned integer",
            SettingKind::OptionalMillis => "milliseconds",
            SettingKind::List => "comma-separated list",
        }
    }
}

/// Descriptor of one recognised setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// Namespaced key (`log4jdbc.*`)
    pub key: &'static str,
    /// Value shape
    pub kind: SettingKind,
    /// Default literal; `None` for optional settings
    pub default: Option<&'static str>,
    /// One-line description shown by `spylog keys`
    pub summary: &'static str,
}

impl Setting {
    /// Legacy spelling of the key (namespace prefix removed)
    pub fn legacy_key(&self) -> &'static str {
        self.key.strip_prefix(NAMESPACE_PREFIX).unwrap_or(self.key)
    }

    /// Find a setting by namespaced or legacy key
    pub fn lookup(key: &str) -> Option<&'static Setting> {
        let key = key.trim();
        SETTINGS
            .iter()
            .find(|s| s.key == key || s.legacy_key() == key)
    }
}

/// Environment-style spelling of a dotted key: `a.b.c` -> `A_B_C`.
pub fn env_spelling(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

pub const SPY_LOG_DELEGATOR: Setting = Setting {
    key: SPY_LOG_DELEGATOR_NAME,
    kind: SettingKind::Text,
    default: Some(DEFAULT_SPY_LOG_DELEGATOR),
    summary: "Logging strategy that records intercepted JDBC calls",
};

pub const DEBUG_STACK_PREFIX: Setting = Setting {
    key: "log4jdbc.debug.stack.prefix",
    kind: SettingKind::OptionalText,
    default: None,
    summary: "Package prefix used to find the calling frame in debug output",
};

pub const SQL_TIMING_WARN_THRESHOLD: Setting = Setting {
    key: "log4jdbc.sqltiming.warn.threshold",
    kind: SettingKind::OptionalMillis,
    default: None,
    summary: "SQL taking longer than this is logged at warn level",
};

pub const SQL_TIMING_ERROR_THRESHOLD: Setting = Setting {
    key: "log4jdbc.sqltiming.error.threshold",
    kind: SettingKind::OptionalMillis,
    default: None,
    summary: "SQL taking longer than this is logged at error level",
};

pub const DUMP_BOOLEAN_AS_TRUE_FALSE: Setting = Setting {
    key: "log4jdbc.dump.booleanastruefalse",
    kind: SettingKind::Flag,
    default: Some("false"),
    summary: "Render booleans as true/false instead of 1/0",
};

pub const DUMP_SQL_MAX_LINE_LENGTH: Setting = Setting {
    key: "log4jdbc.dump.sql.maxlinelength",
    kind: SettingKind::Count,
    default: Some("90"),
    summary: "Wrap dumped SQL at this many characters (0 disables wrapping)",
};

pub const DUMP_FULL_DEBUG_STACK_TRACE: Setting = Setting {
    key: "log4jdbc.dump.fulldebugstacktrace",
    kind: SettingKind::Flag,
    default: Some("false"),
    summary: "Dump the full stack trace in debug output",
};

pub const STATEMENT_WARN: Setting = Setting {
    key: "log4jdbc.statement.warn",
    kind: SettingKind::Flag,
    default: Some("false"),
    summary: "Warn when plain statements are used instead of prepared ones",
};

pub const DUMP_SQL_SELECT: Setting = Setting {
    key: "log4jdbc.dump.sql.select",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Log SELECT statements",
};

pub const DUMP_SQL_INSERT: Setting = Setting {
    key: "log4jdbc.dump.sql.insert",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Log INSERT statements",
};

pub const DUMP_SQL_UPDATE: Setting = Setting {
    key: "log4jdbc.dump.sql.update",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Log UPDATE statements",
};

pub const DUMP_SQL_DELETE: Setting = Setting {
    key: "log4jdbc.dump.sql.delete",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Log DELETE statements",
};

pub const DUMP_SQL_CREATE: Setting = Setting {
    key: "log4jdbc.dump.sql.create",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Log CREATE statements",
};

pub const DUMP_SQL_ADD_SEMICOLON: Setting = Setting {
    key: "log4jdbc.dump.sql.addsemicolon",
    kind: SettingKind::Flag,
    default: Some("false"),
    summary: "Append a semicolon to every dumped statement",
};

pub const TRIM_SQL: Setting = Setting {
    key: "log4jdbc.trim.sql",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Trim leading and trailing whitespace of dumped SQL",
};

pub const TRIM_EXTRA_BLANK_LINES: Setting = Setting {
    key: "log4jdbc.trim.sql.extrablanklines",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Collapse consecutive blank lines in dumped SQL",
};

pub const SUPPRESS_GENERATED_KEYS_EXCEPTION: Setting = Setting {
    key: "log4jdbc.suppress.generated.keys.exception",
    kind: SettingKind::Flag,
    default: Some("false"),
    summary: "Do not log exceptions raised by getGeneratedKeys",
};

pub const AUTO_LOAD_POPULAR_DRIVERS: Setting = Setting {
    key: "log4jdbc.auto.load.popular.drivers",
    kind: SettingKind::Flag,
    default: Some("true"),
    summary: "Register the well-known JDBC drivers automatically",
};

pub const DRIVERS: Setting = Setting {
    key: "log4jdbc.drivers",
    kind: SettingKind::List,
    default: Some(""),
    summary: "Additional driver class names to register",
};

/// All settings, in display order.
pub static SETTINGS: &[Setting] = &[
    SPY_LOG_DELEGATOR,
    DEBUG_STACK_PREFIX,
    SQL_TIMING_WARN_THRESHOLD,
    SQL_TIMING_ERROR_THRESHOLD,
    DUMP_BOOLEAN_AS_TRUE_FALSE,
    DUMP_SQL_MAX_LINE_LENGTH,
    DUMP_FULL_DEBUG_STACK_TRACE,
    STATEMENT_WARN,
    DUMP_SQL_SELECT,
    DUMP_SQL_INSERT,
    DUMP_SQL_UPDATE,
    DUMP_SQL_DELETE,
    DUMP_SQL_CREATE,
    DUMP_SQL_ADD_SEMICOLON,
    TRIM_SQL,
    TRIM_EXTRA_BLANK_LINES,
    SUPPRESS_GENERATED_KEYS_EXCEPTION,
    AUTO_LOAD_POPULAR_DRIVERS,
    DRIVERS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_key_strips_namespace() {
        let setting = Setting::lookup(SPY_LOG_DELEGATOR_NAME).unwrap();
        assert_eq!(setting.legacy_key(), "spylogdelegator.name");
    }

    #[test]
    fn test_lookup_by_legacy_key() {
        let setting = Setting::lookup("spylogdelegator.name").unwrap();
        assert_eq!(setting.key, SPY_LOG_DELEGATOR_NAME);
        assert!(Setting::lookup("no.such.key").is_none());
    }

    #[test]
    fn test_env_spelling() {
        assert_eq!(
            env_spelling(SPY_LOG_DELEGATOR_NAME),
            "LOG4JDBC_SPYLOGDELEGATOR_NAME"
        );
        assert_eq!(env_spelling("spylogdelegator.name"), "SPYLOGDELEGATOR_NAME");
    }

    #[test]
    fn test_catalogue_keys_are_unique_and_namespaced() {
        for (i, a) in SETTINGS.iter().enumerate() {
            assert!(a.key.starts_with(NAMESPACE_PREFIX), "{}", a.key);
            for b in &SETTINGS[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.legacy_key(), b.legacy_key());
            }
        }
    }

    #[test]
    fn test_required_settings_have_defaults() {
        for setting in SETTINGS {
            let optional = matches!(
                setting.kind,
                SettingKind::OptionalText | SettingKind::OptionalMillis
            );
            assert_eq!(setting.default.is_none(), optional, "{}", setting.key);
        }
    }
}
