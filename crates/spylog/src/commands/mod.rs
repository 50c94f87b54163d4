//! CLI command dispatch and execution

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use spylog_core::config::keys::PROPERTIES_FILE;
use spylog_core::{ConfigOverrides, Resolver, SpyLogConfig};
use std::path::PathBuf;

mod get;
mod keys;
mod show;

/// spylog - inspect the resolved log4jdbc proxy configuration
#[derive(Parser, Debug)]
#[command(
    name = "spylog",
    version,
    about = "Inspect the resolved log4jdbc proxy configuration",
    long_about = "Resolves the log4jdbc proxy configuration from overrides, the properties file, \
                  the environment and defaults, and shows where each value came from"
)]
pub struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by every command
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Properties file resource name (overrides log4jdbc.log4j2.properties.file)
    #[arg(long, global = true, value_name = "NAME")]
    properties_file: Option<String>,

    /// Directory searched for the properties file (repeatable, searched in order)
    #[arg(long = "resource-dir", global = true, value_name = "DIR")]
    resource_dirs: Vec<PathBuf>,

    /// Direct override, highest priority (repeatable)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_assignment)]
    overrides: Vec<(String, String)>,
}

impl InputArgs {
    /// Resolve the configuration with these inputs layered on the process
    /// environment
    fn resolve(&self) -> SpyLogConfig {
        let mut overrides = ConfigOverrides::new();
        for (key, value) in &self.overrides {
            overrides.set(key, value.as_str());
        }
        if let Some(name) = &self.properties_file {
            overrides.set(PROPERTIES_FILE, name.as_str());
        }

        let mut resolver = Resolver::from_process().with_overrides(overrides);
        for dir in self.resource_dirs.iter().rev() {
            resolver = resolver.with_resource_root(dir);
        }
        resolver.resolve()
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("expected KEY=VALUE, got {raw:?}");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("empty key in {raw:?}");
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every setting with its value and source
    Show(show::ShowArgs),

    /// Print the resolved value of one setting
    Get(get::GetArgs),

    /// List recognised settings and their defaults
    Keys(keys::KeysArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Show(args) => show::execute(args, &self.inputs),
            Commands::Get(args) => get::execute(args, &self.inputs),
            Commands::Keys(args) => keys::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("log4jdbc.trim.sql = false").unwrap(),
            ("log4jdbc.trim.sql".to_string(), "false".to_string())
        );
        assert_eq!(
            parse_assignment("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_cli_parses_global_inputs_after_subcommand() {
        let cli = Cli::try_parse_from([
            "spylog",
            "get",
            "log4jdbc.spylogdelegator.name",
            "--set",
            "spylogdelegator.name=x.Y",
            "--resource-dir",
            "/tmp/a",
            "--properties-file",
            "/custom.properties",
        ])
        .unwrap();

        assert_eq!(
            cli.inputs.overrides,
            vec![("spylogdelegator.name".to_string(), "x.Y".to_string())]
        );
        assert_eq!(cli.inputs.resource_dirs, vec![PathBuf::from("/tmp/a")]);
        assert_eq!(
            cli.inputs.properties_file.as_deref(),
            Some("/custom.properties")
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
