//! Keys command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use spylog_core::config::SETTINGS;

/// List recognised settings
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the keys command
pub fn execute(args: KeysArgs) -> Result<()> {
    if args.json {
        let output: Vec<_> = SETTINGS
            .iter()
            .map(|s| {
                json!({
                    "key": s.key,
                    "legacyKey": s.legacy_key(),
                    "kind": s.kind.describe(),
                    "default": s.default,
                    "summary": s.summary,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for setting in SETTINGS {
        let default = match setting.default {
            Some("") => "(empty)",
            Some(v) => v,
            None => "(unset)",
        };
        println!("{}", setting.key);
        println!("    {}", setting.summary);
        println!("    type: {}, default: {default}", setting.kind.describe());
    }
    Ok(())
}
