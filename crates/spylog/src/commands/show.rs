//! Show command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use spylog_core::SpyLogConfig;

use super::InputArgs;

/// Show the effective configuration
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, inputs: &InputArgs) -> Result<()> {
    let config = inputs.resolve();

    if args.json {
        let settings: serde_json::Map<String, serde_json::Value> = config
            .entries
            .iter()
            .map(|e| {
                (
                    e.key.to_string(),
                    json!({ "value": e.value, "source": e.source }),
                )
            })
            .collect();
        let output = json!({
            "spyLogDelegatorName": config.spy_log_delegator_name,
            "settings": settings,
            "propertiesFile": config.properties_file,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&config);
    }

    Ok(())
}

fn print_text(config: &SpyLogConfig) {
    println!("Configuration:");
    for entry in &config.entries {
        let key = entry.key;
        match (&entry.value, entry.source) {
            (Some(value), Some(source)) => println!("  {key} = {value} (from {source})"),
            _ => println!("  {key} (not set)"),
        }
    }
    println!();

    let file = &config.properties_file;
    let requested = &file.requested;
    let requested_from = file.requested_from;
    println!("Properties file:");
    println!("  requested: {requested} (from {requested_from})");
    match &file.path {
        Some(path) => {
            let path_display = path.display();
            let entries = file.entries;
            println!("  loaded: {path_display} ({entries} entries)");
        }
        None => println!("  loaded: (not found)"),
    }
}
