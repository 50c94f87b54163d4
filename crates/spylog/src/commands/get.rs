//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::InputArgs;

/// Print the resolved value of one setting
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Setting key, namespaced (log4jdbc.spylogdelegator.name) or legacy (spylogdelegator.name)
    key: String,

    /// Also print the source of the value
    #[arg(long)]
    source: bool,
}

/// Execute the get command
///
/// Unset optional settings print an empty line.
pub fn execute(args: GetArgs, inputs: &InputArgs) -> Result<()> {
    let config = inputs.resolve();
    let entry = config.entry(&args.key)?;
    let value = entry.value.as_deref().unwrap_or("");

    if args.source {
        match entry.source {
            Some(source) => println!("{value} (from {source})"),
            None => println!("{value} (not set)"),
        }
    } else {
        println!("{value}");
    }
    Ok(())
}
