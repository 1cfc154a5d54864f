//! Sub-command dispatch

use crate::cli::Commands;
use crate::operations::{execute_choose, execute_confirm, execute_input, execute_style};
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Run the selected sub-command, printing its result to stdout
pub fn execute(command: &Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with_output(command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run the selected sub-command, printing its result to `out`
pub fn execute_with_output<W: Write>(command: &Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Choose(args) => {
            debug!("running choose");
            execute_choose(args, out)
        }
        Commands::Confirm(args) => {
            debug!("running confirm");
            execute_confirm(args)
        }
        Commands::Input(args) => {
            debug!("running input");
            execute_input(args, out)
        }
        Commands::Style(args) => {
            debug!("running style");
            execute_style(args, out)
        }
    }
}
