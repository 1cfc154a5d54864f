//! `gum style`: render text as a styled block

use crate::cli::StyleCommandArgs;
use crate::utils::stdin::piped_text;
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::debug;

/// Render the given text (or stdin) and print it to `out`
pub fn execute_style<W: Write>(args: &StyleCommandArgs, out: &mut W) -> Result<()> {
    let style = args.style.to_style()?;
    let text = if args.text.is_empty() {
        piped_text().context("Failed to read text from stdin")?
    } else {
        args.text.join("\n")
    };

    debug!(?style, "rendering styled block");
    writeln!(out, "{}", style.render(&text))?;
    Ok(())
}
