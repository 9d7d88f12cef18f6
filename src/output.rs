//! Output helpers shared by the CLI commands
//!
//! JSON printing and padding that ignores escape codes.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::render::visible_width;

/// Print a value as JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Right-pad styled text to `width` visible columns
pub fn pad_visible(text: &str, width: usize) -> String {
    let visible = visible_width(text);
    if visible >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - visible))
}
