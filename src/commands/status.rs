// SPDX-License-Identifier: MIT OR Apache-2.0

//! Print container statuses styled by state

use anyhow::Result;
use serde::Serialize;
use softhue::styles::PREFIX;
use softhue::{style_for_status, StyleName, Styler};

use crate::cli::OutputFormat;
use softhue::output::print_json;

/// Status entry for JSON output
#[derive(Debug, Serialize)]
struct StatusEntry<'a> {
    label: &'a str,
    style: StyleName,
}

/// Run the status command
pub fn run(styler: &Styler, labels: &[String], format: OutputFormat, compact: bool) -> Result<()> {
    if format == OutputFormat::Json {
        let entries: Vec<StatusEntry> = labels
            .iter()
            .map(|label| StatusEntry {
                label,
                style: style_for_status(label).name,
            })
            .collect();
        return print_json(&entries, compact);
    }

    let arrow = styler.render(&PREFIX, "");
    for label in labels {
        let style = style_for_status(label);
        println!("{} {}", arrow, styler.render(&style, label));
    }
    Ok(())
}
