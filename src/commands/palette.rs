// SPDX-License-Identifier: MIT OR Apache-2.0

//! List the style registry

use anyhow::Result;
use serde::Serialize;
use softhue::{Hue, StyleName, Styler, ALL_STYLES};

use crate::cli::OutputFormat;
use softhue::output::{pad_visible, print_json};

const NAME_WIDTH: usize = 14;

/// Palette entry for JSON output
#[derive(Debug, Serialize)]
struct PaletteEntry {
    name: StyleName,
    hue: Hue,
    hex: String,
    bold: bool,
    prefix: Option<&'static str>,
}

/// Run the palette command
pub fn run(styler: &Styler, format: OutputFormat, compact: bool) -> Result<()> {
    if format == OutputFormat::Json {
        let entries: Vec<PaletteEntry> = ALL_STYLES
            .iter()
            .map(|style| PaletteEntry {
                name: style.name,
                hue: style.hue,
                hex: style.hue.hex(),
                bold: style.bold,
                prefix: style.prefix,
            })
            .collect();
        return print_json(&entries, compact);
    }

    for style in ALL_STYLES {
        let sample = styler.render(&style, style.name.as_str());
        let weight = if style.bold { "bold" } else { "regular" };
        println!(
            "{} {} {}",
            pad_visible(&sample, NAME_WIDTH),
            style.hue.hex(),
            weight
        );
    }
    Ok(())
}
