// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render arbitrary text in a named style

use anyhow::Result;
use serde::Serialize;
use softhue::{StyleDescriptor, StyleName, Styler};

use crate::cli::OutputFormat;
use softhue::output::print_json;

#[derive(Debug, Serialize)]
struct RenderResult<'a> {
    style: StyleName,
    text: &'a str,
    rendered: String,
}

/// Run the render command
pub fn run(
    styler: &Styler,
    style: StyleName,
    text: &str,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let descriptor = StyleDescriptor::by_name(style);
    let rendered = styler.render(&descriptor, text);

    match format {
        OutputFormat::Json => print_json(
            &RenderResult {
                style,
                text,
                rendered,
            },
            compact,
        ),
        OutputFormat::Text => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
