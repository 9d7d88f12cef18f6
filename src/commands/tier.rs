// SPDX-License-Identifier: MIT OR Apache-2.0

//! Report the color tier and the inputs that produced it

use anyhow::Result;
use serde::Serialize;
use softhue::styles::{INFO, SUBHEADING};
use softhue::{ColorTier, EnvSnapshot, Styler};

use crate::cli::OutputFormat;
use softhue::output::{pad_visible, print_json};

#[derive(Debug, Serialize)]
struct TierReport<'a> {
    detected: ColorTier,
    tier: ColorTier,
    env: &'a EnvSnapshot,
}

/// Run the tier command
///
/// `detected` is what the environment alone gives; the styler's tier also
/// reflects `--color`.
pub fn run(
    styler: &Styler,
    env: &EnvSnapshot,
    detected: ColorTier,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let tier = styler.tier();
    if format == OutputFormat::Json {
        return print_json(
            &TierReport {
                detected,
                tier,
                env,
            },
            compact,
        );
    }

    println!("{}", styler.render(&SUBHEADING, "Color tier"));
    let rows = [
        ("tier", Some(tier.as_str())),
        ("detected", Some(detected.as_str())),
        ("NO_COLOR", env.no_color.as_deref()),
        ("TERM", env.term.as_deref()),
        ("CI", env.ci.as_deref()),
    ];
    for (key, value) in rows {
        let key = styler.render(&INFO, key);
        println!("  {} {}", pad_visible(&key, 10), value.unwrap_or("(unset)"));
    }
    Ok(())
}
