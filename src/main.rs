// SPDX-License-Identifier: MIT OR Apache-2.0

//! softhue - Soft terminal styling for status output
//!
//! Small CLI front-end over the softhue library: styles container statuses
//! and messages, and reports the detected color tier.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, ColorChoice, Commands};
use softhue::EnvSnapshot;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing with SOFTHUE_LOG env var (e.g., SOFTHUE_LOG=debug softhue tier)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SOFTHUE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();
    let compact = cli.compact;

    let env = EnvSnapshot::from_process();
    let detected = env.detect();
    let tier = cli.color.resolve(detected);
    tracing::debug!(%detected, %tier, color = ?cli.color, "resolved color tier");

    let styler = softhue::render::init_with_tier(tier);
    if cli.color == ColorChoice::Always {
        colored::control::set_override(true);
    }

    match cli.command {
        Commands::Status { labels } => {
            commands::status::run(styler, &labels, format, compact)?;
        }
        Commands::Render { style, text } => {
            commands::render::run(styler, style, &text, format, compact)?;
        }
        Commands::Tier => {
            commands::tier::run(styler, &env, detected, format, compact)?;
        }
        Commands::Palette => {
            commands::palette::run(styler, format, compact)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "softhue", &mut std::io::stdout());
        }
    }

    Ok(())
}
