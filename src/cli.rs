// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use softhue::{ColorTier, StyleName};

/// softhue - Soft terminal styling for status output
///
/// Renders container statuses and messages in muted colors, falling back
/// to plain text on terminals without color support.
#[derive(Parser, Debug)]
#[command(name = "softhue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// When to emit color escape codes
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Color override from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect from NO_COLOR, TERM and CI
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorChoice {
    /// Combine the flag with the detected tier
    pub fn resolve(self, detected: ColorTier) -> ColorTier {
        match self {
            ColorChoice::Auto => detected,
            ColorChoice::Never => ColorTier::NoColor,
            ColorChoice::Always if detected == ColorTier::NoColor => ColorTier::Basic,
            ColorChoice::Always => detected,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print container statuses styled by state
    Status {
        /// Status labels (e.g. running, stopped, exited)
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Render text in a named style
    Render {
        /// Style to apply (subheading, success, warning, error, info, prefix)
        #[arg(short, long, default_value = "info")]
        style: StyleName,

        /// Text to render
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Show the detected color tier and the environment behind it
    Tier,

    /// List every registered style, rendered in itself
    Palette,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_rejects_unknown_style() {
        let err = Cli::try_parse_from(["softhue", "render", "-s", "muted", "text"]).unwrap_err();
        assert!(err.to_string().contains("unknown style 'muted'"));
    }

    #[test]
    fn render_defaults_to_info_style() {
        let cli = Cli::try_parse_from(["softhue", "render", "db ready"]).unwrap();
        assert!(matches!(cli.command, Commands::Render { style: StyleName::Info, .. }));
    }

    #[test]
    fn color_choice_resolution() {
        assert_eq!(ColorChoice::Auto.resolve(ColorTier::Basic), ColorTier::Basic);
        assert_eq!(ColorChoice::Never.resolve(ColorTier::Auto), ColorTier::NoColor);
        assert_eq!(ColorChoice::Always.resolve(ColorTier::NoColor), ColorTier::Basic);
        assert_eq!(ColorChoice::Always.resolve(ColorTier::Auto), ColorTier::Auto);
    }

    #[test]
    fn render_accepts_style_and_global_color() {
        let cli = Cli::try_parse_from(["softhue", "render", "-s", "warning", "low disk", "--color", "never"])
            .unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        match cli.command {
            Commands::Render { style, text } => {
                assert_eq!(style, StyleName::Warning);
                assert_eq!(text, "low disk");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
