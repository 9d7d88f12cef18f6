// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal color capability detection
//!
//! Reads `NO_COLOR`, `TERM` and `CI` once and picks a [`ColorTier`].

use serde::Serialize;
use std::env;
use std::fmt;

/// Terminal types that get the basic palette instead of truecolor
const BASIC_TERMS: &[&str] = &["linux", "console", "vt100", "vt102", "vt220"];

/// Level of color support assumed for the current terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTier {
    /// Plain text, no escape codes
    NoColor,
    /// Limited 16-color ANSI palette
    Basic,
    /// Let the rendering library probe the terminal itself
    Auto,
}

impl ColorTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTier::NoColor => "no-color",
            ColorTier::Basic => "basic",
            ColorTier::Auto => "auto",
        }
    }

    /// Apply this tier to `colored`'s process-wide override.
    ///
    /// `Auto` leaves the override untouched so `colored` keeps its own
    /// tty and `CLICOLOR` handling.
    pub fn apply_global(self) {
        match self {
            ColorTier::NoColor => colored::control::set_override(false),
            ColorTier::Basic => colored::control::set_override(true),
            ColorTier::Auto => {}
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The environment variables that drive tier detection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvSnapshot {
    pub no_color: Option<String>,
    pub term: Option<String>,
    pub ci: Option<String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Non-UTF-8 values are treated as set but opaque.
    pub fn from_process() -> Self {
        Self {
            no_color: read_var("NO_COLOR"),
            term: read_var("TERM"),
            ci: read_var("CI"),
        }
    }

    /// Pick the color tier. First matching rule wins.
    pub fn detect(&self) -> ColorTier {
        if is_set(&self.no_color) {
            return ColorTier::NoColor;
        }

        let term = self.term.as_deref().unwrap_or("").to_lowercase();
        if term.is_empty() || term == "dumb" {
            return ColorTier::NoColor;
        }

        if BASIC_TERMS.iter().any(|basic| term.contains(basic)) {
            return ColorTier::Basic;
        }

        if is_set(&self.ci) {
            return ColorTier::Basic;
        }

        ColorTier::Auto
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Detect the tier from the process environment and configure `colored` to match.
pub fn detect_color_tier() -> ColorTier {
    let snapshot = EnvSnapshot::from_process();
    let tier = snapshot.detect();
    tracing::debug!(
        no_color = ?snapshot.no_color,
        term = ?snapshot.term,
        ci = ?snapshot.ci,
        %tier,
        "detected color tier"
    );
    tier.apply_global();
    tier
}
