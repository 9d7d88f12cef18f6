// SPDX-License-Identifier: MIT OR Apache-2.0

//! Style registry
//!
//! Six fixed descriptors built at compile time. There is no way to add or
//! change a style at runtime.

use colored::Color;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Muted palette tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Blue,
    Green,
    Gold,
    Red,
    Cyan,
    Gray,
}

impl Hue {
    /// 24-bit value used when the terminal is probed as capable
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Hue::Blue => (0x7a, 0xa2, 0xf7),
            Hue::Green => (0x9e, 0xce, 0x6a),
            Hue::Gold => (0xe0, 0xaf, 0x68),
            Hue::Red => (0xf7, 0x76, 0x8e),
            Hue::Cyan => (0x7d, 0xcf, 0xff),
            Hue::Gray => (0x56, 0x5f, 0x89),
        }
    }

    /// Closest color in the 16-color ANSI set
    pub const fn basic(self) -> Color {
        match self {
            Hue::Blue => Color::Blue,
            Hue::Green => Color::Green,
            Hue::Gold => Color::Yellow,
            Hue::Red => Color::Red,
            Hue::Cyan => Color::Cyan,
            Hue::Gray => Color::BrightBlack,
        }
    }

    pub fn truecolor(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::TrueColor { r, g, b }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Semantic name of a registered style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Subheading,
    Success,
    Warning,
    Error,
    Info,
    Prefix,
}

impl StyleName {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Subheading => "subheading",
            StyleName::Success => "success",
            StyleName::Warning => "warning",
            StyleName::Error => "error",
            StyleName::Info => "info",
            StyleName::Prefix => "prefix",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STYLES
            .iter()
            .map(|style| style.name)
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown style '{}'", s))
    }
}

/// Immutable bundle of visual attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub name: StyleName,
    pub hue: Hue,
    pub bold: bool,
    pub prefix: Option<&'static str>,
}

impl StyleDescriptor {
    const fn new(name: StyleName, hue: Hue, bold: bool) -> Self {
        Self {
            name,
            hue,
            bold,
            prefix: None,
        }
    }

    /// Look up the registered descriptor for a name
    pub fn by_name(name: StyleName) -> Self {
        match name {
            StyleName::Subheading => SUBHEADING,
            StyleName::Success => SUCCESS,
            StyleName::Warning => WARNING,
            StyleName::Error => ERROR,
            StyleName::Info => INFO,
            StyleName::Prefix => PREFIX,
        }
    }
}

pub const SUBHEADING: StyleDescriptor = StyleDescriptor::new(StyleName::Subheading, Hue::Blue, true);
pub const SUCCESS: StyleDescriptor = StyleDescriptor::new(StyleName::Success, Hue::Green, false);
pub const WARNING: StyleDescriptor = StyleDescriptor::new(StyleName::Warning, Hue::Gold, true);
pub const ERROR: StyleDescriptor = StyleDescriptor::new(StyleName::Error, Hue::Red, true);
pub const INFO: StyleDescriptor = StyleDescriptor::new(StyleName::Info, Hue::Cyan, false);
pub const PREFIX: StyleDescriptor = StyleDescriptor {
    prefix: Some("→"),
    ..StyleDescriptor::new(StyleName::Prefix, Hue::Gray, false)
};

/// Every registered style, in display order
pub const ALL_STYLES: [StyleDescriptor; 6] = [SUBHEADING, SUCCESS, WARNING, ERROR, INFO, PREFIX];
