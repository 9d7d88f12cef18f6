// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safe rendering of styled text
//!
//! Rendering never fails from the caller's point of view: a backend error
//! degrades to the unstyled input plus a warning on stderr.

use crate::errors::RenderError;
use crate::styles::{StyleDescriptor, ERROR, SUCCESS};
use crate::tier::{detect_color_tier, ColorTier};
use colored::Colorize;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, Write as _};

/// Matches ANSI SGR escape sequences (`ESC [ ... m`)
static SGR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("valid SGR regex")
});

static GLOBAL: OnceCell<Styler> = OnceCell::new();

/// Backend that turns a descriptor and text into a styled string
pub trait Paint: Send + Sync {
    fn paint(
        &self,
        style: &StyleDescriptor,
        text: &str,
        tier: ColorTier,
    ) -> Result<String, RenderError>;
}

/// Production backend built on `colored`
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredBackend;

impl Paint for ColoredBackend {
    fn paint(
        &self,
        style: &StyleDescriptor,
        text: &str,
        tier: ColorTier,
    ) -> Result<String, RenderError> {
        let body = compose(style, text);
        let color = match tier {
            ColorTier::NoColor => return Ok(body.into_owned()),
            ColorTier::Basic => style.hue.basic(),
            ColorTier::Auto => style.hue.truecolor(),
        };

        let mut painted = (*body).color(color);
        if style.bold {
            painted = painted.bold();
        }

        let mut out = String::with_capacity(body.len() + 16);
        write!(out, "{}", painted)?;
        Ok(out)
    }
}

/// Prepend the descriptor's glyph, if any
fn compose<'a>(style: &StyleDescriptor, text: &'a str) -> Cow<'a, str> {
    match style.prefix {
        Some(glyph) if text.is_empty() => Cow::Borrowed(glyph),
        Some(glyph) => Cow::Owned(format!("{} {}", glyph, text)),
        None => Cow::Borrowed(text),
    }
}

/// Renders descriptors for one fixed color tier
pub struct Styler {
    tier: ColorTier,
    backend: Box<dyn Paint>,
}

impl Styler {
    pub fn new(tier: ColorTier) -> Self {
        Self::with_backend(tier, ColoredBackend)
    }

    pub fn with_backend(tier: ColorTier, backend: impl Paint + 'static) -> Self {
        Self {
            tier,
            backend: Box::new(backend),
        }
    }

    pub fn tier(&self) -> ColorTier {
        self.tier
    }

    /// Style `text`, surfacing backend failures
    pub fn try_render(&self, style: &StyleDescriptor, text: &str) -> Result<String, RenderError> {
        self.backend.paint(style, text, self.tier)
    }

    /// Style `text`, falling back to the plain input on failure
    pub fn render(&self, style: &StyleDescriptor, text: &str) -> String {
        self.render_to(style, text, &mut std::io::stderr().lock())
    }

    /// Like [`Styler::render`], writing the fallback warning to `diagnostics`
    pub fn render_to(
        &self,
        style: &StyleDescriptor,
        text: &str,
        diagnostics: &mut impl io::Write,
    ) -> String {
        match self.try_render(style, text) {
            Ok(styled) => styled,
            Err(err) => {
                tracing::debug!(style = %style.name, error = %err, "styling failed");
                warn_plain_fallback(diagnostics);
                text.to_string()
            }
        }
    }

    pub fn render_success(&self, text: &str) -> String {
        self.render(&SUCCESS, text)
    }

    pub fn render_error(&self, text: &str) -> String {
        self.render(&ERROR, text)
    }
}

impl std::fmt::Debug for Styler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Styler").field("tier", &self.tier).finish_non_exhaustive()
    }
}

// Best-effort: a closed or full stderr must not take the caller down.
fn warn_plain_fallback(out: &mut impl io::Write) {
    let _ = writeln!(out, "Warning: styling failed, using plain text");
}

/// Detect the color tier and install the process-wide styler.
///
/// Only the first call detects; later calls return the same styler.
pub fn init() -> &'static Styler {
    GLOBAL.get_or_init(|| Styler::new(detect_color_tier()))
}

/// Install a styler for an already-decided tier.
///
/// Returns the installed styler, which is the existing one if `init` already ran.
pub fn init_with_tier(tier: ColorTier) -> &'static Styler {
    GLOBAL.get_or_init(|| {
        tier.apply_global();
        Styler::new(tier)
    })
}

/// Render `text` in `style` with the process-wide styler
pub fn render(style: &StyleDescriptor, text: &str) -> String {
    init().render(style, text)
}

pub fn render_success(text: &str) -> String {
    init().render_success(text)
}

pub fn render_error(text: &str) -> String {
    init().render_error(text)
}

/// Remove ANSI SGR sequences, leaving the visible text
pub fn strip_styles(text: &str) -> Cow<'_, str> {
    SGR_PATTERN.replace_all(text, "")
}

/// Number of visible characters once styles are stripped
pub fn visible_width(text: &str) -> usize {
    strip_styles(text).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{ALL_STYLES, INFO, PREFIX, WARNING};

    struct FailingBackend;

    impl Paint for FailingBackend {
        fn paint(&self, _: &StyleDescriptor, _: &str, _: ColorTier) -> Result<String, RenderError> {
            Err(RenderError::Backend("boom".to_string()))
        }
    }

    #[test]
    fn no_color_returns_plain_text() {
        let styler = Styler::new(ColorTier::NoColor);
        assert_eq!(styler.render(&WARNING, "Container stopped"), "Container stopped");
        assert_eq!(styler.render(&PREFIX, "web"), "→ web");
        assert_eq!(styler.render(&PREFIX, ""), "→");
    }

    #[test]
    fn success_text_survives_styling() {
        for tier in [ColorTier::NoColor, ColorTier::Basic, ColorTier::Auto] {
            let styler = Styler::new(tier);
            let out = styler.render_success("Container started");
            assert!(out.contains("Container started"));
            assert_eq!(strip_styles(&out), "Container started");
        }
    }

    #[test]
    fn failing_backend_degrades_to_input() {
        let styler = Styler::with_backend(ColorTier::Basic, FailingBackend);
        let mut sink = io::sink();
        assert!(styler.try_render(&INFO, "db").is_err());
        assert_eq!(styler.render_to(&INFO, "db", &mut sink), "db");
        assert_eq!(styler.render_to(&ERROR, "crashed", &mut sink), "crashed");
        assert_eq!(styler.render_to(&PREFIX, "x", &mut sink), "x");
    }

    #[test]
    fn failure_writes_one_warning_line() {
        let styler = Styler::with_backend(ColorTier::Basic, FailingBackend);
        let mut diagnostics = Vec::new();
        assert_eq!(styler.render_to(&WARNING, "disk low", &mut diagnostics), "disk low");
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "Warning: styling failed, using plain text\n"
        );
    }

    #[test]
    fn success_path_writes_nothing() {
        for tier in [ColorTier::NoColor, ColorTier::Basic, ColorTier::Auto] {
            let styler = Styler::new(tier);
            let mut diagnostics = Vec::new();
            for style in ALL_STYLES {
                styler.render_to(&style, "web", &mut diagnostics);
            }
            assert!(diagnostics.is_empty(), "tier {} wrote diagnostics", tier);
        }
    }

    #[test]
    fn render_never_fails_on_odd_input() {
        let styler = Styler::new(ColorTier::Basic);
        for text in ["", "\x1b[31mred\x1b[0m", "tab\there", "nul\0byte", "\r\n", "ünï ✓"] {
            for style in ALL_STYLES {
                let out = styler.render(&style, text);
                assert!(strip_styles(&out).contains(&*strip_styles(text)));
            }
        }
    }

    #[test]
    fn strip_styles_and_width() {
        assert_eq!(strip_styles("\x1b[1;31merror\x1b[0m"), "error");
        assert_eq!(strip_styles("plain"), "plain");
        assert_eq!(visible_width("\x1b[38;2;86;95;137m→ web\x1b[0m"), 5);
    }

    #[test]
    fn global_helpers_return_text() {
        assert_eq!(strip_styles(&render_success("ok")), "ok");
        assert_eq!(strip_styles(&render_error("bad")), "bad");
        assert!(std::ptr::eq(init(), init_with_tier(ColorTier::NoColor)));
    }
}
