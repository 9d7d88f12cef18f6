// SPDX-License-Identifier: MIT OR Apache-2.0

//! softhue - Soft terminal styling for CLI status output
//!
//! Detects the terminal's color tier from the environment, exposes a small
//! registry of muted styles and renders text without ever failing.

pub mod errors;
pub mod output;
pub mod render;
pub mod status;
pub mod styles;
pub mod tier;

pub use errors::RenderError;
pub use render::{render, render_error, render_success, strip_styles, ColoredBackend, Paint, Styler};
pub use status::style_for_status;
pub use styles::{Hue, StyleDescriptor, StyleName, ALL_STYLES};
pub use tier::{detect_color_tier, ColorTier, EnvSnapshot};
