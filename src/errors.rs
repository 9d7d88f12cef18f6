// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the rendering layer

use thiserror::Error;

/// Failure while applying a style to text.
///
/// Never escapes the public render functions: callers always get a string back.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the styled value into the output buffer failed
    #[error("failed to format styled text: {0}")]
    Format(#[from] std::fmt::Error),

    /// The paint backend rejected the descriptor or text
    #[error("paint backend error: {0}")]
    Backend(String),
}
