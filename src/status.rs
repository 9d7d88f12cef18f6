// SPDX-License-Identifier: MIT OR Apache-2.0

//! Container status to style mapping

use crate::styles::{StyleDescriptor, ERROR, SUCCESS, WARNING};

/// Pick the style for a container status label.
///
/// Matching is exact and case-sensitive. Anything other than `running` or
/// `stopped` (including unknown labels) gets the error style.
pub fn style_for_status(label: &str) -> StyleDescriptor {
    match label {
        "running" => SUCCESS,
        "stopped" => WARNING,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(style_for_status("running"), SUCCESS);
        assert_eq!(style_for_status("stopped"), WARNING);
    }

    #[test]
    fn everything_else_is_error() {
        for label in ["", "exited", "42", "Running", "STOPPED", " running", "paused\n"] {
            assert_eq!(style_for_status(label), ERROR, "label {:?}", label);
        }
    }
}
