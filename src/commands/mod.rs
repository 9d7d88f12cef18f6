// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations

pub mod palette;
pub mod render;
pub mod status;
pub mod tier;
