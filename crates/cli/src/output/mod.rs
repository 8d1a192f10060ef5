// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match reports and state graphs.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
