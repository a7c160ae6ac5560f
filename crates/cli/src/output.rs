//! Terminal output.

#![allow(clippy::print_stdout)]

use serde::Serialize;

/// Where command results are printed: human-readable text or JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Whether results should be printed as JSON.
    pub const fn is_json(self) -> bool {
        self.json
    }

    /// Print `value` as pretty JSON.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "Failed to render JSON output"),
        }
    }

    /// Print a line of text.
    pub fn line(self, text: impl AsRef<str>) {
        println!("{}", text.as_ref());
    }
}
