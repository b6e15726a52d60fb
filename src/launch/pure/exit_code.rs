//! Exit-code extraction from wrapper output (pure, no I/O)

use regex::Regex;
use std::sync::LazyLock;

use super::super::types::{EXIT_CODE_MARKER, ExitCodeReading};

/// Turns the wrapper's free-form stdout into an exit code reading
pub trait ExitCodeParser {
    fn parse(&self, output: &str) -> ExitCodeReading;
}

// Whitespace, a ':' or '=' separator and a "0x" prefix may sit between marker and code
static CODE_AFTER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[:=]?\s*(?:0[xX])?([0-9A-Fa-f]{8})").expect("exit code regex is valid")
});

/// Reads the last "Exit Code <8 hex digits>" procdump prints
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcdumpExitParser;

impl ExitCodeParser for ProcdumpExitParser {
    fn parse(&self, output: &str) -> ExitCodeReading {
        let Some(pos) = output.rfind(EXIT_CODE_MARKER) else {
            return ExitCodeReading::NoMarker;
        };

        let rest = &output[pos + EXIT_CODE_MARKER.len()..];
        CODE_AFTER_MARKER
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
            .map(ExitCodeReading::Code)
            .unwrap_or(ExitCodeReading::Malformed)
    }
}
