//! Typed error definitions for the boxcalc tools.
//!
//! Provides [`BoxCalcError`] for the input/output layer. The calculators
//! themselves have no failure modes — given well-formed records they always
//! produce a result — so every variant here belongs to file handling and
//! parsing. All variants implement `std::error::Error` via `thiserror` and
//! integrate with `anyhow::Result` at the binary boundary.

use thiserror::Error;

/// Domain-specific errors for the boxcalc tools.
#[derive(Debug, Error)]
pub enum BoxCalcError {
    /// File or stream I/O failure while reading input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV row: wrong field count, empty identifier, or an
    /// unparsable decimal. `line` is 1-based, counting the header.
    #[error("line {line}: {msg}")]
    Csv { line: usize, msg: String },
}
