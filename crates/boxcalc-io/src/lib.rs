//! # boxcalc-io
//!
//! Input parsing and report rendering for the boxcalc tools.
//!
//! - [`csv`] — position-file parsing and CSV report rendering
//! - [`json`] — JSON report rendering
//!
//! All malformed-input handling lives here: the calculators in
//! `boxcalc-core` only ever see fully validated records.

pub mod csv;
pub mod json;
