//! # boxcalc-core
//!
//! Core crate for the boxcalc position tools, providing:
//!
//! - **Types** (`types`) — input and report record structs
//! - **Calculators** (`calc`) — net and boxed position aggregation
//! - **Error types** (`error`) — domain-specific `BoxCalcError` via thiserror
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod calc;
pub mod error;
pub mod logging;
pub mod types;

// Re-export record types at crate root for convenience.
pub use types::*;
