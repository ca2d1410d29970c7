//! Domain record types.
//!
//! All records are immutable values with field-wise equality and hashing,
//! so result collections can be compared as unordered sets.

pub mod records;

pub use records::*;
