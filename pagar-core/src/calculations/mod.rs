//! The computation core: salary aggregation and the old-regime tax engine.
//!
//! Everything here is pure and synchronous. The one entry point callers
//! need is [`recalculate`]; the pieces are exported for the form layer and
//! the importer.

pub mod common;
pub mod engine;
pub mod salary;

pub use engine::{recalculate, OldRegimeConfig, TaxComputationEngine};
pub use salary::aggregate;
