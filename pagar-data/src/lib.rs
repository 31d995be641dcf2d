//! CSV import for salary registers and investment declarations.

pub mod importer;

pub use importer::{ImportError, SalaryImporter};
