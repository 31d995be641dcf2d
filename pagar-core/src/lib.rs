pub mod calculations;
pub mod db;
pub mod models;
pub mod words;

pub use calculations::{aggregate, recalculate, OldRegimeConfig, TaxComputationEngine};
pub use db::repository::{RepositoryError, TaxFormRepository};
pub use models::*;
