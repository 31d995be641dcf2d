use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::amount_or_zero;
use super::month::Month;

/// One month's TDS line on Form 16.
///
/// Surcharge and cess are always zero at this stage; cess is levied
/// annually by the engine, never per month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyTds {
    #[serde(deserialize_with = "amount_or_zero")]
    pub tds: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub surcharge: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub cess: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total: Decimal,
}

/// Employer/TDS metadata for Form 16 plus the monthly TDS mirror.
///
/// The metadata fields are entered once per employer and pass through
/// recalculation unchanged; `monthly_tds` is rebuilt from the salary
/// entries on every recalculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form16Data {
    pub employer_name: String,
    pub employer_address: String,
    pub employer_tan: String,
    pub employer_pan: String,
    pub employee_name: String,
    pub employee_pan: String,
    pub assessment_year: String,
    pub monthly_tds: BTreeMap<Month, MonthlyTds>,
}
