use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::amount_or_zero;

/// Self-declared other income and investment deductions for the year.
///
/// Everything here is entered by the client (or imported); the engine only
/// reads it. `total_income`/`total_deduction` are the group sums, derived on
/// the edit path via [`recompute_totals`](Self::recompute_totals).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationData {
    // Other income
    #[serde(deserialize_with = "amount_or_zero")]
    pub bank_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub nsc_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub exam_income: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub fd_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub other_income: Decimal,

    // Investment deductions
    #[serde(deserialize_with = "amount_or_zero")]
    pub lic_premium: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub post_insurance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub ppf: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub nsc_investment: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub housing_loan_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub housing_loan_principal: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub education_fee: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub sbi_life: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub sukanya_samridhi: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub medical_insurance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub five_year_fd: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub other_deduction: Decimal,

    // Derived group sums
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_income: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_deduction: Decimal,
}

impl DeclarationData {
    pub fn income_total(&self) -> Decimal {
        self.bank_interest + self.nsc_interest + self.exam_income + self.fd_interest
            + self.other_income
    }

    pub fn deduction_total(&self) -> Decimal {
        self.lic_premium
            + self.post_insurance
            + self.ppf
            + self.nsc_investment
            + self.housing_loan_interest
            + self.housing_loan_principal
            + self.education_fee
            + self.sbi_life
            + self.sukanya_samridhi
            + self.medical_insurance
            + self.five_year_fd
            + self.other_deduction
    }

    /// Refreshes the derived group sums after an edit.
    pub fn recompute_totals(&mut self) {
        self.total_income = self.income_total();
        self.total_deduction = self.deduction_total();
    }
}
