use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::amount_or_zero;

/// One calendar month's salary entry for a teacher.
///
/// Income and deduction components are whole-rupee amounts. The derived
/// fields (`total_salary`, `total_deduction`, `net_pay`) are recomputed via
/// [`recompute`](Self::recompute) on every edit and are never authoritative
/// inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlySalary {
    // Income components
    #[serde(deserialize_with = "amount_or_zero")]
    pub basic: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub grade_pay: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub da: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub hra: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub medical: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub disability_allowance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub principal_allowance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub da_arrears: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub salary_arrears: Decimal,

    // Form-layer extension fields. Captured per month, but excluded from the
    // stored total_salary; see `form_entry_total_salary`.
    #[serde(deserialize_with = "amount_or_zero")]
    pub other_income_1: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub other_income_2: Decimal,

    // Deduction components
    #[serde(deserialize_with = "amount_or_zero")]
    pub gpf: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub cpf: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub profession_tax: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub society: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub group_insurance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub income_tax: Decimal,

    // Derived
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_salary: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_deduction: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub net_pay: Decimal,
}

impl MonthlySalary {
    /// Recomputes the derived fields from the components.
    ///
    /// This is the stored-record contract: `total_salary` is the sum of the
    /// nine income components and does not include `other_income_1` /
    /// `other_income_2`. The data-entry form uses a wider formula for its
    /// on-screen total; the two are deliberately kept separate (see
    /// [`form_entry_total_salary`](Self::form_entry_total_salary)).
    pub fn recompute(&mut self) {
        self.total_salary = self.basic
            + self.grade_pay
            + self.da
            + self.hra
            + self.medical
            + self.disability_allowance
            + self.principal_allowance
            + self.da_arrears
            + self.salary_arrears;
        self.total_deduction = self.gpf
            + self.cpf
            + self.profession_tax
            + self.society
            + self.group_insurance
            + self.income_tax;
        self.net_pay = self.total_salary - self.total_deduction;
    }

    /// The data-entry form's on-screen monthly total, which additionally
    /// counts `other_income_1` and `other_income_2`.
    ///
    /// This diverges from [`recompute`](Self::recompute) whenever either
    /// other-income field is non-zero. Both formulas are kept as-is; callers
    /// choose which contract they are under.
    pub fn form_entry_total_salary(&self) -> Decimal {
        self.basic
            + self.grade_pay
            + self.da
            + self.hra
            + self.medical
            + self.disability_allowance
            + self.principal_allowance
            + self.da_arrears
            + self.salary_arrears
            + self.other_income_1
            + self.other_income_2
    }
}
