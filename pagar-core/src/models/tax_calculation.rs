use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::amount_or_zero;

/// Part A of the computation record: salary income, exemptions, other
/// income, and gross total income. Fully derived by the engine from the
/// annual salary totals and the declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxCalculationA {
    #[serde(deserialize_with = "amount_or_zero")]
    pub gross_salary: Decimal,
    /// HRA exemption. Not computed; always written as zero by the engine.
    #[serde(deserialize_with = "amount_or_zero")]
    pub hra_exempt: Decimal,
    /// Transport allowance exemption. Not computed; always written as zero.
    #[serde(deserialize_with = "amount_or_zero")]
    pub transport_allowance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_exempt: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub balance_salary: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub profession_tax: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub standard_deduction: Decimal,
    /// Salary income after profession tax and standard deduction. May be
    /// negative; only taxable income is clamped, further down the pipeline.
    #[serde(deserialize_with = "amount_or_zero")]
    pub professional_income: Decimal,

    // Other income, mirrored from the declarations
    #[serde(deserialize_with = "amount_or_zero")]
    pub bank_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub nsc_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub fd_interest: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_interest_income: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub exam_income: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub other_income: Decimal,
    /// House property income. Always written as zero by the engine.
    #[serde(deserialize_with = "amount_or_zero")]
    pub house_property_income: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_other_income: Decimal,

    #[serde(deserialize_with = "amount_or_zero")]
    pub gross_total_income: Decimal,
    /// Housing loan interest, taken from the declarations at full value.
    /// No Section 24(b) ceiling is applied.
    #[serde(deserialize_with = "amount_or_zero")]
    pub housing_loan_interest: Decimal,
    /// Gross total income less housing loan interest; the figure the
    /// deduction stage starts from.
    #[serde(deserialize_with = "amount_or_zero")]
    pub pro_income: Decimal,
}

/// Part B of the computation record: Chapter VI-A deductions, slab tax,
/// rebate, cess, relief, and the balance against tax already withheld.
///
/// Most fields are derived; `relief_89`, the 80DD/80DDB/80U/80G entries,
/// and `recovered_month` are manual carry-throughs the engine preserves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxCalculationB {
    // Section 80C components
    #[serde(deserialize_with = "amount_or_zero")]
    pub gpf: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub cpf: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub lic_premium: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub pli_premium: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub group_insurance: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub ppf: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub nsc_investment: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub housing_loan_principal: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub education_fee: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub other_investment_80c: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_80c: Decimal,
    /// `total_80c` clamped to the statutory ₹1,50,000 ceiling.
    #[serde(deserialize_with = "amount_or_zero")]
    pub max_80c: Decimal,

    // Other Chapter VI-A sections
    /// Section 80D premium, read from the declarations. No statutory
    /// ceiling is applied.
    #[serde(deserialize_with = "amount_or_zero")]
    pub medical_insurance_80d: Decimal,
    /// Manual entry; carried through recalculation unchanged.
    #[serde(deserialize_with = "amount_or_zero")]
    pub disabled_dependent_80dd: Decimal,
    /// Manual entry; carried through recalculation unchanged.
    #[serde(deserialize_with = "amount_or_zero")]
    pub serious_disease_80ddb: Decimal,
    /// Manual entry; carried through recalculation unchanged.
    #[serde(deserialize_with = "amount_or_zero")]
    pub disability_80u: Decimal,
    /// Manual entry; carried through recalculation unchanged. The 50%
    /// qualifying limit is not applied.
    #[serde(deserialize_with = "amount_or_zero")]
    pub donation_80g: Decimal,
    /// Savings-bank interest deduction, capped at ₹10,000.
    #[serde(deserialize_with = "amount_or_zero")]
    pub savings_bank_interest_80tta: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_deductions: Decimal,

    // Tax on taxable income
    #[serde(deserialize_with = "amount_or_zero")]
    pub taxable_income: Decimal,
    /// Taxable income floored to the nearest ten rupees.
    #[serde(deserialize_with = "amount_or_zero")]
    pub rounded_taxable_income: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tax_slab1: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tax_slab2: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tax_slab3: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_tax: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tax_rebate_87a: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub tax_after_rebate: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub education_cess: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_tax_payable: Decimal,
    /// Section 89 arrears relief; manual entry, carried through unchanged.
    #[serde(deserialize_with = "amount_or_zero")]
    pub relief_89: Decimal,
    #[serde(deserialize_with = "amount_or_zero")]
    pub net_tax_payable: Decimal,
    /// Tax actually withheld across the twelve months.
    #[serde(deserialize_with = "amount_or_zero")]
    pub tax_paid: Decimal,
    /// Signed; negative means a refund is due.
    #[serde(deserialize_with = "amount_or_zero")]
    pub balance_tax: Decimal,
    /// Mirrors `net_tax_payable` in the stored record. The field name is
    /// historical; renderers show it on the "total tax paid" summary row.
    #[serde(deserialize_with = "amount_or_zero")]
    pub total_tax_paid: Decimal,
    /// Month label for recovery of any balance; manual entry.
    pub recovered_month: String,
}
