//! Old-regime income-tax computation for salaried teachers.
//!
//! This module turns the aggregated annual salary totals and the client's
//! declarations into the two-part tax computation record consumed by the
//! rendered forms.
//!
//! # Computation structure
//!
//! Part A (professional and other income):
//!
//! | Line | Description |
//! |------|-------------|
//! | A1   | Gross salary (annual total) |
//! | A2   | Exemptions: HRA and transport allowance (both zero) |
//! | A3   | Balance salary (A1 − A2) |
//! | A4   | Profession tax and standard deduction (₹50,000) |
//! | A5   | Professional income (A3 − A4); not clamped |
//! | A6   | Interest income: bank + NSC + FD |
//! | A7   | Total other income (A6 + exam + other + house property) |
//! | A8   | Gross total income (A5 + A7) |
//! | A9   | Income for deduction stage (A8 − housing loan interest) |
//!
//! Part B (deductions and tax):
//!
//! | Line | Description |
//! |------|-------------|
//! | B1   | Section 80C components (salary PF/insurance + declared investments) |
//! | B2   | 80C total, clamped at ₹1,50,000 |
//! | B3   | Other Chapter VI-A entries; only 80TTA is capped (₹10,000) |
//! | B4   | Taxable income (A9 − B3 total, clamped at zero) |
//! | B5   | Taxable income floored to the nearest ₹10 |
//! | B6   | Slab tax: nil to ₹2.5L, 5% to ₹5L, 20% to ₹10L |
//! | B7   | Section 87A rebate (income ≤ ₹5L, capped ₹12,500) |
//! | B8   | Education cess, 4% of tax after rebate |
//! | B9   | Section 89 relief (manual), net payable, balance vs TDS |
//!
//! The slab table deliberately stops at the 20% bracket: income above
//! ₹10,00,000 adds no further tax. Renderers document a 30% bracket that
//! this computation has never applied; the stored figures are the
//! authoritative behaviour and are pinned by the tests below.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pagar_core::calculations::{recalculate, aggregate};
//! use pagar_core::models::{Month, MonthlySalary, TaxFormData};
//!
//! let mut form = TaxFormData::empty("client-1", "2025-26", "2026-27");
//! let mut april = MonthlySalary { basic: dec!(56900), gpf: dec!(15000), ..Default::default() };
//! april.recompute();
//! form.salary_data.months.insert(Month::Apr, april);
//! form.salary_data.copy_april_to_all_months();
//!
//! let computed = recalculate(&form);
//! assert_eq!(computed.tax_calculation_a.gross_salary, dec!(682800));
//! assert_eq!(computed.tax_calculation_b.gpf, dec!(180000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{clamp_non_negative, floor_to_ten, round_rupee};
use crate::calculations::salary::aggregate;
use crate::models::{
    DeclarationData, MonthlySalary, TaxCalculationA, TaxCalculationB, TaxFormData,
};

/// Statutory constants for the old-regime computation.
///
/// The defaults are the figures this system files under: ₹50,000 standard
/// deduction, ₹1,50,000 80C ceiling, ₹10,000 80TTA ceiling, slabs of nil /
/// 5% / 20% over ₹2,50,000 break points, the 87A rebate to ₹5,00,000
/// income capped at ₹12,500, and 4% education cess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OldRegimeConfig {
    pub standard_deduction: Decimal,
    pub cap_80c: Decimal,
    pub cap_80tta: Decimal,
    /// Upper bound of the nil slab (₹2,50,000).
    pub basic_exemption: Decimal,
    /// Width of the 5% slab (₹2,50,000).
    pub slab2_width: Decimal,
    pub slab2_rate: Decimal,
    /// Lower bound of the 20% slab (₹5,00,000).
    pub slab3_threshold: Decimal,
    /// Width of the 20% slab (₹5,00,000). Income beyond it is untaxed.
    pub slab3_width: Decimal,
    pub slab3_rate: Decimal,
    pub rebate_income_limit: Decimal,
    pub rebate_cap: Decimal,
    pub cess_rate: Decimal,
}

impl Default for OldRegimeConfig {
    fn default() -> Self {
        Self {
            standard_deduction: Decimal::new(50_000, 0),
            cap_80c: Decimal::new(150_000, 0),
            cap_80tta: Decimal::new(10_000, 0),
            basic_exemption: Decimal::new(250_000, 0),
            slab2_width: Decimal::new(250_000, 0),
            slab2_rate: Decimal::new(5, 2),
            slab3_threshold: Decimal::new(500_000, 0),
            slab3_width: Decimal::new(500_000, 0),
            slab3_rate: Decimal::new(20, 2),
            rebate_income_limit: Decimal::new(500_000, 0),
            rebate_cap: Decimal::new(12_500, 0),
            cess_rate: Decimal::new(4, 2),
        }
    }
}

/// The deterministic tax pipeline over aggregated salary totals and
/// declarations.
///
/// Every method is a total function: missing or negative inputs flow
/// through the arithmetic, and only `taxable_income`, `tax_after_rebate`,
/// and `net_tax_payable` are clamped at zero, as business rules rather
/// than validation.
#[derive(Debug, Clone, Default)]
pub struct TaxComputationEngine {
    config: OldRegimeConfig,
}

impl TaxComputationEngine {
    pub fn new(config: OldRegimeConfig) -> Self {
        Self { config }
    }

    /// Part A: professional income and other income.
    pub fn calculate_part_a(
        &self,
        totals: &MonthlySalary,
        declarations: &DeclarationData,
    ) -> TaxCalculationA {
        let gross_salary = totals.total_salary;

        // HRA and transport exemptions are not computed; the engine writes
        // zero on every pass.
        let hra_exempt = Decimal::ZERO;
        let transport_allowance = Decimal::ZERO;
        let total_exempt = hra_exempt + transport_allowance;
        let balance_salary = gross_salary - total_exempt;

        let profession_tax = totals.profession_tax;
        let standard_deduction = self.config.standard_deduction;
        let professional_income = balance_salary - profession_tax - standard_deduction;

        let total_interest_income =
            declarations.bank_interest + declarations.nsc_interest + declarations.fd_interest;
        let house_property_income = Decimal::ZERO;
        let total_other_income = total_interest_income
            + declarations.exam_income
            + declarations.other_income
            + house_property_income;

        let gross_total_income = professional_income + total_other_income;
        // Full declared amount; no Section 24(b) ceiling.
        let housing_loan_interest = declarations.housing_loan_interest;
        let pro_income = gross_total_income - housing_loan_interest;

        TaxCalculationA {
            gross_salary,
            hra_exempt,
            transport_allowance,
            total_exempt,
            balance_salary,
            profession_tax,
            standard_deduction,
            professional_income,
            bank_interest: declarations.bank_interest,
            nsc_interest: declarations.nsc_interest,
            fd_interest: declarations.fd_interest,
            total_interest_income,
            exam_income: declarations.exam_income,
            other_income: declarations.other_income,
            house_property_income,
            total_other_income,
            gross_total_income,
            housing_loan_interest,
            pro_income,
        }
    }

    /// Part B: Chapter VI-A deductions and the tax itself.
    ///
    /// `prior` supplies the manual carry-through entries (80DD, 80DDB, 80U,
    /// 80G, Section 89 relief, recovered month); everything else is
    /// overwritten.
    pub fn calculate_part_b(
        &self,
        part_a: &TaxCalculationA,
        totals: &MonthlySalary,
        declarations: &DeclarationData,
        prior: &TaxCalculationB,
    ) -> TaxCalculationB {
        let gpf = totals.gpf;
        let cpf = totals.cpf;
        let group_insurance = totals.group_insurance;
        let lic_premium = declarations.lic_premium;
        let pli_premium = declarations.post_insurance;
        let ppf = declarations.ppf;
        let nsc_investment = declarations.nsc_investment;
        let housing_loan_principal = declarations.housing_loan_principal;
        let education_fee = declarations.education_fee;
        let other_investment_80c =
            declarations.sbi_life + declarations.sukanya_samridhi + declarations.five_year_fd;

        let total_80c = gpf
            + cpf
            + lic_premium
            + pli_premium
            + group_insurance
            + ppf
            + nsc_investment
            + housing_loan_principal
            + education_fee
            + other_investment_80c;
        let max_80c = total_80c.min(self.config.cap_80c);

        // Only 80TTA carries its statutory ceiling; the other sections are
        // taken at face value.
        let medical_insurance_80d = declarations.medical_insurance;
        let savings_bank_interest_80tta =
            declarations.bank_interest.min(self.config.cap_80tta);

        let total_deductions = max_80c
            + medical_insurance_80d
            + prior.disabled_dependent_80dd
            + prior.serious_disease_80ddb
            + prior.disability_80u
            + prior.donation_80g
            + savings_bank_interest_80tta;

        let taxable_income = clamp_non_negative(part_a.pro_income - total_deductions);
        let rounded_taxable_income = floor_to_ten(taxable_income);

        let tax_slab1 = Decimal::ZERO;
        let tax_slab2 = self.slab2_tax(rounded_taxable_income);
        let tax_slab3 = self.slab3_tax(rounded_taxable_income);
        let total_tax = tax_slab1 + tax_slab2 + tax_slab3;

        let tax_rebate_87a = self.rebate_87a(rounded_taxable_income, total_tax);
        let tax_after_rebate = clamp_non_negative(total_tax - tax_rebate_87a);
        let education_cess = round_rupee(tax_after_rebate * self.config.cess_rate);
        let total_tax_payable = tax_after_rebate + education_cess;

        let relief_89 = prior.relief_89;
        let net_tax_payable = clamp_non_negative(total_tax_payable - relief_89);

        let tax_paid = totals.income_tax;
        let balance_tax = net_tax_payable - tax_paid;

        TaxCalculationB {
            gpf,
            cpf,
            lic_premium,
            pli_premium,
            group_insurance,
            ppf,
            nsc_investment,
            housing_loan_principal,
            education_fee,
            other_investment_80c,
            total_80c,
            max_80c,
            medical_insurance_80d,
            disabled_dependent_80dd: prior.disabled_dependent_80dd,
            serious_disease_80ddb: prior.serious_disease_80ddb,
            disability_80u: prior.disability_80u,
            donation_80g: prior.donation_80g,
            savings_bank_interest_80tta,
            total_deductions,
            taxable_income,
            rounded_taxable_income,
            tax_slab1,
            tax_slab2,
            tax_slab3,
            total_tax,
            tax_rebate_87a,
            tax_after_rebate,
            education_cess,
            total_tax_payable,
            relief_89,
            net_tax_payable,
            tax_paid,
            balance_tax,
            total_tax_paid: net_tax_payable,
            recovered_month: prior.recovered_month.clone(),
        }
    }

    /// 5% slab over ₹2,50,000, ₹2,50,000 wide.
    fn slab2_tax(&self, rounded_taxable_income: Decimal) -> Decimal {
        if rounded_taxable_income <= self.config.basic_exemption {
            return Decimal::ZERO;
        }
        let slab_income =
            (rounded_taxable_income - self.config.basic_exemption).min(self.config.slab2_width);
        round_rupee(slab_income * self.config.slab2_rate)
    }

    /// 20% slab over ₹5,00,000, ₹5,00,000 wide. Income beyond the width
    /// contributes nothing further.
    fn slab3_tax(&self, rounded_taxable_income: Decimal) -> Decimal {
        if rounded_taxable_income <= self.config.slab3_threshold {
            return Decimal::ZERO;
        }
        let slab_income =
            (rounded_taxable_income - self.config.slab3_threshold).min(self.config.slab3_width);
        round_rupee(slab_income * self.config.slab3_rate)
    }

    /// Section 87A: zeroes small liabilities when rounded taxable income is
    /// at or under ₹5,00,000.
    fn rebate_87a(&self, rounded_taxable_income: Decimal, total_tax: Decimal) -> Decimal {
        if rounded_taxable_income <= self.config.rebate_income_limit {
            total_tax.min(self.config.rebate_cap)
        } else {
            Decimal::ZERO
        }
    }
}

/// Recomputes every derived section of a tax form record.
///
/// Pure and idempotent. Overwrites `salary_data.totals`,
/// `form16_data.monthly_tds`, `tax_calculation_a`, and `tax_calculation_b`;
/// the monthly entries, the declarations, the manual carry-through fields,
/// and both timestamps pass through unchanged. Timestamp maintenance is the
/// persistence layer's job.
pub fn recalculate(form: &TaxFormData) -> TaxFormData {
    let engine = TaxComputationEngine::default();

    let (totals, monthly_tds) = aggregate(&form.salary_data);

    let part_a = engine.calculate_part_a(&totals, &form.declaration_data);
    let part_b = engine.calculate_part_b(
        &part_a,
        &totals,
        &form.declaration_data,
        &form.tax_calculation_b,
    );

    debug!(
        client_id = %form.client_id,
        taxable_income = %part_b.taxable_income,
        net_tax_payable = %part_b.net_tax_payable,
        balance_tax = %part_b.balance_tax,
        "recalculated tax form"
    );

    let mut salary_data = form.salary_data.clone();
    salary_data.totals = totals;
    let mut form16_data = form.form16_data.clone();
    form16_data.monthly_tds = monthly_tds;

    TaxFormData {
        client_id: form.client_id.clone(),
        salary_data,
        declaration_data: form.declaration_data.clone(),
        tax_calculation_a: part_a,
        tax_calculation_b: part_b,
        form16_data,
        created_at: form.created_at,
        updated_at: form.updated_at,
    }
}
