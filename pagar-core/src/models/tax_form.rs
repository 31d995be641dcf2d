use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::declaration::DeclarationData;
use super::form16::Form16Data;
use super::salary_data::SalaryData;
use super::tax_calculation::{TaxCalculationA, TaxCalculationB};

/// Statutory defaults seeded into a freshly-created record.
const DEFAULT_STANDARD_DEDUCTION: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);
const DEFAULT_CAP_80C: Decimal = Decimal::from_parts(150_000, 0, 0, false, 0);

/// The aggregate root: everything stored for one client's tax form.
///
/// One record per client; the financial year lives inside `salary_data`.
/// Created on first access via [`empty`](Self::empty), mutated by form
/// edits and imports, recomputed by
/// [`recalculate`](crate::calculations::recalculate), and stamped by the
/// repository on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxFormData {
    pub client_id: String,
    pub salary_data: SalaryData,
    pub declaration_data: DeclarationData,
    pub tax_calculation_a: TaxCalculationA,
    pub tax_calculation_b: TaxCalculationB,
    pub form16_data: Form16Data,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaxFormData {
    /// A statutory-defaults-initialised empty record: everything zero
    /// except the standard deduction (₹50,000) and the 80C ceiling
    /// (₹1,50,000).
    pub fn empty(client_id: &str, financial_year: &str, accounting_year: &str) -> Self {
        let now = Utc::now();
        Self {
            client_id: client_id.to_string(),
            salary_data: SalaryData::empty(financial_year, accounting_year),
            declaration_data: DeclarationData::default(),
            tax_calculation_a: TaxCalculationA {
                standard_deduction: DEFAULT_STANDARD_DEDUCTION,
                ..TaxCalculationA::default()
            },
            tax_calculation_b: TaxCalculationB {
                max_80c: DEFAULT_CAP_80C,
                ..TaxCalculationB::default()
            },
            form16_data: Form16Data::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::TaxFormData;

    #[test]
    fn empty_record_carries_statutory_defaults() {
        let form = TaxFormData::empty("client-1", "2025-26", "2026-27");

        assert_eq!(form.client_id, "client-1");
        assert_eq!(form.tax_calculation_a.standard_deduction, dec!(50000));
        assert_eq!(form.tax_calculation_b.max_80c, dec!(150000));
        assert_eq!(form.tax_calculation_a.gross_salary, dec!(0));
        assert_eq!(form.tax_calculation_b.total_tax, dec!(0));
        assert_eq!(form.salary_data.months.len(), 12);
    }

    #[test]
    fn record_round_trips_through_json() {
        let form = TaxFormData::empty("client-1", "2025-26", "2026-27");
        let json = serde_json::to_string(&form).unwrap();
        let back: TaxFormData = serde_json::from_str(&json).unwrap();

        assert_eq!(back, form);
    }
}
