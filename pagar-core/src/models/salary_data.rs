use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::month::Month;
use super::monthly_salary::MonthlySalary;

/// A full financial year of salary entries for one client.
///
/// `totals` is always the field-wise sum across the twelve months, produced
/// by [`aggregate`](crate::calculations::aggregate); it is never entered
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryData {
    /// Financial year label, e.g. "2025-26".
    pub financial_year: String,
    /// Assessment/accounting year label, e.g. "2026-27".
    pub accounting_year: String,
    pub months: BTreeMap<Month, MonthlySalary>,
    pub totals: MonthlySalary,
}

impl SalaryData {
    /// Creates an empty year with all twelve months present and zeroed.
    pub fn empty(financial_year: &str, accounting_year: &str) -> Self {
        Self {
            financial_year: financial_year.to_string(),
            accounting_year: accounting_year.to_string(),
            months: Month::ALL
                .iter()
                .map(|m| (*m, MonthlySalary::default()))
                .collect(),
            totals: MonthlySalary::default(),
        }
    }

    /// The month entry, or an all-zero record when the month is absent.
    pub fn month(&self, month: Month) -> MonthlySalary {
        self.months.get(&month).cloned().unwrap_or_default()
    }

    /// Copies April's entry over every other month, the bulk-entry
    /// convenience for a flat salary year. Each copy is recomputed.
    pub fn copy_april_to_all_months(&mut self) {
        let mut april = self.month(Month::Apr);
        april.recompute();
        for month in Month::ALL {
            self.months.insert(month, april.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::{Month, MonthlySalary, SalaryData};

    #[test]
    fn empty_year_has_all_twelve_months() {
        let data = SalaryData::empty("2025-26", "2026-27");

        assert_eq!(data.months.len(), 12);
        assert_eq!(data.financial_year, "2025-26");
        assert!(data.months.values().all(|m| m.total_salary == dec!(0)));
    }

    #[test]
    fn missing_month_reads_as_zero() {
        let mut data = SalaryData::empty("2025-26", "2026-27");
        data.months.remove(&Month::Sep);

        assert_eq!(data.month(Month::Sep), MonthlySalary::default());
    }

    #[test]
    fn copy_april_fills_every_month() {
        let mut data = SalaryData::empty("2025-26", "2026-27");
        data.months.insert(
            Month::Apr,
            MonthlySalary {
                basic: dec!(56900),
                gpf: dec!(15000),
                ..MonthlySalary::default()
            },
        );

        data.copy_april_to_all_months();

        for month in Month::ALL {
            let entry = data.month(month);
            assert_eq!(entry.basic, dec!(56900));
            assert_eq!(entry.total_salary, dec!(56900));
            assert_eq!(entry.net_pay, dec!(41900));
        }
    }

    #[test]
    fn months_iterate_april_first() {
        let data = SalaryData::empty("2025-26", "2026-27");
        let order: Vec<Month> = data.months.keys().copied().collect();

        assert_eq!(order[0], Month::Apr);
        assert_eq!(order[11], Month::Mar);
    }
}
