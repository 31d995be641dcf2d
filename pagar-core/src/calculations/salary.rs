//! Annual salary aggregation.
//!
//! Reduces the twelve monthly entries to the year's `totals` record and
//! derives the Form 16 monthly-TDS mirror. Aggregation is a straight
//! field-wise sum with no validation: whatever the months contain is
//! summed, negative or absurd values included.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{Month, MonthlySalary, MonthlyTds, SalaryData};

/// Sums the twelve months field-wise and mirrors each month's withheld tax
/// into a Form 16 TDS line.
///
/// The derived fields of the result (`total_salary`, `total_deduction`,
/// `net_pay`) are sums of the per-month derived values, not re-derived from
/// the summed components. The two agree whenever every month was recomputed
/// before aggregation; a month edited without recomputation carries its
/// stale derived values into the annual totals unchanged.
///
/// Months absent from the map aggregate as all-zero. Total function; no
/// error conditions.
pub fn aggregate(salary: &SalaryData) -> (MonthlySalary, BTreeMap<Month, MonthlyTds>) {
    let mut totals = MonthlySalary::default();
    let mut monthly_tds = BTreeMap::new();

    for month in Month::ALL {
        let entry = salary.month(month);

        totals.basic += entry.basic;
        totals.grade_pay += entry.grade_pay;
        totals.da += entry.da;
        totals.hra += entry.hra;
        totals.medical += entry.medical;
        totals.disability_allowance += entry.disability_allowance;
        totals.principal_allowance += entry.principal_allowance;
        totals.da_arrears += entry.da_arrears;
        totals.salary_arrears += entry.salary_arrears;
        totals.other_income_1 += entry.other_income_1;
        totals.other_income_2 += entry.other_income_2;

        totals.gpf += entry.gpf;
        totals.cpf += entry.cpf;
        totals.profession_tax += entry.profession_tax;
        totals.society += entry.society;
        totals.group_insurance += entry.group_insurance;
        totals.income_tax += entry.income_tax;

        totals.total_salary += entry.total_salary;
        totals.total_deduction += entry.total_deduction;
        totals.net_pay += entry.net_pay;

        monthly_tds.insert(
            month,
            MonthlyTds {
                tds: entry.income_tax,
                surcharge: Decimal::ZERO,
                cess: Decimal::ZERO,
                total: entry.income_tax,
            },
        );
    }

    (totals, monthly_tds)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{Month, MonthlySalary, SalaryData};

    use super::aggregate;

    fn flat_year() -> SalaryData {
        let mut data = SalaryData::empty("2025-26", "2026-27");
        data.months.insert(
            Month::Apr,
            MonthlySalary {
                basic: dec!(56900),
                da: dec!(26174),
                hra: dec!(4552),
                medical: dec!(1000),
                da_arrears: dec!(6828),
                gpf: dec!(15000),
                profession_tax: dec!(200),
                group_insurance: dec!(800),
                income_tax: dec!(2000),
                ..MonthlySalary::default()
            },
        );
        data.copy_april_to_all_months();
        data
    }

    #[test]
    fn sums_each_component_across_twelve_months() {
        let data = flat_year();

        let (totals, _) = aggregate(&data);

        assert_eq!(totals.basic, dec!(682800));
        assert_eq!(totals.gpf, dec!(180000));
        assert_eq!(totals.profession_tax, dec!(2400));
        assert_eq!(totals.group_insurance, dec!(9600));
        assert_eq!(totals.income_tax, dec!(24000));
    }

    #[test]
    fn derived_totals_are_sums_of_monthly_derived_values() {
        let data = flat_year();

        let (totals, _) = aggregate(&data);

        // 95454 per month, recomputed before aggregation.
        assert_eq!(totals.total_salary, dec!(1145448));
        assert_eq!(totals.total_deduction, dec!(216000));
        assert_eq!(totals.net_pay, dec!(929448));
    }

    #[test]
    fn stale_monthly_derived_values_propagate_verbatim() {
        let mut data = flat_year();
        // Edit a component without recomputing the month.
        let mut march = data.month(Month::Mar);
        march.basic = dec!(60000);
        data.months.insert(Month::Mar, march);

        let (totals, _) = aggregate(&data);

        // Component sum reflects the edit; the derived total still carries
        // March's pre-edit figure.
        assert_eq!(totals.basic, dec!(56900) * dec!(11) + dec!(60000));
        assert_eq!(totals.total_salary, dec!(1145448));
    }

    #[test]
    fn monthly_tds_mirrors_withheld_tax_with_zero_surcharge_and_cess() {
        let mut data = flat_year();
        let mut march = data.month(Month::Mar);
        march.income_tax = dec!(339932);
        march.recompute();
        data.months.insert(Month::Mar, march);

        let (_, tds) = aggregate(&data);

        assert_eq!(tds.len(), 12);
        let march_line = &tds[&Month::Mar];
        assert_eq!(march_line.tds, dec!(339932));
        assert_eq!(march_line.surcharge, dec!(0));
        assert_eq!(march_line.cess, dec!(0));
        assert_eq!(march_line.total, dec!(339932));
        assert_eq!(tds[&Month::Apr].tds, dec!(2000));
    }

    #[test]
    fn missing_months_aggregate_as_zero() {
        let mut data = flat_year();
        data.months.remove(&Month::Oct);
        data.months.remove(&Month::Nov);

        let (totals, tds) = aggregate(&data);

        assert_eq!(totals.basic, dec!(56900) * dec!(10));
        assert_eq!(tds[&Month::Oct].tds, dec!(0));
        assert_eq!(tds.len(), 12);
    }

    #[test]
    fn all_zero_year_aggregates_to_zero() {
        let data = SalaryData::empty("2025-26", "2026-27");

        let (totals, tds) = aggregate(&data);

        assert_eq!(totals, MonthlySalary::default());
        assert!(tds.values().all(|line| line.total == dec!(0)));
    }
}
