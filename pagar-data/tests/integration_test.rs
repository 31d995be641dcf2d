//! Integration tests for CSV import using the actual database backend.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sqlx::sqlite::SqlitePoolOptions;

use pagar_core::{recalculate, TaxFormRepository};
use pagar_data::SalaryImporter;
use pagar_db_sqlite::SqliteRepository;

const SALARY_CSV: &str = include_str!("../test-data/salary_2025_26.csv");
const DECLARATIONS_CSV: &str = include_str!("../test-data/declarations_2025_26.csv");

async fn setup_test_db() -> SqliteRepository {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteRepository::new_with_pool(pool);
    repo.run_migrations()
        .await
        .expect("Failed to run migrations");

    repo
}

#[tokio::test]
async fn import_salary_register_and_persist_computed_form() {
    let repo = setup_test_db().await;

    let mut form = repo
        .get_or_create("client-1", "2025-26", "2026-27")
        .await
        .expect("Failed to create record");

    let imported =
        SalaryImporter::parse_salary(SALARY_CSV.as_bytes()).expect("Failed to parse salary CSV");
    assert_eq!(imported.months.len(), 12);

    form.salary_data.months = imported.months;
    let computed = recalculate(&form);
    repo.save(&computed).await.expect("Failed to save record");

    let stored = repo
        .get_by_client_id("client-1")
        .await
        .expect("Failed to fetch record")
        .expect("Record missing after save");

    assert_eq!(stored.salary_data.totals.total_salary, dec!(1145448));
    assert_eq!(stored.salary_data.totals.gpf, dec!(180000));
    assert_eq!(stored.tax_calculation_a.professional_income, dec!(1093048));
    assert_eq!(stored.tax_calculation_b.total_80c, dec!(189600));
    assert_eq!(stored.tax_calculation_b.max_80c, dec!(150000));
    assert_eq!(stored.tax_calculation_b.taxable_income, dec!(943048));
    assert_eq!(stored.tax_calculation_b.net_tax_payable, dec!(105152));
    assert_eq!(stored.tax_calculation_b.tax_paid, dec!(361932));
    assert_eq!(stored.tax_calculation_b.balance_tax, dec!(-256780));
}

#[tokio::test]
async fn import_declarations_lowers_the_tax_bill() {
    let repo = setup_test_db().await;

    let mut form = repo
        .get_or_create("client-2", "2025-26", "2026-27")
        .await
        .expect("Failed to create record");

    form.salary_data.months = SalaryImporter::parse_salary(SALARY_CSV.as_bytes())
        .expect("Failed to parse salary CSV")
        .months;
    form.declaration_data = SalaryImporter::parse_declarations(DECLARATIONS_CSV.as_bytes())
        .expect("Failed to parse declarations CSV");

    assert_eq!(form.declaration_data.bank_interest, dec!(9000));
    assert_eq!(form.declaration_data.lic_premium, dec!(20000));
    assert_eq!(form.declaration_data.ppf, dec!(30000));
    assert_eq!(form.declaration_data.medical_insurance, dec!(18000));

    let computed = recalculate(&form);
    let saved = repo.save(&computed).await.expect("Failed to save record");

    let b = &saved.tax_calculation_b;
    // 180000 GPF + 9600 group insurance + 20000 LIC + 30000 PPF, capped later.
    assert_eq!(b.total_80c, dec!(239600));
    assert_eq!(b.max_80c, dec!(150000));
    assert_eq!(b.medical_insurance_80d, dec!(18000));
    assert_eq!(b.savings_bank_interest_80tta, dec!(9000));
    assert_eq!(b.taxable_income, dec!(925048));
    assert_eq!(b.rounded_taxable_income, dec!(925040));
    assert_eq!(b.tax_slab3, dec!(85008));
    assert_eq!(b.total_tax, dec!(97508));
    assert_eq!(b.education_cess, dec!(3900));
    assert_eq!(b.net_tax_payable, dec!(101408));
    assert_eq!(b.balance_tax, dec!(-260524));
}

#[tokio::test]
async fn reimport_is_idempotent() {
    let repo = setup_test_db().await;

    for _ in 0..2 {
        let mut form = repo
            .get_or_create("client-3", "2025-26", "2026-27")
            .await
            .expect("Failed to load record");
        form.salary_data.months = SalaryImporter::parse_salary(SALARY_CSV.as_bytes())
            .expect("Failed to parse salary CSV")
            .months;
        let computed = recalculate(&form);
        repo.save(&computed).await.expect("Failed to save record");
    }

    let stored = repo
        .get_by_client_id("client-3")
        .await
        .expect("Failed to fetch record")
        .expect("Record missing after save");

    assert_eq!(stored.tax_calculation_b.net_tax_payable, dec!(105152));
    assert_eq!(stored.salary_data.totals.total_salary, dec!(1145448));
}
