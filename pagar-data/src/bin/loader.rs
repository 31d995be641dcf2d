use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pagar_core::{recalculate, TaxFormRepository};
use pagar_data::SalaryImporter;
use pagar_db_sqlite::SqliteRepository;
use tracing_subscriber::EnvFilter;

/// Import salary register and declaration CSV exports for a client.
///
/// The salary CSV has one row per month and one column per salary component;
/// headers are matched against English labels and common Gujarati
/// transliterations. The declarations CSV is label/value rows. The client's
/// record is created on first import, everything derived is recalculated,
/// and the result is saved.
#[derive(Parser, Debug)]
#[command(name = "pagar-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database URL (e.g., sqlite:pagar.db?mode=rwc to create if missing)
    #[arg(short, long, default_value = "sqlite:pagar.db?mode=rwc")]
    database: String,

    /// Run database migrations before loading data
    #[arg(short, long, default_value_t = false)]
    migrate: bool,

    /// Client identifier the imported data belongs to
    #[arg(short, long)]
    client_id: String,

    /// Path to the salary register CSV
    #[arg(long)]
    salary_csv: Option<PathBuf>,

    /// Path to the declarations CSV
    #[arg(long)]
    declarations_csv: Option<PathBuf>,

    /// Financial year the data covers (e.g., 2025-26)
    #[arg(long, default_value = "2025-26")]
    financial_year: String,

    /// Assessment year the return is filed in (e.g., 2026-27)
    #[arg(long, default_value = "2026-27")]
    accounting_year: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let repo = SqliteRepository::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;

    if args.migrate {
        println!("Running migrations...");
        repo.run_migrations()
            .await
            .context("Failed to run migrations")?;
        println!("Migrations complete.");
    }

    let mut form = repo
        .get_or_create(&args.client_id, &args.financial_year, &args.accounting_year)
        .await
        .with_context(|| format!("Failed to load record for client: {}", args.client_id))?;

    if let Some(path) = &args.salary_csv {
        println!("Importing salary register from: {}", path.display());

        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let imported = SalaryImporter::parse_salary(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;

        println!("Imported {} salary months.", imported.months.len());

        form.salary_data.months = imported.months;
        form.salary_data.financial_year = args.financial_year.clone();
        form.salary_data.accounting_year = args.accounting_year.clone();
    }

    if let Some(path) = &args.declarations_csv {
        println!("Importing declarations from: {}", path.display());

        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        form.declaration_data = SalaryImporter::parse_declarations(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
    }

    let computed = recalculate(&form);
    let saved = repo
        .save(&computed)
        .await
        .with_context(|| format!("Failed to save record for client: {}", args.client_id))?;

    println!(
        "Saved client {}: net tax payable {}, balance tax {}.",
        saved.client_id,
        saved.tax_calculation_b.net_tax_payable,
        saved.tax_calculation_b.balance_tax,
    );

    Ok(())
}
