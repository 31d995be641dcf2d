use std::io::Read;

use pagar_core::calculations::aggregate;
use pagar_core::models::{
    parse_amount_or_zero, DeclarationData, Month, MonthlySalary, SalaryData,
};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when importing salary or declaration data.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no month column found in the header row")]
    MissingMonthColumn,

    #[error("unrecognised month '{0}'")]
    UnknownMonth(String),

    #[error("duplicate row for month '{0}'")]
    DuplicateMonth(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

/// Collapses a header label to a canonical lookup key: lowercased, with
/// underscores, hyphens and dots treated as spaces, and runs of whitespace
/// squeezed to one space.
fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['_', '-', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_month_label(label: &str) -> bool {
    matches!(normalize_label(label).as_str(), "month" | "mahino" | "maas")
}

/// Maps a salary CSV column header to the field it populates.
///
/// Spreadsheets in the field carry a mix of English labels and Gujarati
/// transliterations (`pagar` = pay, `mongvari` = dearness allowance,
/// `gharbhadu` = house rent, `vyavasay vero` = profession tax), so both
/// spellings are accepted. Unknown columns are skipped by the caller.
fn salary_column(label: &str) -> Option<fn(&mut MonthlySalary) -> &mut Decimal> {
    let key = normalize_label(label);
    let field: fn(&mut MonthlySalary) -> &mut Decimal = match key.as_str() {
        "basic" | "basic pay" | "pagar" | "mul pagar" => |m| &mut m.basic,
        "grade pay" => |m| &mut m.grade_pay,
        "da" | "dearness allowance" | "mongvari" | "mongvari bhaththu" => |m| &mut m.da,
        "hra" | "house rent allowance" | "gharbhadu" | "ghar bhadu" => |m| &mut m.hra,
        "medical" | "medical allowance" => |m| &mut m.medical,
        "disability allowance" | "apangta bhaththu" => |m| &mut m.disability_allowance,
        "principal allowance" | "acharya bhaththu" => |m| &mut m.principal_allowance,
        "da arrears" | "mongvari tafavat" => |m| &mut m.da_arrears,
        "salary arrears" | "pagar tafavat" => |m| &mut m.salary_arrears,
        "other income 1" => |m| &mut m.other_income_1,
        "other income 2" => |m| &mut m.other_income_2,
        "gpf" => |m| &mut m.gpf,
        "cpf" => |m| &mut m.cpf,
        "profession tax" | "professional tax" | "vyavasay vero" => |m| &mut m.profession_tax,
        "society" | "mandali" => |m| &mut m.society,
        "group insurance" | "jutha vima" => |m| &mut m.group_insurance,
        "income tax" | "tds" | "avak vero" => |m| &mut m.income_tax,
        _ => return None,
    };
    Some(field)
}

/// Maps a declarations CSV row label to the field it populates.
fn declaration_column(label: &str) -> Option<fn(&mut DeclarationData) -> &mut Decimal> {
    let key = normalize_label(label);
    let field: fn(&mut DeclarationData) -> &mut Decimal = match key.as_str() {
        "bank interest" | "bank vyaj" => |d| &mut d.bank_interest,
        "nsc interest" | "nsc vyaj" => |d| &mut d.nsc_interest,
        "exam income" | "pariksha avak" => |d| &mut d.exam_income,
        "fd interest" | "fd vyaj" => |d| &mut d.fd_interest,
        "other income" | "anya avak" => |d| &mut d.other_income,
        "lic" | "lic premium" => |d| &mut d.lic_premium,
        "post insurance" | "postal insurance" | "post vima" => |d| &mut d.post_insurance,
        "ppf" => |d| &mut d.ppf,
        "nsc" | "nsc investment" => |d| &mut d.nsc_investment,
        "housing loan interest" | "home loan interest" | "makan loan vyaj" => {
            |d| &mut d.housing_loan_interest
        }
        "housing loan principal" | "home loan principal" | "makan loan mudal" => {
            |d| &mut d.housing_loan_principal
        }
        "education fee" | "tuition fee" | "shikshan fee" => |d| &mut d.education_fee,
        "sbi life" => |d| &mut d.sbi_life,
        "sukanya samridhi" | "sukanya samriddhi" => |d| &mut d.sukanya_samridhi,
        "medical insurance" | "mediclaim" | "arogya vima" => |d| &mut d.medical_insurance,
        "five year fd" | "5 year fd" | "tax saver fd" => |d| &mut d.five_year_fd,
        "other deduction" | "anya kapat" => |d| &mut d.other_deduction,
        _ => return None,
    };
    Some(field)
}

/// Importer for salary and declaration CSV exports.
///
/// Schools hand over per-month salary registers as spreadsheets; this takes
/// their CSV export and produces the same records the data-entry form would.
/// Column headers are matched heuristically (English labels and common
/// Gujarati transliterations), unknown columns are ignored, and every cell
/// goes through the zero-on-garbage amount coercion.
pub struct SalaryImporter;

impl SalaryImporter {
    /// Parse a salary register CSV: one row per month, one column per salary
    /// component, plus a month column.
    ///
    /// Months absent from the file stay at all-zero. Each imported month is
    /// recomputed on the stored-record contract and the twelve-month totals
    /// are aggregated before return. The financial/accounting year fields are
    /// left empty; the caller stamps them.
    pub fn parse_salary<R: Read>(reader: R) -> Result<SalaryData, ImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let month_index = headers
            .iter()
            .position(is_month_label)
            .ok_or(ImportError::MissingMonthColumn)?;
        let columns: Vec<(usize, fn(&mut MonthlySalary) -> &mut Decimal)> = headers
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                if index == month_index {
                    return None;
                }
                match salary_column(label) {
                    Some(field) => Some((index, field)),
                    None => {
                        debug!(column = label, "ignoring unrecognised salary column");
                        None
                    }
                }
            })
            .collect();

        let mut data = SalaryData::default();

        for result in csv_reader.records() {
            let record = result?;
            let month_cell = record.get(month_index).unwrap_or("").trim();
            let month = Month::parse(month_cell)
                .ok_or_else(|| ImportError::UnknownMonth(month_cell.to_string()))?;

            let mut entry = MonthlySalary::default();
            for (index, field) in &columns {
                let cell = record.get(*index).unwrap_or("");
                *field(&mut entry) = parse_amount_or_zero(cell);
            }
            entry.recompute();
            if data.months.insert(month, entry).is_some() {
                return Err(ImportError::DuplicateMonth(month.as_str().to_string()));
            }
        }

        // Stored years always carry all twelve months, entered or not.
        for month in Month::ALL {
            data.months.entry(month).or_default();
        }

        let (totals, _) = aggregate(&data);
        data.totals = totals;

        Ok(data)
    }

    /// Parse a declarations CSV of label/value rows.
    ///
    /// The file is read without a header row, so a leading `label,value` line
    /// is simply an unrecognised label and gets skipped along with any other
    /// unknown rows. Group totals are derived before return.
    pub fn parse_declarations<R: Read>(reader: R) -> Result<DeclarationData, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut declarations = DeclarationData::default();

        for result in csv_reader.records() {
            let record = result?;
            let label = record.get(0).unwrap_or("").trim();
            if label.is_empty() {
                continue;
            }
            match declaration_column(label) {
                Some(field) => {
                    let cell = record.get(1).unwrap_or("");
                    *field(&mut declarations) = parse_amount_or_zero(cell);
                }
                None => debug!(label, "ignoring unrecognised declaration row"),
            }
        }

        declarations.recompute_totals();

        Ok(declarations)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use pagar_core::models::Month;

    use super::{ImportError, SalaryImporter};

    const SALARY_CSV: &str = "\
month,pagar,grade_pay,mongvari,gharbhadu,medical,gpf,vyavasay_vero,group insurance,income tax
apr,56900,0,26174,4552,1000,15000,200,800,2000
may,56900,0,26174,4552,1000,15000,200,800,2000
mar,56900,0,26174,4552,1000,15000,200,800,339932
";

    #[test]
    fn parses_gujarati_and_english_headers() {
        let data = SalaryImporter::parse_salary(SALARY_CSV.as_bytes())
            .expect("failed to parse salary CSV");

        let april = data.month(Month::Apr);
        assert_eq!(april.basic, dec!(56900));
        assert_eq!(april.da, dec!(26174));
        assert_eq!(april.hra, dec!(4552));
        assert_eq!(april.profession_tax, dec!(200));
        assert_eq!(april.income_tax, dec!(2000));
    }

    #[test]
    fn recomputes_each_imported_month() {
        let data = SalaryImporter::parse_salary(SALARY_CSV.as_bytes())
            .expect("failed to parse salary CSV");

        let april = data.month(Month::Apr);
        assert_eq!(april.total_salary, dec!(88626));
        assert_eq!(april.total_deduction, dec!(18000));
        assert_eq!(april.net_pay, dec!(70626));
    }

    #[test]
    fn aggregates_totals_over_imported_months() {
        let data = SalaryImporter::parse_salary(SALARY_CSV.as_bytes())
            .expect("failed to parse salary CSV");

        assert_eq!(data.totals.basic, dec!(170700));
        assert_eq!(data.totals.income_tax, dec!(343932));
        assert_eq!(data.totals.total_salary, dec!(265878));
    }

    #[test]
    fn missing_months_stay_zero() {
        let data = SalaryImporter::parse_salary(SALARY_CSV.as_bytes())
            .expect("failed to parse salary CSV");

        assert_eq!(data.month(Month::Jun).total_salary, dec!(0));
    }

    #[test]
    fn garbage_cells_coerce_to_zero() {
        let csv = "month,pagar,gpf\napr,n/a,15000\n";

        let data = SalaryImporter::parse_salary(csv.as_bytes())
            .expect("failed to parse salary CSV");

        assert_eq!(data.month(Month::Apr).basic, dec!(0));
        assert_eq!(data.month(Month::Apr).gpf, dec!(15000));
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let csv = "month,pagar,remarks\napr,56900,paid late\n";

        let data = SalaryImporter::parse_salary(csv.as_bytes())
            .expect("failed to parse salary CSV");

        assert_eq!(data.month(Month::Apr).basic, dec!(56900));
    }

    #[test]
    fn header_without_month_column_is_rejected() {
        let csv = "pagar,gpf\n56900,15000\n";

        let err = SalaryImporter::parse_salary(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ImportError::MissingMonthColumn));
    }

    #[test]
    fn unrecognised_month_is_rejected() {
        let csv = "month,pagar\nfoo,56900\n";

        let err = SalaryImporter::parse_salary(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ImportError::UnknownMonth(ref m) if m == "foo"));
    }

    #[test]
    fn duplicate_month_row_is_rejected() {
        let csv = "month,pagar\napr,56900\nApril,57000\n";

        let err = SalaryImporter::parse_salary(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ImportError::DuplicateMonth(ref m) if m == "apr"));
    }

    #[test]
    fn parses_declaration_rows_and_derives_totals() {
        let csv = "\
label,value
bank vyaj,9000
lic premium,20000
ppf,30000
mediclaim,18000
chai kharcho,500
";

        let declarations = SalaryImporter::parse_declarations(csv.as_bytes())
            .expect("failed to parse declarations CSV");

        assert_eq!(declarations.bank_interest, dec!(9000));
        assert_eq!(declarations.lic_premium, dec!(20000));
        assert_eq!(declarations.ppf, dec!(30000));
        assert_eq!(declarations.medical_insurance, dec!(18000));
        assert_eq!(declarations.other_deduction, dec!(0));
        assert_eq!(declarations.total_income, dec!(9000));
        assert_eq!(declarations.total_deduction, dec!(68000));
    }
}
