mod amount;
mod declaration;
mod form16;
mod month;
mod monthly_salary;
mod salary_data;
mod tax_calculation;
mod tax_form;

pub use amount::{amount_or_zero, parse_amount_or_zero};
pub use declaration::DeclarationData;
pub use form16::{Form16Data, MonthlyTds};
pub use month::Month;
pub use monthly_salary::MonthlySalary;
pub use salary_data::SalaryData;
pub use tax_calculation::{TaxCalculationA, TaxCalculationB};
pub use tax_form::TaxFormData;
