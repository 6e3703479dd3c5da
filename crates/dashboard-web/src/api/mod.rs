mod format;
mod http;
mod reports;

pub use format::{format_brl, format_count, format_percent};
pub use reports::{FinancialTotal, TeacherPerformance, get_financial_totals, get_teacher_performance};
