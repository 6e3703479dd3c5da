mod financial_detail;
mod reports;
mod teacher_detail;

use chrono::NaiveDate;
use report_core::{MonthYearOption, SelectedPeriod};

pub use financial_detail::FinancialDetailPage;
pub use reports::ReportsPage;
pub use teacher_detail::TeacherDetailPage;

/// Query parameter carrying the period key on detail pages
pub const PERIOD_QUERY_PARAM: &str = "periodo";

/// Period named by a `?periodo=M/YYYY` query, or the month containing `today`
fn period_from_query(value: Option<&str>, today: NaiveDate) -> SelectedPeriod {
    match value.and_then(MonthYearOption::from_api_key) {
        Some(option) => option.into(),
        None => {
            if let Some(value) = value {
                log::warn!("Ignoring invalid period {:?} in URL", value);
            }
            SelectedPeriod::current(today)
        }
    }
}

/// Link target for a detail page
fn detail_href(path: &str, period_key: &str) -> String {
    format!("{}?{}={}", path, PERIOD_QUERY_PARAM, period_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn test_period_from_query() {
        let period = period_from_query(Some("11/2024"), today());
        assert_eq!(period.label(), "Novembro/2024");
    }

    #[test]
    fn test_period_from_query_defaults_to_today() {
        assert_eq!(period_from_query(None, today()).api_key(), "1/2025");
        assert_eq!(period_from_query(Some("13/2024"), today()).api_key(), "1/2025");
        assert_eq!(period_from_query(Some("abc"), today()).api_key(), "1/2025");
    }

    #[test]
    fn test_detail_href() {
        assert_eq!(detail_href("/professores", "3/2024"), "/professores?periodo=3/2024");
    }
}
