//! Reporting periods offered by the month/year selector

use std::fmt;

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::constants::{MONTH_NAMES_PT_BR, MONTHS_PER_YEAR};

/// How many months the selector lists when the caller does not say
pub const DEFAULT_MONTHS_BACK: usize = 12;

/// One selectable reporting month.
///
/// `month` is zero-based (0 = January). Fields are private so a constructed
/// option always has a label that matches its month and year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthYearOption {
    month: u32,
    year: i32,
    label: String,
}

impl MonthYearOption {
    /// Build an option from a zero-based month, rejecting months past December
    pub fn new(month0: u32, year: i32) -> Option<Self> {
        let name = month_name(month0)?;
        Some(Self {
            month: month0,
            year,
            label: format!("{}/{}", name, year),
        })
    }

    /// Parse an API key (`M/YYYY`, one-based month)
    pub fn from_api_key(key: &str) -> Option<Self> {
        let (month, year) = key.trim().split_once('/')?;
        let month: u32 = month.parse().ok()?;
        let year: i32 = year.parse().ok()?;
        Self::new(month.checked_sub(1)?, year)
    }

    /// Zero-based month index
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// e.g. `Março/2024`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Key the reports API expects: one-based month, no padding (`3/2024`)
    pub fn api_key(&self) -> String {
        format!("{}/{}", self.month + 1, self.year)
    }
}

impl fmt::Display for MonthYearOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Period currently chosen in the selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedPeriod(MonthYearOption);

impl SelectedPeriod {
    /// Period containing `reference`
    pub fn current(reference: impl Datelike) -> Self {
        Self(option_at(reference.month0() as i32, reference.year()))
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn label(&self) -> &str {
        self.0.label()
    }

    pub fn api_key(&self) -> String {
        self.0.api_key()
    }

    pub fn option(&self) -> &MonthYearOption {
        &self.0
    }

    /// Whether `option` names this same month
    pub fn matches(&self, option: &MonthYearOption) -> bool {
        self.0.month == option.month && self.0.year == option.year
    }
}

impl From<MonthYearOption> for SelectedPeriod {
    fn from(option: MonthYearOption) -> Self {
        Self(option)
    }
}

impl From<&MonthYearOption> for SelectedPeriod {
    fn from(option: &MonthYearOption) -> Self {
        Self(option.clone())
    }
}

impl fmt::Display for SelectedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Portuguese name for a zero-based month
pub fn month_name(month0: u32) -> Option<&'static str> {
    MONTH_NAMES_PT_BR.get(month0 as usize).copied()
}

/// The `months_back` most recent months ending at `reference`, newest first.
///
/// The month containing `reference` is always the first entry.
pub fn month_year_options(reference: impl Datelike, months_back: usize) -> Vec<MonthYearOption> {
    let current_month = reference.month0() as i32;
    let current_year = reference.year();

    (0..months_back)
        .map(|offset| option_at(current_month - offset as i32, current_year))
        .collect()
}

/// Options ending at today's date in the local timezone
pub fn current_month_year_options(months_back: usize) -> Vec<MonthYearOption> {
    month_year_options(Local::now().date_naive(), months_back)
}

/// Normalize a possibly negative month offset into a valid option
fn option_at(month0: i32, year: i32) -> MonthYearOption {
    let month = month0.rem_euclid(MONTHS_PER_YEAR) as u32;
    let year = year + month0.div_euclid(MONTHS_PER_YEAR);
    let name = MONTH_NAMES_PT_BR[month as usize];

    MonthYearOption {
        month,
        year,
        label: format!("{}/{}", name, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_default_range_length_and_first_entry() {
        let options = month_year_options(date(2024, 3, 18), DEFAULT_MONTHS_BACK);
        assert_eq!(options.len(), 12);
        assert_eq!(options[0].month(), 2);
        assert_eq!(options[0].year(), 2024);
        assert_eq!(options[0].label(), "Março/2024");
    }

    #[test]
    fn test_entries_step_back_one_month() {
        let options = month_year_options(date(2024, 3, 18), 12);

        for pair in options.windows(2) {
            let newer = pair[0].year() * 12 + pair[0].month() as i32;
            let older = pair[1].year() * 12 + pair[1].month() as i32;
            assert_eq!(newer - older, 1);
        }

        let last = options.last().unwrap();
        assert_eq!((last.month(), last.year()), (3, 2023));
        assert_eq!(last.label(), "Abril/2023");
    }

    #[test]
    fn test_january_rolls_back_to_december() {
        let options = month_year_options(date(2025, 1, 1), 3);
        assert_eq!(options[0].label(), "Janeiro/2025");
        assert_eq!((options[1].month(), options[1].year()), (11, 2024));
        assert_eq!(options[1].label(), "Dezembro/2024");
        assert_eq!(options[2].label(), "Novembro/2024");
    }

    #[test]
    fn test_zero_months_is_empty() {
        assert!(month_year_options(date(2025, 6, 30), 0).is_empty());
    }

    #[test]
    fn test_more_than_a_year_keeps_rolling() {
        let options = month_year_options(date(2025, 2, 10), 27);
        assert_eq!(options.len(), 27);
        assert_eq!(options[14].label(), "Dezembro/2023");
        assert_eq!(options[26].label(), "Dezembro/2022");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(0), Some("Janeiro"));
        assert_eq!(month_name(11), Some("Dezembro"));
        assert_eq!(month_name(12), None);
        assert_eq!(MonthYearOption::new(0, 2024).unwrap().label(), "Janeiro/2024");
        assert_eq!(MonthYearOption::new(11, 2024).unwrap().label(), "Dezembro/2024");
        assert!(MonthYearOption::new(12, 2024).is_none());
    }

    #[test]
    fn test_api_key_is_one_based() {
        let option = MonthYearOption::new(2, 2024).unwrap();
        assert_eq!(option.api_key(), "3/2024");
        assert_eq!(MonthYearOption::new(11, 2024).unwrap().api_key(), "12/2024");
    }

    #[test]
    fn test_from_api_key() {
        let option = MonthYearOption::from_api_key("3/2024").unwrap();
        assert_eq!(option.month(), 2);
        assert_eq!(option.label(), "Março/2024");
        assert!(MonthYearOption::from_api_key("0/2024").is_none());
        assert!(MonthYearOption::from_api_key("13/2024").is_none());
        assert!(MonthYearOption::from_api_key("2024-03").is_none());
    }

    #[test]
    fn test_selected_period_defaults_to_reference_month() {
        let selected = SelectedPeriod::current(date(2024, 10, 5));
        assert_eq!(selected.month(), 9);
        assert_eq!(selected.year(), 2024);
        assert_eq!(selected.label(), "Outubro/2024");
        assert_eq!(selected.api_key(), "10/2024");

        let options = month_year_options(date(2024, 10, 5), 2);
        assert!(selected.matches(&options[0]));
        assert!(!selected.matches(&options[1]));
    }

    #[test]
    fn test_selection_replaces_whole_period() {
        let options = month_year_options(date(2025, 1, 20), 2);
        let mut selected = SelectedPeriod::current(date(2025, 1, 20));
        assert_eq!(selected.label(), "Janeiro/2025");

        selected = SelectedPeriod::from(&options[1]);
        assert_eq!(selected.to_string(), "Dezembro/2024");
        assert_eq!(selected.api_key(), "12/2024");
        assert_eq!(selected.option(), &options[1]);
    }

    #[test]
    fn test_option_serializes_fields() {
        let option = MonthYearOption::new(4, 2026).unwrap();
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["month"], 4);
        assert_eq!(json["year"], 2026);
        assert_eq!(json["label"], "Maio/2026");
    }
}
