//! Date display and reporting-period helpers shared by the dashboard
//!
//! Both halves are pure: `date_format` turns whatever the API hands us into a
//! `DD/MM/YYYY` string, and `periods` builds the month/year choices offered by
//! the period selector.

pub mod constants;
pub mod date_format;
pub mod error;
pub mod periods;

pub use date_format::{DateInput, FormatStrategy, format_date, format_month_year};
pub use error::FormatError;
pub use periods::{
    DEFAULT_MONTHS_BACK, MonthYearOption, SelectedPeriod, current_month_year_options, month_name, month_year_options,
};
