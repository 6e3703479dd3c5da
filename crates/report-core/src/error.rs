use thiserror::Error;

/// Failures inside a date formatting strategy.
///
/// These never reach callers of [`crate::format_date`]; they are logged and the
/// raw input is displayed instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Hyphenated input did not carry year, month and day segments
    #[error("expected year-month-day segments in {input:?}, found {found}")]
    MissingSegments { input: String, found: usize },
}
