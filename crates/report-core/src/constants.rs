//! Locale constants for the pt-BR dashboard

// =============================================================================
// Calendar
// =============================================================================

/// Portuguese month names, indexed by zero-based month
pub const MONTH_NAMES_PT_BR: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub const MONTHS_PER_YEAR: i32 = 12;

// =============================================================================
// Display Formats
// =============================================================================

/// pt-BR short date: day/month/year, zero-padded
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date-time layouts tried in order before falling back to date-only layouts
pub const DATETIME_PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, numeric first, then English month names
pub const DATE_PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];
