mod period_selector;
mod section;
mod table;
mod teacher_table;
mod totals_table;

pub use period_selector::PeriodSelector;
pub use section::Section;
pub use table::{TableSkeleton, TableState};
pub use teacher_table::{TEACHER_COLUMNS, TeacherPerformanceTable};
pub use totals_table::{FinancialTotalsTable, PeriodTotals, TOTALS_COLUMNS};
