use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::CONFIG;

use super::http::get_json;

/// One teacher's results for a reporting month
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeacherPerformance {
    #[serde(alias = "teacherId")]
    pub teacher_id: u64,
    #[serde(alias = "teacherName")]
    pub teacher_name: String,
    #[serde(alias = "lessonsGiven", default)]
    pub lessons_given: u64,
    #[serde(alias = "activeStudents", default)]
    pub active_students: u64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(alias = "lastLessonDate", default)]
    pub last_lesson_date: Option<String>,
}

/// Income and expenses for one category in a reporting month
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinancialTotal {
    pub category: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    /// Only some backend versions send this
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(alias = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl FinancialTotal {
    /// Reported balance, or income minus expenses when the API omits it
    pub fn net_balance(&self) -> f64 {
        self.balance.unwrap_or(self.income - self.expenses)
    }

    /// Balance as a percentage of income, if there was any income
    pub fn margin_percent(&self) -> Option<f64> {
        (self.income > 0.0).then(|| self.net_balance() / self.income * 100.0)
    }
}

/// Raw API response - can be array or object wrapping the rows
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowsResponse<T> {
    Array(Vec<T>),
    Object { data: Option<Vec<T>> },
}

impl<T> RowsResponse<T> {
    fn into_rows(self) -> Vec<T> {
        match self {
            RowsResponse::Array(rows) => rows,
            RowsResponse::Object { data } => data.unwrap_or_default(),
        }
    }
}

/// Build a summary URL for a `M/YYYY` period key
pub fn summary_url(endpoint: &str, period_key: &str, limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("{}?period={}&limit={}", endpoint, period_key, limit),
        None => format!("{}?period={}", endpoint, period_key),
    }
}

async fn get_rows<T: DeserializeOwned>(url: &str) -> Option<Vec<T>> {
    let response: RowsResponse<T> = get_json(url).await?;
    Some(response.into_rows())
}

/// Fetch teacher performance rows for a period
pub async fn get_teacher_performance(period_key: &str, limit: Option<u32>) -> Option<Vec<TeacherPerformance>> {
    let url = summary_url(&CONFIG.teacher_performance_url(), period_key, limit);
    get_rows(&url).await
}

/// Fetch financial totals for a period
pub async fn get_financial_totals(period_key: &str, limit: Option<u32>) -> Option<Vec<FinancialTotal>> {
    let url = summary_url(&CONFIG.financial_totals_url(), period_key, limit);
    get_rows(&url).await
}
