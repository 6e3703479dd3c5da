//! Configuration for the financial reports dashboard
//!
//! Settings live in `dashboard.toml`, which is embedded at build time since the
//! dashboard runs in the browser and has no filesystem to read from.

use std::sync::LazyLock;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

/// Parsed dashboard settings, falling back to defaults if the embedded file is broken
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_toml_str(DASHBOARD_TOML).unwrap_or_else(|err| {
        log::error!("Invalid embedded dashboard.toml, using defaults: {:#}", err);
        Config::default()
    })
});

// =============================================================================
// File-based Configuration (dashboard.toml)
// =============================================================================

/// Configuration loaded from dashboard.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Page-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Months offered by the period selector, current month included
    #[serde(default = "default_months_back")]
    pub months_back: usize,
    /// Row limit for the summary tables on the reports page
    #[serde(default = "default_summary_limit")]
    pub summary_limit: u32,
}

/// Backend reports API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every endpoint; relative URLs resolve against the page origin
    pub base_url: String,
    #[serde(default = "default_teacher_performance_path")]
    pub teacher_performance_path: String,
    #[serde(default = "default_financial_totals_path")]
    pub financial_totals_path: String,
}

fn default_months_back() -> usize {
    12
}

fn default_summary_limit() -> u32 {
    5
}

fn default_teacher_performance_path() -> String {
    "/reports/teacher-performance".to_string()
}

fn default_financial_totals_path() -> String {
    "/reports/financial-totals".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            name: "Relatórios Financeiros".to_string(),
            tagline: String::new(),
            months_back: default_months_back(),
            summary_limit: default_summary_limit(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            teacher_performance_path: default_teacher_performance_path(),
            financial_totals_path: default_financial_totals_path(),
        }
    }
}

impl Config {
    /// Parse and validate a dashboard.toml document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).with_context(|| {
            "Failed to parse dashboard.toml. Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Incorrect data types (strings vs numbers)"
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.dashboard.months_back > 0, "dashboard.months_back must be at least 1");
        ensure!(self.dashboard.summary_limit > 0, "dashboard.summary_limit must be at least 1");
        ensure!(
            !self.api.base_url.ends_with('/'),
            "api.base_url must not end with '/' (got {})",
            self.api.base_url
        );
        Ok(())
    }

    /// Full URL for the teacher performance summary
    pub fn teacher_performance_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.teacher_performance_path)
    }

    /// Full URL for the financial totals summary
    pub fn financial_totals_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.financial_totals_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = Config::from_toml_str(DASHBOARD_TOML).unwrap();
        assert_eq!(config.dashboard.months_back, 12);
        assert_eq!(config.dashboard.summary_limit, 5);
        assert_eq!(config.teacher_performance_url(), "/api/reports/teacher-performance");
        assert_eq!(config.financial_totals_url(), "/api/reports/financial-totals");
    }

    #[test]
    fn test_static_config_matches_embedded_file() {
        assert_eq!(CONFIG.dashboard.name, "Relatórios Financeiros");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let config = Config::from_toml_str(
            r#"
            [dashboard]
            name = "Painel"

            [api]
            base_url = "https://reports.example.com/v1"
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.months_back, 12);
        assert_eq!(config.dashboard.summary_limit, 5);
        assert!(config.dashboard.tagline.is_empty());
        assert_eq!(
            config.financial_totals_url(),
            "https://reports.example.com/v1/reports/financial-totals"
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.dashboard.months_back, 12);
    }

    #[test]
    fn test_zero_months_rejected() {
        let err = Config::from_toml_str(
            r#"
            [dashboard]
            name = "Painel"
            months_back = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("months_back"));
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let err = Config::from_toml_str(
            r#"
            [api]
            base_url = "/api/"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_invalid_toml_has_context() {
        let err = Config::from_toml_str("[dashboard\nname = 1").unwrap_err();
        assert!(err.to_string().contains("Failed to parse dashboard.toml"));
    }
}
