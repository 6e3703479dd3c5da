//! Financial reports dashboard: month/year selector plus teacher performance
//! and financial totals tables, rendered client-side with Leptos.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
