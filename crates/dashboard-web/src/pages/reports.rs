use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;
use report_core::{SelectedPeriod, current_month_year_options};
use shared::CONFIG;

use super::detail_href;
use crate::api::{FinancialTotal, TeacherPerformance, get_financial_totals, get_teacher_performance};
use crate::components::{
    FinancialTotalsTable, PeriodSelector, Section, TEACHER_COLUMNS, TOTALS_COLUMNS, TableSkeleton,
    TeacherPerformanceTable,
};

/// Both summaries for one period
#[derive(Clone)]
struct PeriodReport {
    teachers: Option<Vec<TeacherPerformance>>,
    totals: Option<Vec<FinancialTotal>>,
}

/// Fetch both summaries for a period
async fn fetch_period_report(period_key: String, limit: u32) -> PeriodReport {
    // Each summary can fail independently
    let (teachers, totals) = futures::join!(
        get_teacher_performance(&period_key, Some(limit)),
        get_financial_totals(&period_key, Some(limit)),
    );

    PeriodReport { teachers, totals }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    // Recomputed on every mount, never cached
    let options = current_month_year_options(CONFIG.dashboard.months_back);
    let selected = RwSignal::new(SelectedPeriod::current(Local::now().date_naive()));
    let period_key = Signal::derive(move || selected.get().api_key());
    let limit = CONFIG.dashboard.summary_limit;
    let skeleton_rows = limit as usize;

    let report = LocalResource::new(move || fetch_period_report(period_key.get(), limit));

    view! {
        <main class="max-w-[100ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8">
                <h1 class="text-xl font-bold">{CONFIG.dashboard.name.clone()}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.dashboard.tagline.clone()}</div>
                <div class="mt-4">
                    <PeriodSelector options=options selected=selected />
                </div>
            </header>

            <Suspense fallback=move || view! {
                <Section id="teachers" title=Signal::derive(|| "Professores".to_string())>
                    <TableSkeleton columns=TEACHER_COLUMNS rows=skeleton_rows />
                </Section>
                <Section id="totals" title=Signal::derive(|| "Totais financeiros".to_string())>
                    <TableSkeleton columns=TOTALS_COLUMNS rows=skeleton_rows />
                </Section>
            }>
                {move || {
                    report.get().map(|result| {
                        // Dereference SendWrapper to access the report
                        let report = (*result).clone();
                        view! { <ReportSections report=report selected=selected /> }
                    })
                }}
            </Suspense>
        </main>
    }
}

#[component]
fn ReportSections(report: PeriodReport, selected: RwSignal<SelectedPeriod>) -> impl IntoView {
    let teachers_title = Signal::derive(move || format!("Professores · {}", selected.get().label()));
    let totals_title = Signal::derive(move || format!("Totais financeiros · {}", selected.get().label()));
    let teachers_href = move || detail_href("/professores", &selected.get().api_key());
    let totals_href = move || detail_href("/financeiro", &selected.get().api_key());

    view! {
        <Section id="teachers" title=teachers_title>
            <TeacherPerformanceTable rows=report.teachers />
            <div class="mt-2 text-sm">
                <A href=teachers_href>"ver todos os professores →"</A>
            </div>
        </Section>

        <Section id="totals" title=totals_title>
            <FinancialTotalsTable rows=report.totals />
            <div class="mt-2 text-sm">
                <A href=totals_href>"ver todas as categorias →"</A>
            </div>
        </Section>
    }
}
