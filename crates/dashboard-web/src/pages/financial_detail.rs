use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use report_core::format_month_year;

use super::{PERIOD_QUERY_PARAM, period_from_query};
use crate::api::get_financial_totals;
use crate::components::{FinancialTotalsTable, Section, TOTALS_COLUMNS, TableSkeleton};

/// Every financial category for one period, no row limit
#[component]
pub fn FinancialDetailPage() -> impl IntoView {
    let query = use_query_map();
    let period = Memo::new(move |_| {
        let value = query.with(|params| params.get(PERIOD_QUERY_PARAM));
        period_from_query(value.as_deref(), Local::now().date_naive())
    });

    let rows = LocalResource::new(move || {
        let period_key = period.get().api_key();
        async move { get_financial_totals(&period_key, None).await }
    });

    let title = Signal::derive(move || {
        let period = period.get();
        format!("Totais financeiros · {}", format_month_year(period.option()))
    });

    view! {
        <main class="max-w-[100ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8">
                <A href="/" attr:class="text-sm">"← voltar aos relatórios"</A>
            </header>

            <Section id="totals" title=title>
                <Suspense fallback=move || view! { <TableSkeleton columns=TOTALS_COLUMNS rows=8 /> }>
                    {move || {
                        rows.get().map(|result| {
                            let rows = (*result).clone();
                            view! { <FinancialTotalsTable rows=rows /> }
                        })
                    }}
                </Suspense>
            </Section>
        </main>
    }
}
