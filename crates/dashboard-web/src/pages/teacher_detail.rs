use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use report_core::format_month_year;

use super::{PERIOD_QUERY_PARAM, period_from_query};
use crate::api::get_teacher_performance;
use crate::components::{Section, TEACHER_COLUMNS, TableSkeleton, TeacherPerformanceTable};

/// Every teacher for one period, no row limit
#[component]
pub fn TeacherDetailPage() -> impl IntoView {
    let query = use_query_map();
    let period = Memo::new(move |_| {
        let value = query.with(|params| params.get(PERIOD_QUERY_PARAM));
        period_from_query(value.as_deref(), Local::now().date_naive())
    });

    let rows = LocalResource::new(move || {
        let period_key = period.get().api_key();
        async move { get_teacher_performance(&period_key, None).await }
    });

    let title = Signal::derive(move || {
        let period = period.get();
        format!("Professores · {}", format_month_year(period.option()))
    });

    view! {
        <main class="max-w-[100ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8">
                <A href="/" attr:class="text-sm">"← voltar aos relatórios"</A>
            </header>

            <Section id="teachers" title=title>
                <Suspense fallback=move || view! { <TableSkeleton columns=TEACHER_COLUMNS rows=8 /> }>
                    {move || {
                        rows.get().map(|result| {
                            let rows = (*result).clone();
                            view! { <TeacherPerformanceTable rows=rows /> }
                        })
                    }}
                </Suspense>
            </Section>
        </main>
    }
}
