use leptos::prelude::*;
use report_core::format_date;

use super::table::{EmptyState, TableState};
use crate::api::{TeacherPerformance, format_brl, format_count};

pub const TEACHER_COLUMNS: usize = 5;

/// Teacher performance summary, or the matching empty/unavailable message
#[component]
pub fn TeacherPerformanceTable(rows: Option<Vec<TeacherPerformance>>) -> impl IntoView {
    let state = TableState::of(rows.as_deref());
    match (state, rows) {
        (TableState::Populated(_), Some(rows)) => view! { <TeacherRows rows=rows /> }.into_any(),
        (TableState::Empty, _) => {
            view! { <EmptyState message="Nenhum professor com aulas registradas neste período." /> }.into_any()
        }
        _ => view! { <EmptyState message="Desempenho dos professores indisponível no momento." /> }.into_any(),
    }
}

#[component]
fn TeacherRows(rows: Vec<TeacherPerformance>) -> impl IntoView {
    view! {
        <table class="w-full text-left">
            <thead>
                <tr class="text-[var(--ink-light)]">
                    <th class="pr-4">"Professor"</th>
                    <th class="pr-4 text-right">"Aulas"</th>
                    <th class="pr-4 text-right">"Alunos"</th>
                    <th class="pr-4 text-right">"Receita"</th>
                    <th>"Última aula"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| {
                    let last_lesson = format_date(row.last_lesson_date.as_deref());
                    view! {
                        <tr>
                            <td class="pr-4">{row.teacher_name}</td>
                            <td class="pr-4 text-right">{format_count(row.lessons_given)}</td>
                            <td class="pr-4 text-right">{format_count(row.active_students)}</td>
                            <td class="pr-4 text-right">{format_brl(row.revenue)}</td>
                            <td>{last_lesson}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
