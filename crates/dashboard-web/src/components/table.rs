use leptos::prelude::*;

/// What a summary table should show once its fetch has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Request failed or the response could not be decoded
    Unavailable,
    /// Request succeeded with no rows for the period
    Empty,
    /// Rows to render
    Populated(usize),
}

impl TableState {
    pub fn of<T>(rows: Option<&[T]>) -> Self {
        match rows {
            None => TableState::Unavailable,
            Some([]) => TableState::Empty,
            Some(rows) => TableState::Populated(rows.len()),
        }
    }
}

/// Placeholder rows shown while a summary is loading
#[component]
pub fn TableSkeleton(columns: usize, rows: usize) -> impl IntoView {
    view! {
        <table class="w-full animate-pulse" aria-busy="true">
            <tbody>
                {(0..rows).map(|_| view! {
                    <tr>
                        {(0..columns).map(|_| view! {
                            <td class="py-1 pr-4">
                                <div class="h-4 bg-[var(--rule)] rounded"></div>
                            </td>
                        }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

/// Message shown in place of a table
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-[var(--ink-light)]">{message}</div>
    }
}
