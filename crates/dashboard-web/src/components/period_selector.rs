use leptos::prelude::*;
use report_core::{MonthYearOption, SelectedPeriod};

/// Option whose API key matches the `<select>` value
fn find_option<'a>(options: &'a [MonthYearOption], key: &str) -> Option<&'a MonthYearOption> {
    options.iter().find(|option| option.api_key() == key)
}

/// Month/year dropdown; replaces `selected` wholesale on change
#[component]
pub fn PeriodSelector(options: Vec<MonthYearOption>, selected: RwSignal<SelectedPeriod>) -> impl IntoView {
    let lookup = options.clone();

    view! {
        <label class="flex items-center gap-2">
            <strong>"PERÍODO"</strong>
            <select
                class="border border-[var(--rule)] bg-[var(--paper)] px-2 py-1"
                prop:value=move || selected.get().api_key()
                on:change=move |ev| {
                    let key = event_target_value(&ev);
                    match find_option(&lookup, &key) {
                        Some(option) => selected.set(SelectedPeriod::from(option)),
                        None => log::warn!("Unknown period {:?} selected", key),
                    }
                }
            >
                {options.into_iter().map(|option| {
                    let key = option.api_key();
                    let label = option.label().to_string();
                    // prop:value runs before the options exist, so mark the initial one too
                    let is_selected = selected.with_untracked(|period| period.matches(&option));
                    view! { <option value=key selected=is_selected>{label}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}
