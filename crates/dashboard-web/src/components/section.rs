use leptos::prelude::*;

/// Titled block of a reports page
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <section id=id class="mb-8">
            <h2 class="font-bold uppercase mb-3">
                {move || format!("─┤ {} ├─", title.get())}
            </h2>
            <div class="pl-4 border-l border-dashed border-[var(--rule)]">
                {children()}
            </div>
        </section>
    }
}
