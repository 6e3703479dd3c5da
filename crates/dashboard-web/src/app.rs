use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{FinancialDetailPage, ReportsPage, TeacherDetailPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Página não encontrada"</p> }>
                <Route path=path!("/") view=ReportsPage />
                <Route path=path!("/professores") view=TeacherDetailPage />
                <Route path=path!("/financeiro") view=FinancialDetailPage />
            </Routes>
        </Router>
    }
}
