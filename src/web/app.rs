use super::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="mx-auto max-w-4xl px-6 py-10">
                <AppRoutes />
            </main>
        </Router>
    }
}
