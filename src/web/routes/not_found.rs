use crate::navigation::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center space-y-4">
            <h1 class="text-6xl font-black text-gray-200 select-none">"404"</h1>
            <p class="text-gray-500">"Page not found"</p>
            <A href=paths::USERS {..} class="text-blue-600 hover:text-blue-800">
                "Back to users"
            </A>
        </div>
    }
}
