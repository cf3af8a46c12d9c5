use leptos::prelude::*;

/// Loading indicator shown while a page waits for its single request.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="flex items-center gap-3 py-6 text-sm text-gray-500">
            <div
                class="inline-block h-6 w-6 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label=label
            ></div>
            <span>{label}</span>
        </div>
    }
}
