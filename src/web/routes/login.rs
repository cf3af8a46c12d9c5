//! Landing screen after a logout or a rejected session. Signing in with an
//! existing account is handled by the backend's own login page; from here the
//! user can register or return to the list if a session is still stored.

use crate::{
    navigation::paths,
    session::SessionStore,
    web::{
        LocalStorageStore,
        components::{Alert, AlertKind},
    },
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LoginPage() -> impl IntoView {
    let has_session = LocalStorageStore.load().ok().flatten().is_some();

    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-8 space-y-4">
                <h1 class="text-2xl font-semibold text-slate-900">"Welcome"</h1>
                {if has_session {
                    view! {
                        <p class="text-sm text-slate-500">"You are already logged in."</p>
                        <A href=paths::USERS {..} class="text-blue-600 hover:text-blue-800">
                            "Go to the user list"
                        </A>
                    }
                    .into_any()
                } else {
                    view! {
                        <Alert
                            kind=AlertKind::Info
                            message="You are logged out. Create an account to join the directory.".to_owned()
                        />
                        <A href=paths::REGISTER {..} class="text-blue-600 hover:text-blue-800">
                            "Register"
                        </A>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
