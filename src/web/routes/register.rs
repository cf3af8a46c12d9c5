//! Registration form. Required fields are checked before the request; a
//! successful registration stores the session and opens the user list.

use crate::{
    navigation::paths,
    pages::{Outcome, register::{self, RegisterForm}},
    web::{
        Browser, BrowserShell,
        components::{Alert, AlertKind, Button},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

#[derive(Clone)]
struct RegisterInput {
    name: String,
    username: String,
    bio: String,
    password: String,
    confirm_password: String,
}

impl From<RegisterInput> for RegisterForm {
    fn from(input: RegisterInput) -> Self {
        Self {
            name: input.name,
            username: input.username,
            bio: input.bio,
            password: input.password.into(),
            confirm_password: input.confirm_password.into(),
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let shell = BrowserShell::new();
    let (name, set_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    // Only a validation message is kept; server failures were already alerted.
    let register_action = Action::new_local(move |input: &RegisterInput| {
        let form = RegisterForm::from(input.clone());
        let browser = Browser::connect(shell.clone());
        async move {
            match register::submit(&browser.context(), &form).await {
                Outcome::Invalid(message) => Some(message),
                Outcome::Done(_) | Outcome::Reported => None,
            }
        }
    });
    let pending = register_action.pending();
    let error = move || register_action.value().get().flatten();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        register_action.dispatch(RegisterInput {
            name: name.get_untracked(),
            username: username.get_untracked(),
            bio: bio.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        });
    };

    let field = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";
    let label = "block mb-2 text-sm font-medium text-slate-700";

    view! {
        <div class="min-h-[70vh] flex items-center justify-center">
            <form
                class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-8 space-y-4"
                on:submit=on_submit
            >
                <h1 class="text-2xl font-semibold text-slate-900">"Register"</h1>

                <div>
                    <label class=label for="name">"Name"</label>
                    <input
                        id="name"
                        class=field
                        autocomplete="name"
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=label for="username">"Username"</label>
                    <input
                        id="username"
                        class=field
                        autocomplete="username"
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=label for="bio">"Bio"</label>
                    <textarea
                        id="bio"
                        class=field
                        rows="3"
                        placeholder="Optional"
                        on:input=move |event| set_bio.set(event_target_value(&event))
                    ></textarea>
                </div>
                <div>
                    <label class=label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=field
                        autocomplete="new-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=field
                        autocomplete="new-password"
                        on:input=move |event| set_confirm_password.set(event_target_value(&event))
                    />
                </div>

                {move || error().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

                <Button button_type="submit" disabled=pending>
                    {move || if pending.get() { "Registering..." } else { "Register" }}
                </Button>
                <A href=paths::LOGIN {..} class="block text-sm text-blue-600 hover:text-blue-800">
                    "Back to Login"
                </A>
            </form>
        </div>
    }
}
