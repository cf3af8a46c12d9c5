//! Profile page. The password dialog is only offered on the logged-in user's
//! own profile; a successful change logs the user out.

use crate::{
    api::UserId,
    format::UNKNOWN_DATE,
    navigation::paths,
    pages::profile::{self, ModalState, PasswordForm, PasswordModal, ProfileState, ProfileView},
    web::{
        Browser, BrowserShell,
        components::{Alert, AlertKind, Button, ButtonStyle, Spinner},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_params, params::Params};
use secrecy::{ExposeSecret, SecretString};

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params::<UserParams>();
    let shell = BrowserShell::new();

    let profile = LocalResource::new(move || {
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        let browser = Browser::connect(shell.clone());
        async move { profile::load(&browser.context(), &id).await }
    });

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-6 space-y-4">
            {move || match profile.get() {
                None | Some(ProfileState::Loading) => {
                    view! { <Spinner label="Loading profile" /> }.into_any()
                }
                Some(ProfileState::NotFound) => view! {
                    <p class="text-gray-500">"User not found"</p>
                }
                .into_any(),
                Some(ProfileState::Loaded(view)) => view! { <ProfileDetails view=*view /> }.into_any(),
            }}
            <A href=paths::USERS {..} class="inline-block text-sm text-blue-600 hover:text-blue-800">
                "Back to Users"
            </A>
        </div>
    }
}

#[component]
fn ProfileDetails(view: ProfileView) -> impl IntoView {
    let status_style = format!("color: {}", view.status_color);
    let date_class = if view.creation_date == UNKNOWN_DATE {
        "text-gray-400"
    } else {
        "text-gray-900"
    };
    let password_dialog = view
        .can_change_password
        .then(|| view! { <PasswordDialog id=view.id.clone() /> });

    view! {
        <div class="space-y-4">
            <h1 class="text-lg font-semibold text-gray-900">{view.title}</h1>
            <Field label="Username">{view.username}</Field>
            <Field label="Name">{view.name}</Field>
            <Field label="Status">
                <span class="font-semibold" style=status_style>{view.status.to_string()}</span>
            </Field>
            <Field label="Member since">
                <span class=date_class>{view.creation_date}</span>
            </Field>
            <Field label="Bio">{view.bio}</Field>
            {password_dialog}
        </div>
    }
}

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <span class="block text-sm font-medium text-gray-500">{label}</span>
            <div class="text-gray-900">{children()}</div>
        </div>
    }
}

#[derive(Clone, Copy)]
enum PasswordField {
    Current,
    New,
    Confirm,
}

impl PasswordField {
    fn get(self, form: &PasswordForm) -> &SecretString {
        match self {
            Self::Current => &form.current_password,
            Self::New => &form.new_password,
            Self::Confirm => &form.confirm_password,
        }
    }

    fn set(self, form: &mut PasswordForm, value: String) {
        let slot = match self {
            Self::Current => &mut form.current_password,
            Self::New => &mut form.new_password,
            Self::Confirm => &mut form.confirm_password,
        };
        *slot = value.into();
    }
}

#[component]
fn PasswordDialog(id: UserId) -> impl IntoView {
    let shell = BrowserShell::new();
    let modal = RwSignal::new(PasswordModal::default());
    let error = RwSignal::new(None::<String>);
    let state = move || modal.with(PasswordModal::state);

    let change_action = Action::new_local(move |form: &PasswordForm| {
        let form = form.clone();
        let browser = Browser::connect(shell.clone());
        let id = id.clone();
        async move { profile::send(&browser.context(), &id, &form).await }
    });

    // Alerted or logged out on failure; the modal decides what stays on screen.
    Effect::new(move |_| {
        if let Some(change) = change_action.value().get() {
            modal.update(|modal| modal.finish(change));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if modal.with_untracked(PasswordModal::state) != ModalState::Open {
            return;
        }
        match modal.try_update(PasswordModal::begin) {
            Some(Ok(form)) => {
                error.set(None);
                change_action.dispatch(form);
            }
            Some(Err(message)) => error.set(Some(message)),
            None => {}
        }
    };

    let on_cancel = Callback::new(move |()| {
        modal.update(PasswordModal::cancel);
        error.set(None);
    });
    let on_open = Callback::new(move |()| modal.update(PasswordModal::open));

    let field = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900";
    let password_input = move |id: &'static str, slot: PasswordField| {
        view! {
            <input
                id=id
                type="password"
                class=field
                prop:value=move || modal.with(|modal| slot.get(&modal.form).expose_secret().to_owned())
                on:input=move |event| {
                    let value = event_target_value(&event);
                    modal.update(|modal| slot.set(&mut modal.form, value));
                }
            />
        }
    };

    view! {
        <div class="pt-4 border-t border-gray-200">
            <Show
                when=move || state() != ModalState::Closed
                fallback=move || view! { <Button on_click=on_open>"Change Password"</Button> }
            >
                <form class="space-y-4" on:submit=on_submit>
                    <h2 class="text-base font-semibold text-gray-900">"Change Password"</h2>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="current-password">
                            "Current Password"
                        </label>
                        {password_input("current-password", PasswordField::Current)}
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="new-password">
                            "New Password"
                        </label>
                        {password_input("new-password", PasswordField::New)}
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="confirm-password">
                            "Confirm New Password"
                        </label>
                        {password_input("confirm-password", PasswordField::Confirm)}
                    </div>

                    {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

                    <div class="flex gap-3">
                        <Button button_type="submit" disabled=Signal::derive(move || state() == ModalState::Submitting)>
                            "Submit"
                        </Button>
                        <Button
                            style=ButtonStyle::Secondary
                            disabled=Signal::derive(move || state() == ModalState::Submitting)
                            on_click=on_cancel
                        >
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
