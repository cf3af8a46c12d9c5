//! Profile screen for a single user, including the password change modal that
//! is offered only on the logged-in user's own profile.
//!
//! Page: `Loading -> Loaded | NotFound`.
//! Modal: `Closed -> Open -> Submitting -> Closed`, with `Submitting -> Open`
//! when the server rejects the change for any reason other than a 401.

use super::{Context, Outcome};
use crate::{
    api::{Backend, ChangePasswordRequest, User, UserId, UserStatus},
    format,
    navigation::Shell,
    session::SessionStore,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

pub const PASSWORD_CHANGED: &str = "Password changed successfully! You will be logged out.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "The passwords do not match!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    Loaded(Box<ProfileView>),
    NotFound,
}

/// Display-ready profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub id: UserId,
    pub title: String,
    pub username: String,
    pub name: String,
    pub status: UserStatus,
    pub status_color: &'static str,
    pub creation_date: String,
    pub bio: String,
    /// Whether the password change control is shown.
    pub can_change_password: bool,
}

impl ProfileView {
    /// `viewer` is the stored id of the logged-in user.
    #[must_use]
    pub fn new(user: &User, viewer: Option<&UserId>) -> Self {
        Self {
            id: user.id.clone(),
            title: format!("{}'s Profile", user.username),
            username: user.username.clone(),
            name: user.name.clone(),
            status: user.status,
            status_color: format::status_color(user.status),
            creation_date: format::creation_date(user.creation_date.as_deref()),
            bio: format::bio(user.bio.as_deref()).to_string(),
            can_change_password: viewer.is_some_and(|viewer| viewer.as_str() == user.id.as_str()),
        }
    }
}

/// Fetches the user named by the route parameter.
pub async fn load<B, S, H>(ctx: &Context<'_, B, S, H>, raw_id: &str) -> ProfileState
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    let action = "while fetching the user";
    let id = match UserId::parse(raw_id) {
        Ok(id) => id,
        Err(err) => {
            ctx.report(action, &err).await;
            return ProfileState::NotFound;
        }
    };

    match ctx.backend.get_user(&id).await {
        Ok(user) => {
            let viewer = ctx.stored_user_id();
            ProfileState::Loaded(Box::new(ProfileView::new(&user, viewer.as_ref())))
        }
        Err(err) => {
            ctx.report(action, &err).await;
            ProfileState::NotFound
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Cancel,
    Submit,
    Succeeded,
    Failed,
    /// The session was dropped while submitting.
    LoggedOut,
}

impl ModalState {
    /// Applies `event`; events that do not apply to the current state are ignored.
    #[must_use]
    pub fn next(self, event: ModalEvent) -> Self {
        match (self, event) {
            (Self::Closed, ModalEvent::Open) => Self::Open,
            (Self::Open, ModalEvent::Cancel) => Self::Closed,
            (Self::Open, ModalEvent::Submit) => Self::Submitting,
            (Self::Submitting, ModalEvent::Succeeded | ModalEvent::LoggedOut) => Self::Closed,
            (Self::Submitting, ModalEvent::Failed) => Self::Open,
            (state, _) => state,
        }
    }
}

#[derive(Debug, Default)]
pub struct PasswordForm {
    pub current_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl PasswordForm {
    /// Checks required fields and that the confirmation matches.
    ///
    /// # Errors
    /// Returns the user-facing message for the first failing rule.
    pub fn validate(&self) -> Result<(), String> {
        if self.current_password.expose_secret().is_empty() {
            return Err("Please enter your current password!".to_string());
        }
        if self.new_password.expose_secret().is_empty() {
            return Err("Please enter a new password!".to_string());
        }
        if self.confirm_password.expose_secret().is_empty() {
            return Err("Please confirm your new password!".to_string());
        }
        if self.new_password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(PASSWORDS_DO_NOT_MATCH.to_string());
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Clone for PasswordForm {
    fn clone(&self) -> Self {
        let copy = |secret: &SecretString| SecretString::from(secret.expose_secret().to_owned());
        Self {
            current_password: copy(&self.current_password),
            new_password: copy(&self.new_password),
            confirm_password: copy(&self.confirm_password),
        }
    }
}

/// Result of a password change that reached the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordChange {
    Changed,
    /// Rejected for a reason other than the session; already alerted.
    Rejected,
    /// The server dropped the session; the forced logout already ran.
    LoggedOut,
}

impl PasswordChange {
    fn outcome(self) -> Outcome<()> {
        match self {
            Self::Changed => Outcome::Done(()),
            Self::Rejected | Self::LoggedOut => Outcome::Reported,
        }
    }

    fn event(self) -> ModalEvent {
        match self {
            Self::Changed => ModalEvent::Succeeded,
            Self::Rejected => ModalEvent::Failed,
            Self::LoggedOut => ModalEvent::LoggedOut,
        }
    }
}

/// Validates and submits a password change for the profile `id`.
///
/// On success the user is told and logged out. A 401 goes straight to the
/// forced logout; other failures are alerted.
pub async fn change_password<B, S, H>(
    ctx: &Context<'_, B, S, H>,
    id: &UserId,
    form: &PasswordForm,
) -> Outcome<()>
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    if let Err(message) = form.validate() {
        return Outcome::Invalid(message);
    }
    send(ctx, id, form).await.outcome()
}

/// Sends an already validated form.
pub async fn send<B, S, H>(
    ctx: &Context<'_, B, S, H>,
    id: &UserId,
    form: &PasswordForm,
) -> PasswordChange
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    let request = ChangePasswordRequest {
        old_password: form.current_password.expose_secret(),
        new_password: form.new_password.expose_secret(),
    };

    match ctx.backend.change_password(id, &request).await {
        Ok(()) => {
            info!(user_id = %id, "password changed");
            ctx.shell.alert(PASSWORD_CHANGED);
            let viewer = ctx.stored_user_id();
            ctx.handle_unauthorized(viewer.as_ref()).await;
            PasswordChange::Changed
        }
        Err(err) => {
            let change = if err.is_unauthorized() {
                PasswordChange::LoggedOut
            } else {
                PasswordChange::Rejected
            };
            ctx.report("while changing password", &err).await;
            change
        }
    }
}

/// Password change modal with its form and state.
#[derive(Clone, Debug, Default)]
pub struct PasswordModal {
    state: ModalState,
    pub form: PasswordForm,
}

impl PasswordModal {
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn open(&mut self) {
        self.state = self.state.next(ModalEvent::Open);
    }

    /// Closes the modal and clears the fields.
    pub fn cancel(&mut self) {
        if self.state == ModalState::Open {
            self.state = self.state.next(ModalEvent::Cancel);
            self.form.reset();
        }
    }

    /// Validates the open form and moves to `Submitting`, returning the form to send.
    ///
    /// # Errors
    /// Returns the user-facing message when the modal is not open or the form
    /// is invalid; the state is left unchanged.
    pub fn begin(&mut self) -> Result<PasswordForm, String> {
        if self.state != ModalState::Open {
            return Err("The password form is not open.".to_string());
        }
        self.form.validate()?;
        self.state = self.state.next(ModalEvent::Submit);
        Ok(self.form.clone())
    }

    /// Applies the server's answer. A closed modal has its fields cleared.
    pub fn finish(&mut self, change: PasswordChange) {
        self.state = self.state.next(change.event());
        if self.state == ModalState::Closed {
            self.form.reset();
        }
    }

    /// Submits the form. A modal that is not open, or an invalid form, never
    /// reaches the server.
    pub async fn submit<B, S, H>(&mut self, ctx: &Context<'_, B, S, H>, id: &UserId) -> Outcome<()>
    where
        B: Backend,
        S: SessionStore,
        H: Shell,
    {
        let form = match self.begin() {
            Ok(form) => form,
            Err(message) => return Outcome::Invalid(message),
        };

        let change = send(ctx, id, &form).await;
        self.finish(change);
        change.outcome()
    }
}
