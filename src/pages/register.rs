//! Registration screen. Only required fields are checked locally; whether the
//! two passwords match is left to the server.

use super::{Context, Outcome};
use crate::{
    api::{Backend, RegisterRequest, User},
    navigation::{Route, Shell},
    session::{Session, SessionStore},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

#[derive(Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegisterForm {
    /// Returns the message for the first missing required field.
    ///
    /// # Errors
    /// Returns the user-facing message when a required field is blank.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            (self.name.as_str(), "Please input your Name!"),
            (self.username.as_str(), "Please input your Username!"),
            (self.password.expose_secret(), "Please input your Password!"),
            (
                self.confirm_password.expose_secret(),
                "Please confirm your Password!",
            ),
        ];

        match required
            .iter()
            .find(|(value, _)| value.trim().is_empty())
        {
            Some((_, message)) => Err((*message).to_string()),
            None => Ok(()),
        }
    }
}

/// Registers the account, stores the returned session and opens the user list.
pub async fn submit<B, S, H>(ctx: &Context<'_, B, S, H>, form: &RegisterForm) -> Outcome<User>
where
    B: Backend,
    S: SessionStore,
    H: Shell,
{
    if let Err(message) = form.validate() {
        return Outcome::Invalid(message);
    }

    let bio = form.bio.trim();
    let request = RegisterRequest {
        name: &form.name,
        username: &form.username,
        bio: (!bio.is_empty()).then_some(bio),
        password: form.password.expose_secret(),
        confirm_password: form.confirm_password.expose_secret(),
    };

    let response = match ctx.backend.register(&request).await {
        Ok(response) => response,
        Err(err) => {
            ctx.report("during the register", &err).await;
            return Outcome::Reported;
        }
    };

    let session = Session::new(response.token, Some(response.user.id.clone()));
    if let Err(err) = ctx.store.save(&session) {
        ctx.report("during the register", &err).await;
        return Outcome::Reported;
    }
    ctx.backend.set_token(Some(session.token));
    info!(user_id = %response.user.id, "registered");

    ctx.shell.navigate(&Route::Users);
    Outcome::Done(response.user)
}
