use super::{CliContext, Globals, ensure_not_logged_out};
use crate::{
    cli::terminal::{TerminalShell, render_profile, use_color},
    pages::{
        Context, Outcome,
        profile::{self, PasswordForm, PasswordModal, ProfileState, ProfileView},
    },
};
use anyhow::{Result, bail};

#[derive(Debug)]
pub struct Args {
    pub globals: Globals,
    pub id: String,
}

#[derive(Debug)]
pub struct PasswordArgs {
    pub globals: Globals,
    pub id: String,
    pub form: PasswordForm,
}

/// Prints a user's profile.
///
/// # Errors
/// Returns an error if the profile could not be loaded.
pub async fn handle(args: &Args) -> Result<()> {
    let (backend, store) = args.globals.connect()?;
    let shell = TerminalShell::new();
    let ctx: CliContext<'_> = Context::new(&backend, &store, &shell);

    let view = load(&ctx, &args.id).await?;
    print!("{}", render_profile(&view, use_color()));
    Ok(())
}

/// Changes the password from the user's own profile, which logs them out.
///
/// # Errors
/// Returns an error if the profile is not the caller's own, the form is
/// invalid, or the server rejected the change.
pub async fn handle_password(args: PasswordArgs) -> Result<()> {
    let (backend, store) = args.globals.connect()?;
    let shell = TerminalShell::new();
    let ctx: CliContext<'_> = Context::new(&backend, &store, &shell);

    let view = load(&ctx, &args.id).await?;
    if !view.can_change_password {
        bail!("passwords can only be changed from your own profile");
    }

    let mut modal = PasswordModal::default();
    modal.open();
    modal.form = args.form;

    match modal.submit(&ctx, &view.id).await {
        Outcome::Done(()) => Ok(()),
        Outcome::Invalid(message) => bail!(message),
        Outcome::Reported => {
            ensure_not_logged_out(&shell)?;
            bail!("password change failed")
        }
    }
}

async fn load(ctx: &CliContext<'_>, id: &str) -> Result<ProfileView> {
    match profile::load(ctx, id).await {
        ProfileState::Loaded(view) => Ok(*view),
        ProfileState::NotFound | ProfileState::Loading => {
            ensure_not_logged_out(ctx.shell)?;
            bail!("User not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserId;

    #[test]
    fn password_args_hide_secrets_in_debug() {
        let args = PasswordArgs {
            globals: Globals {
                api_url: "http://localhost:8080".to_string(),
                session_file: "/tmp/session.json".into(),
            },
            id: UserId::parse("3").map(|id| id.to_string()).unwrap(),
            form: PasswordForm {
                current_password: "hunter2".into(),
                new_password: "hunter3".into(),
                confirm_password: "hunter3".into(),
            },
        };

        let debug = format!("{args:?}");
        assert!(!debug.contains("hunter"));
    }
}
