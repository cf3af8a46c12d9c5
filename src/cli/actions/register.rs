use super::{CliContext, Globals, users};
use crate::{
    cli::terminal::TerminalShell,
    navigation::Route,
    pages::{Context, Outcome, register},
};
use anyhow::{Result, bail};

#[derive(Debug)]
pub struct Args {
    pub globals: Globals,
    pub form: register::RegisterForm,
}

/// Registers, then follows the navigation to the user list.
///
/// # Errors
/// Returns an error if the form is incomplete or the server rejected it.
pub async fn handle(args: Args) -> Result<()> {
    let (backend, store) = args.globals.connect()?;
    let shell = TerminalShell::new();
    let ctx: CliContext<'_> = Context::new(&backend, &store, &shell);

    match register::submit(&ctx, &args.form).await {
        Outcome::Done(user) => println!("Registered {} (id {}).", user.username, user.id),
        Outcome::Invalid(message) => bail!(message),
        Outcome::Reported => bail!("registration failed"),
    }

    if shell.location() == Some(Route::Users) {
        println!();
        users::show(&ctx).await?;
    }

    Ok(())
}
