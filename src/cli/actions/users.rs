use super::{CliContext, Globals, ensure_not_logged_out};
use crate::{
    cli::terminal::{TerminalShell, render_users, use_color},
    pages::{Context, users},
};
use anyhow::{Result, bail};

/// Prints the user list.
///
/// # Errors
/// Returns an error if the list could not be fetched.
pub async fn handle(globals: &Globals) -> Result<()> {
    let (backend, store) = globals.connect()?;
    let shell = TerminalShell::new();
    let ctx: CliContext<'_> = Context::new(&backend, &store, &shell);

    show(&ctx).await
}

pub(super) async fn show(ctx: &CliContext<'_>) -> Result<()> {
    let Some(rows) = users::load(ctx).await else {
        ensure_not_logged_out(ctx.shell)?;
        bail!("could not load users");
    };

    print!("{}", render_users(&rows, use_color()));
    Ok(())
}
