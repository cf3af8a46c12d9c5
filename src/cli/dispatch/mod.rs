//! Maps parsed CLI arguments to the action to run.

use crate::{
    cli::{
        actions::{Action, Globals, profile, register},
        commands::{
            ARG_API_URL, ARG_SESSION_FILE, CMD_LOGOUT, CMD_PASSWORD, CMD_REGISTER, CMD_SESSION,
            CMD_USER, CMD_USERS,
        },
    },
    pages::{profile::PasswordForm, register::RegisterForm},
};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };

    let globals = globals(matches, sub)?;
    let text = |arg: &str| sub.get_one::<String>(arg).cloned().unwrap_or_default();
    let secret = |arg: &str| SecretString::from(text(arg));

    let action = match name {
        CMD_REGISTER => Action::Register(register::Args {
            globals,
            form: RegisterForm {
                name: text("name"),
                username: text("username"),
                bio: text("bio"),
                password: secret("password"),
                confirm_password: secret("confirm-password"),
            },
        }),
        CMD_USERS => Action::Users(globals),
        CMD_USER => Action::User(profile::Args {
            globals,
            id: text("id"),
        }),
        CMD_PASSWORD => Action::Password(profile::PasswordArgs {
            globals,
            id: text("id"),
            form: PasswordForm {
                current_password: secret("current"),
                new_password: secret("new"),
                confirm_password: secret("confirm"),
            },
        }),
        CMD_LOGOUT => Action::Logout(globals),
        CMD_SESSION => Action::Session(globals),
        other => bail!("unknown subcommand: {other}"),
    };

    Ok(action)
}

fn globals(matches: &ArgMatches, sub: &ArgMatches) -> Result<Globals> {
    let global = |arg: &str| {
        sub.get_one::<String>(arg)
            .or_else(|| matches.get_one::<String>(arg))
            .cloned()
    };

    let api_url = global(ARG_API_URL).context("missing required argument: --api-url")?;
    let session_file = global(ARG_SESSION_FILE)
        .filter(|path| !path.trim().is_empty())
        .map_or_else(default_session_file, PathBuf::from);

    Ok(Globals {
        api_url,
        session_file,
    })
}

/// `$HOME/.userdesk/session.json`, or relative to the working directory without `HOME`.
fn default_session_file() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from(".userdesk"), |home| PathBuf::from(home).join(".userdesk"))
        .join("session.json")
}
