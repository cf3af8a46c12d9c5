pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";

pub const CMD_REGISTER: &str = "register";
pub const CMD_USERS: &str = "users";
pub const CMD_USER: &str = "user";
pub const CMD_PASSWORD: &str = "password";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_SESSION: &str = "session";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userdesk")
        .about("User directory client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the REST API")
                .env("USERDESK_API_URL")
                .default_value("http://localhost:8080")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the session token is kept (default: $HOME/.userdesk/session.json)")
                .env("USERDESK_SESSION_FILE")
                .global(true),
        )
        .subcommand(register())
        .subcommand(Command::new(CMD_USERS).about("List all registered users"))
        .subcommand(
            Command::new(CMD_USER)
                .about("Show a user's profile")
                .arg(Arg::new("id").help("User id").required(true)),
        )
        .subcommand(password())
        .subcommand(
            Command::new(CMD_LOGOUT).about("Go offline and forget the stored session"),
        )
        .subcommand(
            Command::new(CMD_SESSION).about("Show who is logged in, without revealing the token"),
        );

    logging::with_args(command)
}

fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account and log in")
        .arg(Arg::new("name").long("name").help("Display name"))
        .arg(Arg::new("username").long("username").help("Unique username"))
        .arg(Arg::new("bio").long("bio").help("Short bio (optional)"))
        .arg(
            Arg::new("password")
                .long("password")
                .help("Password")
                .env("USERDESK_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("The same password again")
                .env("USERDESK_CONFIRM_PASSWORD")
                .hide_env_values(true),
        )
}

fn password() -> Command {
    Command::new(CMD_PASSWORD)
        .about("Change your password; you are logged out afterwards")
        .arg(Arg::new("id").help("Your user id").required(true))
        .arg(
            Arg::new("current")
                .long("current")
                .help("Current password")
                .env("USERDESK_CURRENT_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("new")
                .long("new")
                .help("New password")
                .env("USERDESK_NEW_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("confirm")
                .long("confirm")
                .help("New password again")
                .env("USERDESK_CONFIRM_NEW_PASSWORD")
                .hide_env_values(true),
        )
}
