//! Terminal rendering of the pages. Alerts go to stderr, page content to stdout,
//! and navigation is recorded so the command can follow it.

use crate::{
    api::UserStatus,
    navigation::{Route, Shell},
    pages::{profile::ProfileView, users::UserRow},
};
use clap::builder::styling::{AnsiColor, Style};
use std::{
    cell::RefCell,
    fmt::Write as _,
    io::{self, IsTerminal},
};
use tracing::info;

pub struct TerminalShell {
    location: RefCell<Option<Route>>,
}

impl TerminalShell {
    #[must_use]
    pub fn new() -> Self {
        Self {
            location: RefCell::new(None),
        }
    }

    /// Last route navigated to, if any.
    #[must_use]
    pub fn location(&self) -> Option<Route> {
        self.location.borrow().clone()
    }
}

impl Default for TerminalShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for TerminalShell {
    fn navigate(&self, route: &Route) {
        info!(%route, "navigate");
        *self.location.borrow_mut() = Some(route.clone());
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Whether stdout should carry ANSI colors.
#[must_use]
pub fn use_color() -> bool {
    io::stdout().is_terminal()
}

fn status_text(status: UserStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    let style: Style = if status.is_online() {
        AnsiColor::Green.on_default()
    } else {
        AnsiColor::Red.on_default()
    };
    format!("{}{status}{}", style.render(), style.render_reset())
}

/// Renders the user table: one line per row plus a header.
#[must_use]
pub fn render_users(rows: &[UserRow], color: bool) -> String {
    if rows.is_empty() {
        return "No users found.\n".to_string();
    }

    let id_width = rows
        .iter()
        .map(|row| row.id.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = rows
        .iter()
        .map(|row| row.username.chars().count())
        .max()
        .unwrap_or(0)
        .max("USERNAME".len());
    let status_width = "OFFLINE".len();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:<name_width$}  {:<status_width$}  PROFILE",
        "ID", "USERNAME", "STATUS"
    );
    for row in rows {
        // pad before coloring so escape codes do not skew the columns
        let padding = " ".repeat(status_width.saturating_sub(row.status.as_str().len()));
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<name_width$}  {}{padding}  {}",
            row.id.as_str(),
            row.username,
            status_text(row.status, color),
            row.href
        );
    }
    out
}

/// Renders a profile card.
#[must_use]
pub fn render_profile(view: &ProfileView, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "Username:      {}", view.username);
    let _ = writeln!(out, "Name:          {}", view.name);
    let _ = writeln!(out, "Status:        {}", status_text(view.status, color));
    let _ = writeln!(out, "Creation Date: {}", view.creation_date);
    let _ = writeln!(out, "Bio:           {}", view.bio);
    if view.can_change_password {
        let _ = writeln!(
            out,
            "\nThis is your profile. Change the password with `userdesk password {}`.",
            view.id
        );
    }
    out
}
