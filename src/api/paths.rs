//! Endpoint paths for the REST API, kept in one place so both transports agree.

use super::types::UserId;

pub const REGISTER: &str = "/auth/Register";
pub const USERS: &str = "/users";

#[must_use]
pub fn user(id: &UserId) -> String {
    format!("{USERS}/{id}")
}

#[must_use]
pub fn user_logout(id: &UserId) -> String {
    format!("{USERS}/{id}/logout")
}

/// Joins a base URL and a path without doubling or dropping the separator.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
