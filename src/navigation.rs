//! Screens the pages can navigate between and the surface-specific shell that
//! performs navigation and blocking alerts.

use crate::api::UserId;
use std::fmt;

pub mod paths {
    use crate::api::UserId;

    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const USERS: &str = "/users";

    #[must_use]
    pub fn user_detail(id: &UserId) -> String {
        format!("{USERS}/{id}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Users,
    UserProfile(UserId),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => paths::LOGIN.to_string(),
            Self::Register => paths::REGISTER.to_string(),
            Self::Users => paths::USERS.to_string(),
            Self::UserProfile(id) => paths::user_detail(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path())
    }
}

/// Navigation and user-facing alerts, provided by the browser or the terminal.
pub trait Shell {
    fn navigate(&self, route: &Route);

    /// Shows a blocking message to the user.
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Register.path(), "/register");
        assert_eq!(Route::Users.to_string(), "/users");
        assert_eq!(
            Route::UserProfile(UserId::parse("9").unwrap()).path(),
            "/users/9"
        );
    }
}
