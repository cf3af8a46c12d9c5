//! Wire types for the user directory REST API. Field names follow the backend's
//! camelCase JSON; request types borrow their fields so passwords are never
//! copied into long-lived structs or `Debug` output.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::errors::AppError;

/// User identifier as the client sees it.
///
/// The backend may send ids as JSON numbers or strings; both are normalized to
/// the string form so ownership checks compare ids as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parses a route or storage value, rejecting blank ids.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the value is empty after trimming.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("User id is required.".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Self(value),
            RawId::Number(value) => Self(value.to_string()),
        })
    }
}

/// Presence flag maintained by the backend on login and logout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Online,
    Offline,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }

    #[must_use]
    pub fn is_online(self) -> bool {
        self == Self::Online
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub status: UserStatus,
    #[serde(default)]
    pub creation_date: Option<String>,
}

/// Body of `POST /auth/Register`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<&'a str>,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Response of `POST /auth/Register`.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub token: SecretString,
    pub user: User,
}

/// Body of `POST /users/{id}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}
