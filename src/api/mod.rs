//! REST API access for the user directory.
//!
//! Pages talk to the backend through the [`Backend`] trait so the same flows run
//! over `reqwest` on native targets and `gloo-net` in the browser. Transports
//! attach the session token as `Authorization: Bearer <token>` and report every
//! non-2xx response as [`AppError::Http`], which is how a 401 is recognized.

pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod paths;
pub mod types;

pub use errors::AppError;
pub use types::{
    ChangePasswordRequest, RegisterRequest, RegisterResponse, User, UserId, UserStatus,
};

use secrecy::SecretString;

/// Default request timeout (milliseconds) applied by every transport.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// REST operations the pages depend on.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Installs or removes the token attached to authenticated requests.
    fn set_token(&self, token: Option<SecretString>);

    /// `POST /auth/Register`
    async fn register(&self, request: &RegisterRequest<'_>) -> Result<RegisterResponse, AppError>;

    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: &UserId) -> Result<User, AppError>;

    /// `POST /users/{id}`
    async fn change_password(
        &self,
        id: &UserId,
        request: &ChangePasswordRequest<'_>,
    ) -> Result<(), AppError>;

    /// `POST /users/{id}/logout`, which marks the user offline.
    async fn logout(&self, id: &UserId) -> Result<(), AppError>;
}
