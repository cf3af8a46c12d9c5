//! Native `reqwest` transport for the REST API.

use super::{
    AppError, Backend, ChangePasswordRequest, DEFAULT_TIMEOUT_MS, RegisterRequest,
    RegisterResponse, User, UserId, errors::error_message_from_body, paths,
};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    sync::{PoisonError, RwLock},
    time::Duration,
};
use tracing::{debug, instrument};
use url::Url;

/// HTTP client bound to one API base URL and, optionally, one session token.
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
}

impl HttpClient {
    /// Builds a client for `base_url`.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL is not an absolute http(s) URL or the
    /// underlying client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let url = Url::parse(base_url.trim())
            .map_err(|err| AppError::Config(format!("Invalid API base URL: {err}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Unsupported API URL scheme: {}",
                url.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(Duration::from_millis(u64::from(DEFAULT_TIMEOUT_MS)))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: url.to_string(),
            token: RwLock::new(None),
        })
    }

    #[must_use]
    pub fn with_token(self, token: Option<SecretString>) -> Self {
        self.set_token(token);
        self
    }

    fn url(&self, path: &str) -> String {
        paths::build_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match token.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        debug!(path, "GET");
        let response = self
            .authorize(self.client.get(self.url(path)))
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        debug!(path, "POST");
        let response = self
            .authorize(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    async fn post_empty_response<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        debug!(path, "POST");
        let response = self
            .authorize(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }
}

impl Backend for HttpClient {
    fn set_token(&self, token: Option<SecretString>) {
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = token;
    }

    #[instrument(skip_all, fields(username = request.username))]
    async fn register(&self, request: &RegisterRequest<'_>) -> Result<RegisterResponse, AppError> {
        self.post_json(paths::REGISTER, request).await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_json(paths::USERS).await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn get_user(&self, id: &UserId) -> Result<User, AppError> {
        self.get_json(&paths::user(id)).await
    }

    #[instrument(skip(self, request), fields(user_id = %id))]
    async fn change_password(
        &self,
        id: &UserId,
        request: &ChangePasswordRequest<'_>,
    ) -> Result<(), AppError> {
        self.post_empty_response(&paths::user(id), request).await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn logout(&self, id: &UserId) -> Result<(), AppError> {
        self.post_empty_response(&paths::user_logout(id), &serde_json::json!({}))
            .await
    }
}

/// Maps transport errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    debug!(status, "request rejected");
    AppError::Http {
        status,
        message: error_message_from_body(&body),
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}
