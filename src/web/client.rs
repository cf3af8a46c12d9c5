//! `gloo-net` transport for the browser. Requests are aborted after
//! [`DEFAULT_TIMEOUT_MS`] so a stalled backend cannot hang the UI, and error
//! bodies are reduced to short user-facing messages.

use super::config::AppConfig;
use crate::{
    api::{
        AppError, Backend, ChangePasswordRequest, DEFAULT_TIMEOUT_MS, RegisterRequest,
        RegisterResponse, User, UserId, errors::error_message_from_body, paths,
    },
    session::SessionStore,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use web_sys::{AbortController, AbortSignal};

pub struct GlooClient {
    base_url: String,
    token: RefCell<Option<SecretString>>,
}

impl GlooClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
        }
    }

    /// Client for the configured API with the stored token installed.
    #[must_use]
    pub fn connect(store: &impl SessionStore) -> Self {
        let client = Self::new(AppConfig::load().api_base_url);
        client.set_token(store.load().ok().flatten().map(|session| session.token));
        client
    }

    fn url(&self, path: &str) -> String {
        paths::build_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.borrow().as_ref() {
            Some(token) => builder.header(
                "Authorization",
                &format!("Bearer {}", token.expose_secret()),
            ),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        let response = send_with_timeout(|signal| {
            self.authorize(Request::get(&url))
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send_post(path, body).await?;
        handle_json_response(response).await
    }

    async fn post_empty_response<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let response = self.send_post(path, body).await?;
        handle_empty_response(response).await
    }

    async fn send_post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, AppError> {
        let url = self.url(path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

        send_with_timeout(move |signal| {
            self.authorize(Request::post(&url))
                .header("Content-Type", "application/json")
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await
    }
}

impl Backend for GlooClient {
    fn set_token(&self, token: Option<SecretString>) {
        *self.token.borrow_mut() = token;
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<RegisterResponse, AppError> {
        self.post_json(paths::REGISTER, request).await
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_json(paths::USERS).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, AppError> {
        self.get_json(&paths::user(id)).await
    }

    async fn change_password(
        &self,
        id: &UserId,
        request: &ChangePasswordRequest<'_>,
    ) -> Result<(), AppError> {
        self.post_empty_response(&paths::user(id), request).await
    }

    async fn logout(&self, id: &UserId) -> Result<(), AppError> {
        self.post_empty_response(&paths::user_logout(id), &serde_json::json!({}))
            .await
    }
}

fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: error_message_from_body(&body),
    }
}
