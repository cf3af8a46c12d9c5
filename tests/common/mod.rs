//! In-process mock of the REST API shared by the integration tests.
//!
//! Every handler records `"<METHOD> <path>"`; authenticated routes answer 401
//! unless the request carries `Bearer tok-1`.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "tok-1";

#[derive(Default)]
pub struct Mock {
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl Mock {
    fn record(&self, call: String, headers: &HeaderMap) -> bool {
        let authorized = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            == Some("Bearer tok-1");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        authorized
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().map(|bodies| bodies.clone()).unwrap_or_default()
    }
}

fn user_json(id: u64, username: &str, status: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "name": format!("{username} name"),
        "bio": null,
        "status": status,
        "creationDate": "2025-03-05T10:00:00.000Z",
    })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid token" })),
    )
        .into_response()
}

async fn register_user(State(mock): State<Arc<Mock>>, Json(body): Json<Value>) -> Response {
    mock.record("POST /auth/Register".to_string(), &HeaderMap::new());
    if let Ok(mut bodies) = mock.bodies.lock() {
        bodies.push(body);
    }
    Json(json!({ "token": TOKEN, "user": user_json(7, "ada", "ONLINE") })).into_response()
}

async fn list_users(State(mock): State<Arc<Mock>>, headers: HeaderMap) -> Response {
    if !mock.record("GET /users".to_string(), &headers) {
        return unauthorized();
    }
    Json(json!([
        user_json(7, "ada", "ONLINE"),
        user_json(8, "bob", "OFFLINE"),
    ]))
    .into_response()
}

async fn get_user(
    State(mock): State<Arc<Mock>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !mock.record(format!("GET /users/{id}"), &headers) {
        return unauthorized();
    }
    match id.as_str() {
        "7" => Json(user_json(7, "ada", "ONLINE")).into_response(),
        "8" => Json(user_json(8, "bob", "OFFLINE")).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found" })),
        )
            .into_response(),
    }
}

async fn change_password(
    State(mock): State<Arc<Mock>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !mock.record(format!("POST /users/{id}"), &headers) {
        return unauthorized();
    }
    let accepted = body["oldPassword"] == "old-secret";
    if let Ok(mut bodies) = mock.bodies.lock() {
        bodies.push(body);
    }
    if accepted {
        StatusCode::OK.into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Wrong password" })),
        )
            .into_response()
    }
}

async fn logout(
    State(mock): State<Arc<Mock>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    mock.record(format!("POST /users/{id}/logout"), &headers);
    StatusCode::OK
}

pub async fn serve() -> Result<(String, Arc<Mock>)> {
    let mock = Arc::new(Mock::default());
    let app = Router::new()
        .route("/auth/Register", post(register_user))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user).post(change_password))
        .route("/users/:id/logout", post(logout))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{address}"), mock))
}
