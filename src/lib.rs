//! # Userdesk
//!
//! Client for a small social directory backed by a REST API: account
//! registration, the list of registered users with their online status, single
//! user profiles and password changes.
//!
//! ## Session Flow
//!
//! 1. **Register:** `POST /auth/Register` returns a token and the new user. Both
//!    are stored as the session and the user list opens.
//! 2. **Authenticated calls:** every request carries the stored token as
//!    `Authorization: Bearer <token>`.
//! 3. **Forced logout:** whenever the server answers 401, the client tells the
//!    server the user went offline (best effort), clears the session and returns
//!    to the login screen. The explicit logout action and a successful password
//!    change take the same path.
//!
//! The page controllers in [`pages`] are shared by two surfaces: a Leptos front
//! end compiled to `wasm32` (session in `localStorage`) and the `userdesk`
//! command-line client (session in an owner-only JSON file).

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod format;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
