//! Leptos front end. Each route mounts one page controller from
//! [`crate::pages`] and runs it against the browser collaborators: the
//! `gloo-net` client, `localStorage` and the router.
//!
//! Only [`config`] builds on native targets, so its override rules stay testable
//! without a browser.

pub mod config;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;
#[cfg(target_arch = "wasm32")]
mod shell;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use self::{app::App, client::GlooClient, shell::BrowserShell, storage::LocalStorageStore};

#[cfg(target_arch = "wasm32")]
type BrowserContext<'a> = crate::pages::Context<'a, GlooClient, LocalStorageStore, BrowserShell>;

/// Browser collaborators for one page flow.
#[cfg(target_arch = "wasm32")]
struct Browser {
    backend: GlooClient,
    store: LocalStorageStore,
    shell: BrowserShell,
}

#[cfg(target_arch = "wasm32")]
impl Browser {
    fn connect(shell: BrowserShell) -> Self {
        let store = LocalStorageStore;
        Self {
            backend: GlooClient::connect(&store),
            store,
            shell,
        }
    }

    fn context(&self) -> BrowserContext<'_> {
        crate::pages::Context::new(&self.backend, &self.store, &self.shell)
    }
}
