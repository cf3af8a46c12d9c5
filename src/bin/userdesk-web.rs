#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
fn main() {
    mount_to_body(userdesk::web::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
