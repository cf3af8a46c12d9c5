#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let action = userdesk::cli::start()?;
    action.execute().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
