use crate::cli::{
    actions::Action,
    commands::{self, logging},
    dispatch,
};
use anyhow::Result;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Parses the command line, installs the tracing subscriber and returns the
/// action to run.
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed or dispatch fails.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);

    // Logs go to stderr so stdout stays clean for the printed pages.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(logging::level(verbosity).into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);
    tracing::subscriber::set_global_default(subscriber)?;

    dispatch::handler(&matches)
}
