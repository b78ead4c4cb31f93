//! Entry point for the rdx binary.

use anyhow::Result;

#[allow(clippy::print_stderr)]
fn main() -> Result<()> {
    // Load GUI configuration (rdx.toml)
    let config = roster_dioxus::RdxConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load rdx.toml: {err}");
        eprintln!("Using default configuration");
        roster_dioxus::RdxConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    roster_dioxus::tracing::init(&config.logging);

    log::info!("Starting rdx");

    // Create tokio runtime for the async drop backend
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    // Parse command-line arguments and launch the application
    let startup_action = roster_dioxus::args::parse_args();
    roster_dioxus::launch(config, startup_action)
}
