use tracing_subscriber::EnvFilter;

fn main() {
    // Setup logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = canvass::gui::run_app() {
        tracing::error!("failed to start: {e}");
        std::process::exit(1);
    }
}
