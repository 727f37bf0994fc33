use rekap::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logging only in debug mode; normal runs use plain console
    // output through the message macros.
    if std::env::var("REKAP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rekap=debug")))
            .init();
    }

    Cli::menu()
}
