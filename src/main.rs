use anyhow::Result;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use tracksheet::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Structured logging is only wired up in debug mode; normal runs use
    // plain console output through the message macros.
    if tracksheet::libs::messages::macros::is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
