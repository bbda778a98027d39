//! Redis Lite - A single-process LRU key-value cache
//!
//! Interactive shell reading commands from stdin.

use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_lite::{CacheStore, CommandValidator, Config, Session};

/// Main entry point for the Redis Lite shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout stays the shell)
/// 2. Load configuration from environment variables
/// 3. Create the cache store and wrap it in the validator
/// 4. Run the session on stdin/stdout until EXIT, end of input or a signal
fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs don't interleave with replies; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_lite=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, prompt={:?}",
        config.capacity, config.prompt
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(config));
    // The stdin reader thread blocks in read() and cannot be cancelled
    runtime.shutdown_background();
    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let store = CacheStore::new(config.capacity);
    let mut session = Session::new(CommandValidator::new(store), config.prompt);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = session.run(stdin, stdout) => result?,
        _ = shutdown_signal() => {}
    }

    info!("Shell shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
