use std::future::Future;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brainstorm::adapters::http::{app_router, with_middleware};
use brainstorm::adapters::{seed_demo_data, InMemorySessionRepository};
use brainstorm::config::AppConfig;
use brainstorm::ports::SessionRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
    if config.features.seed_demo_data {
        let seeded = seed_demo_data(repository.as_ref()).await?;
        tracing::debug!(seeded, "demo data check complete");
    }

    let app = with_middleware(app_router(repository, &config.features), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "brainstorm listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = signal_or_pending(tokio::signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Completes when `signal` fires. A handler that cannot be installed never
/// completes, so it cannot trigger shutdown.
async fn signal_or_pending(signal: impl Future<Output = io::Result<()>>, name: &str) {
    if let Err(err) = signal.await {
        tracing::error!(error = %err, "failed to install {} handler", name);
        std::future::pending::<()>().await;
    }
}
