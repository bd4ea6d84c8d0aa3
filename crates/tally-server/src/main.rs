//! # Click Tally Server
//!
//! Main entry point: configuration, logging, database, DI module, router,
//! then serve until Ctrl+C or SIGTERM.

use tally_config::{AppConfig, ConfigLoader};
use tally_core::{TallyError, TallyResult};
use tally_repository::{create_pool, DatabasePoolInterface};
use tally_rest::{create_router, AppState};
use tally_server::{
    di::build_module,
    logging::init_logging,
    startup::{print_banner, print_startup_info},
};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    print_banner();
    info!("Starting Click Tally Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> TallyResult<()> {
    // Opens the pool and creates the schema before anything is served.
    let db_pool = create_pool(&config.database).await?;

    let module = build_module(&db_pool);
    let app_state = AppState::from_module(module.as_ref());
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TallyError::internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&config.server);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TallyError::internal(format!("REST server error: {e}")));

    db_pool.close().await;
    served?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
