//! Server startup utilities.

use tally_config::ServerConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
   _____ _ _      _      _____     _ _
  / ____| (_)    | |    |_   _|   | | |
 | |    | |_  ___| | __   | | __ _| | |_   _
 | |    | | |/ __| |/ /   | |/ _` | | | | | |
 | |____| | | (__|   <    | | (_| | | | |_| |
  \_____|_|_|\___|_|\_\   |_|\__,_|_|_|\__, |
                                        __/ |
                                       |___/
    "
    );
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", server.addr());
    info!("{}", separator);
    info!("REST API:  {}", base);
    info!("Health:    {}/health", base);
    info!("API Docs:  {}/api-docs/openapi.json", base);
    info!("CORS:      {}", server.cors_origins.join(", "));
    info!("{}", separator);
}
