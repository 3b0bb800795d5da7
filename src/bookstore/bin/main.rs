include!("../../lib.rs");
use std::net::SocketAddr;
use tracing::{error, info};
use crate::bookstore::controller::build_router;
use crate::bookstore::factory;
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, StartupError};
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Configuration::from_env().map_err(|err| {
        error!(error = %err, "invalid configuration");
        err
    })?;

    // the store is probed once, a failure here is fatal and never retried
    let service = factory::create_bookstore_service(&config).await.map_err(|err| {
        error!(error = %err, store = %config.store, "Error connecting to bookstore store");
        StartupError::from(err)
    })?;
    info!(store = %config.store, table = config.table_name.as_str(), "Connected to bookstore store");

    let port = config.port;
    let base_path = config.base_path.clone();
    let app = build_router(AppState::new(config, service));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let server = axum::Server::try_bind(&addr).map_err(|err| {
        error!(error = %err, %addr, "failed to bind listener");
        StartupError::Server(err.to_string())
    })?;
    info!(%addr, base_path = base_path.as_str(), "Bookstore API Server is running on port {}", port);

    server.serve(app.into_make_service()).await
        .map_err(|err| StartupError::Server(err.to_string()))
}
