use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{create_router, AppState};
use crate::config::settings::AppConfig;
use crate::database::{self, SqlitePlayerRepository};
use crate::services::players::PlayerService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    /// Opens the database, creating the schema if needed, and wires the
    /// service into shared router state.
    pub fn build_state(config: AppConfig) -> Result<Arc<AppState>> {
        let pool = database::create_pool(&config.database)?;
        database::setup::ensure_schema(&mut database::get_connection(&pool)?)?;

        let repository = Arc::new(SqlitePlayerRepository::new(pool));
        Ok(Arc::new(AppState {
            service: PlayerService::new(repository),
            config,
        }))
    }

    pub async fn run(&self) -> Result<()> {
        info!("Using database {}", self.config.database.path);
        let state = Self::build_state(self.config.clone())?;

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
