pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod filters;
pub mod pagination;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(database: Option<&str>) -> AppConfig {
    match database {
        Some(path) => AppConfig::new().with_database_path(path),
        None => AppConfig::new(),
    }
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_reset(config: AppConfig) -> Result<()> {
    let pool = database::create_pool(&config.database)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::reset_database(&mut conn)?;
    log::info!("Reset database {}", config.database.path);
    Ok(())
}
