use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;
use vb_api::{create_app, middleware::create_cors, AppState};
use vb_core::services::{CredentialHasher, TokenService, TokenServiceConfig};
use vb_infra::database::{create_pool, MySqlUserRepository, MySqlVacationRepository};
use vb_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Vacations API Server");

    let config = AppConfig::from_env().context("failed to load configuration")?;
    info!("Environment: {}", config.environment);

    // Crypto services are built once and shared
    let hasher = Arc::new(CredentialHasher::new(&config.auth.hashing)?);
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from_jwt_config(
        &config.auth.jwt,
    )?));

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    pool.apply_schema().await.context("failed to apply database schema")?;
    let pool = pool.into_inner();

    let state = web::Data::new(AppState::new(
        Arc::new(MySqlUserRepository::new(pool.clone())),
        Arc::new(MySqlVacationRepository::new(pool)),
        hasher,
        tokens,
        config.server.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let server = config.server;

    HttpServer::new(move || create_app(state.clone(), create_cors(environment, &server)))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
