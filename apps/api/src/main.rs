//! Team roles API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use teamroles_application::{MembershipService, RoleService, TeamService, UserService};
use teamroles_core::AppError;
use teamroles_infrastructure::{
    HttpTeamDirectory, HttpUserDirectory, PostgresMembershipRepository, PostgresRoleRepository,
};
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::api_router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let http_client = reqwest::Client::builder()
        .timeout(config.directory_timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build http client: {error}")))?;

    let team_directory = Arc::new(HttpTeamDirectory::new(
        http_client.clone(),
        config.teams_api_base_url.clone(),
    ));
    let user_directory = Arc::new(HttpUserDirectory::new(
        http_client,
        config.users_api_base_url.clone(),
    ));

    let role_repository = Arc::new(PostgresRoleRepository::new(pool.clone()));
    let membership_repository = Arc::new(PostgresMembershipRepository::new(pool.clone()));

    let team_service = TeamService::new(team_directory);
    let membership_service = MembershipService::new(
        role_repository.clone(),
        membership_repository,
        team_service.clone(),
    );
    let role_service = RoleService::new(role_repository, membership_service.clone());
    let user_service = UserService::new(user_directory);

    let app = build_router(AppState {
        role_service,
        membership_service,
        team_service,
        user_service,
        postgres_pool: Some(pool),
    });

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "teamroles api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
