use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use teamroles_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub api_host: String,
    pub api_port: u16,
    pub teams_api_base_url: Url,
    pub users_api_base_url: Url,
    pub directory_timeout: Duration,
}

impl ApiConfig {
    pub fn load() -> AppResult<Self> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let database_url = required_env(&lookup, "DATABASE_URL")?;
        let database_max_connections = non_zero(
            parsed_env(&lookup, "DATABASE_MAX_CONNECTIONS", 10_u32)?,
            "DATABASE_MAX_CONNECTIONS",
        )?;

        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = parsed_env(&lookup, "API_PORT", 3001)?;

        let teams_api_base_url = parse_url(
            "TEAMS_API_BASE_URL",
            required_env(&lookup, "TEAMS_API_BASE_URL")?.as_str(),
        )?;
        let users_api_base_url = lookup("USERS_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_url("USERS_API_BASE_URL", value.as_str()))
            .transpose()?
            .unwrap_or_else(|| teams_api_base_url.clone());

        let directory_timeout = Duration::from_millis(non_zero(
            parsed_env(&lookup, "DIRECTORY_TIMEOUT_MS", 5000_u64)?,
            "DIRECTORY_TIMEOUT_MS",
        )?);

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections,
            api_host,
            api_port,
            teams_api_base_url,
            users_api_base_url,
            directory_timeout,
        })
    }

    pub fn socket_address(&self) -> AppResult<SocketAddr> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::InvalidArgument(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> AppResult<String> {
    let value =
        lookup(name).ok_or_else(|| AppError::InvalidArgument(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "{name} must not be empty"
        )));
    }

    Ok(value)
}

fn parsed_env<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::InvalidArgument(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}

fn non_zero<T>(value: T, name: &str) -> AppResult<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        return Err(AppError::InvalidArgument(format!(
            "{name} must be greater than zero"
        )));
    }

    Ok(value)
}

fn parse_url(name: &str, value: &str) -> AppResult<Url> {
    Url::parse(value).map_err(|error| AppError::InvalidArgument(format!("invalid {name}: {error}")))
}
