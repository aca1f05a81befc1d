use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_TOKEN_URL: &str = "https://auth.sitecorecloud.io/oauth/token";
pub const DEFAULT_AUDIENCE: &str = "https://api.sitecorecloud.io";

/// Reads `.env` (if present) and then the process environment.
///
/// # Errors
///
/// [`ConfigError::MissingEnvVar`] when a Sitecore credential or the GraphQL
/// endpoint is unset or blank; [`ConfigError::InvalidEnvVar`] when an
/// optional setting does not parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] without touching `.env`.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Assembles an [`AppConfig`] from `lookup`, applying Sitecore defaults for
/// the token URL and audience.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let sitecore_client_id = require("SITECORE_CLIENT_ID")?;
    let sitecore_client_secret = require("SITECORE_CLIENT_SECRET")?;
    let sitecore_graphql_endpoint = require("SITECORE_GRAPHQL_ENDPOINT")?;

    let env = parse_environment(&or_default("LOCFETCH_ENV", "development"))?;
    let bind_addr = parse_addr("LOCFETCH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LOCFETCH_LOG_LEVEL", "info");
    let sitecore_token_url = or_default("SITECORE_TOKEN_URL", DEFAULT_TOKEN_URL);
    let sitecore_audience = or_default("SITECORE_AUDIENCE", DEFAULT_AUDIENCE);
    let http_timeout_secs = parse_u64("LOCFETCH_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LOCFETCH_USER_AGENT", "locfetch/0.1 (field-sync)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sitecore_client_id,
        sitecore_client_secret,
        sitecore_graphql_endpoint,
        sitecore_token_url,
        sitecore_audience,
        http_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LOCFETCH_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
