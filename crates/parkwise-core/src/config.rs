use crate::app_config::{AppConfig, Environment, GeoSourceMode};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config pointed at the public Overpass endpoint and a local
/// predictor.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("PARKWISE_ENV", "development"))?;

    let bind_addr = or_default("PARKWISE_BIND_ADDR", "0.0.0.0:4000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PARKWISE_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("PARKWISE_LOG_LEVEL", "info");

    let geo_source = parse_geo_source(&or_default("PARKWISE_GEO_SOURCE", "live"))?;
    let overpass_url = or_default(
        "PARKWISE_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let overpass_timeout_secs = parse_u64("PARKWISE_OVERPASS_TIMEOUT_SECS", "25")?;
    let search_radius_m = parse_u32("PARKWISE_SEARCH_RADIUS_M", "3000")?;
    if search_radius_m == 0 {
        return Err(invalid(
            "PARKWISE_SEARCH_RADIUS_M",
            "radius must be greater than zero".to_string(),
        ));
    }
    let catalog_path = PathBuf::from(or_default(
        "PARKWISE_CATALOG_PATH",
        "./config/catalog.yaml",
    ));

    let predictor_url = or_default("PARKWISE_PREDICTOR_URL", "http://127.0.0.1:5000/predict");
    let predictor_timeout_secs = parse_u64("PARKWISE_PREDICTOR_TIMEOUT_SECS", "3")?;

    let user_agent = or_default("PARKWISE_USER_AGENT", "parkwise/0.1 (spot-finder)");
    let rate_limit_per_minute = parse_usize("PARKWISE_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        geo_source,
        overpass_url,
        overpass_timeout_secs,
        search_radius_m,
        catalog_path,
        predictor_url,
        predictor_timeout_secs,
        user_agent,
        rate_limit_per_minute,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PARKWISE_ENV".to_string(),
            reason: format!("expected development, test or production; got '{other}'"),
        }),
    }
}

fn parse_geo_source(s: &str) -> Result<GeoSourceMode, ConfigError> {
    match s {
        "live" => Ok(GeoSourceMode::Live),
        "catalog" => Ok(GeoSourceMode::Catalog),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PARKWISE_GEO_SOURCE".to_string(),
            reason: format!("expected live or catalog; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
