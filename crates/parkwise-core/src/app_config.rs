use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where raw points of interest come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoSourceMode {
    /// Query the Overpass API for every request.
    Live,
    /// Serve the YAML catalog loaded at startup.
    Catalog,
}

impl std::fmt::Display for GeoSourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoSourceMode::Live => write!(f, "live"),
            GeoSourceMode::Catalog => write!(f, "catalog"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub geo_source: GeoSourceMode,
    pub overpass_url: String,
    pub overpass_timeout_secs: u64,
    /// Search radius around the user, in meters.
    pub search_radius_m: u32,
    pub catalog_path: PathBuf,
    pub predictor_url: String,
    pub predictor_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_per_minute: usize,
}
