//! Deployment configuration read from the environment.

use std::path::PathBuf;

use actix_cors::Cors;

/// The only origin allowed to call the API in production deployments.
const PRODUCTION_ORIGIN: &str = "https://sheetport.app";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CACHE_DIR: &str = "data/problems";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
    /// Any origin; development default.
    Any,
    /// A single fixed origin.
    Fixed(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub allowed_origin: AllowedOrigin,
    pub cache_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `PORT`, `APP_ENV` and `CACHE_DIR`. Unset or unparseable values
    /// fall back to development defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origin = origin_for(std::env::var("APP_ENV").ok().as_deref());
        let cache_dir = Some(
            std::env::var("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR)),
        );

        Self {
            bind_addr: format!("0.0.0.0:{port}"),
            allowed_origin,
            cache_dir,
        }
    }

    pub fn cors(&self) -> Cors {
        match &self.allowed_origin {
            AllowedOrigin::Any => Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header(),
            AllowedOrigin::Fixed(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
        }
    }
}

fn origin_for(app_env: Option<&str>) -> AllowedOrigin {
    match app_env {
        Some("production") => AllowedOrigin::Fixed(PRODUCTION_ORIGIN.to_string()),
        _ => AllowedOrigin::Any,
    }
}
