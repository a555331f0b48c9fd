use crate::error::AppError;
use config::{Config as Cfg, Environment, File, Map};
use serde::Deserialize;
use std::env;

/// Port used when neither `PORT` nor `APP__PORT` is set.
pub const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(env::vars().collect())
    }

    /// Build the common configuration from an explicit variable map.
    ///
    /// A bare `PORT` overrides `APP__PORT`, since hosting platforms inject it directly.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, AppError> {
        let port = vars.get("PORT").cloned();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .source(Some(vars)),
            )
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
