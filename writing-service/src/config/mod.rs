use config::Map;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Model used when `ANTHROPIC_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Matches the provider SDK's own request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Browser origins allowed to call the API with credentials.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:5173",
    "https://ai-writing-assistant-frontend-one.vercel.app",
];

#[derive(Debug, Clone)]
pub struct WritingConfig {
    pub common: core_config::Config,
    pub anthropic: AnthropicSettings,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl WritingConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(env::vars().collect())
    }

    pub fn from_vars(vars: Map<String, String>) -> Result<Self, AppError> {
        let common_config = core_config::Config::from_vars(vars.clone())?;
        let is_prod = vars
            .get("ENVIRONMENT")
            .map(|e| e == "prod")
            .unwrap_or(false);
        let get = |key: &str, default: Option<&str>| get_env(&vars, key, default, is_prod);

        let api_key = get("ANTHROPIC_API_KEY", None)?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "ANTHROPIC_API_KEY is set but empty"
            )));
        }

        let default_timeout = DEFAULT_TIMEOUT_SECS.to_string();
        let default_origins = DEFAULT_ALLOWED_ORIGINS.join(",");

        Ok(WritingConfig {
            common: common_config,
            anthropic: AnthropicSettings {
                api_key: Secret::new(api_key),
                model: get("ANTHROPIC_MODEL", Some(DEFAULT_MODEL))?,
                base_url: get("ANTHROPIC_BASE_URL", Some(DEFAULT_ANTHROPIC_BASE_URL))?,
                timeout_secs: parse_timeout(&get(
                    "ANTHROPIC_TIMEOUT_SECS",
                    Some(default_timeout.as_str()),
                )?)?,
            },
            cors: CorsConfig {
                allowed_origins: get("CORS_ALLOWED_ORIGINS", Some(default_origins.as_str()))?
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "ANTHROPIC_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

fn get_env(
    vars: &Map<String, String>,
    key: &str,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match vars.get(key) {
        Some(val) => Ok(val.clone()),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn applies_defaults_outside_production() {
        let config = WritingConfig::from_vars(vars(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.common.port, core_config::DEFAULT_PORT);
        assert_eq!(config.anthropic.api_key.expose_secret(), "sk-test");
        assert_eq!(config.anthropic.model, DEFAULT_MODEL);
        assert_eq!(config.anthropic.base_url, DEFAULT_ANTHROPIC_BASE_URL);
        assert_eq!(config.anthropic.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.cors.allowed_origins, CorsConfig::default().allowed_origins);
    }

    #[test]
    fn api_key_is_always_required() {
        let err = WritingConfig::from_vars(vars(&[])).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));

        let err = WritingConfig::from_vars(vars(&[("ANTHROPIC_API_KEY", "  ")])).unwrap_err();
        assert!(err.to_string().contains("set but empty"));
    }

    #[test]
    fn production_requires_every_variable() {
        let err = WritingConfig::from_vars(vars(&[
            ("ENVIRONMENT", "prod"),
            ("ANTHROPIC_API_KEY", "sk-test"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn rejects_unusable_timeout() {
        for raw in ["0", "abc", "-5", ""] {
            let err = WritingConfig::from_vars(vars(&[
                ("ANTHROPIC_API_KEY", "sk-test"),
                ("ANTHROPIC_TIMEOUT_SECS", raw),
            ]))
            .unwrap_err();
            assert!(
                err.to_string().contains("ANTHROPIC_TIMEOUT_SECS"),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn reads_overrides() {
        let config = WritingConfig::from_vars(vars(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PORT", "8088"),
            ("ANTHROPIC_MODEL", "claude-test"),
            ("ANTHROPIC_TIMEOUT_SECS", "30"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ]))
        .unwrap();

        assert_eq!(config.common.port, 8088);
        assert_eq!(config.anthropic.model, "claude-test");
        assert_eq!(config.anthropic.timeout_secs, 30);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
