use std::time::Duration;

use serde::Deserialize;

pub const API_KEY_VAR: &str = "LOVABLE_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOVABLE_API_KEY is not configured")]
    MissingApiKey,
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gateway: GatewayConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; fails fast when the gateway key is absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let gateway = GatewayConfig {
            api_key,
            base_url: lookup("AI_GATEWAY_URL")
                .unwrap_or_else(|| "https://ai.gateway.lovable.dev/v1".into()),
            model: lookup("AI_MODEL").unwrap_or_else(|| "google/gemini-2.5-flash".into()),
            timeout_secs: parse_or(&lookup, "AI_GATEWAY_TIMEOUT_SECS", 60)?,
            max_retries: parse_or(&lookup, "AI_GATEWAY_MAX_RETRIES", 1)?,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "APP_PORT", 8080)?,
            gateway,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
