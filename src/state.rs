use crate::config::AppConfig;
use crate::llm::{ChatClient, GatewayClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub llm: Arc<dyn ChatClient>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let llm = Arc::new(GatewayClient::new(&config.gateway)?) as Arc<dyn ChatClient>;
        Ok(Self { config, llm })
    }

    pub fn from_parts(config: Arc<AppConfig>, llm: Arc<dyn ChatClient>) -> Self {
        Self { config, llm }
    }

    #[cfg(test)]
    pub fn with_client(client: FakeChatClient) -> Self {
        let config = AppConfig::from_lookup(|key| {
            (key == crate::config::API_KEY_VAR).then(|| "test-key".to_string())
        })
        .expect("test config");
        Self::from_parts(Arc::new(config), Arc::new(client))
    }
}

#[cfg(test)]
pub use fake::FakeChatClient;
