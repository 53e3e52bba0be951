use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use secrecy::Secret;
use serde::Deserialize;

use crate::gemini::GeminiConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    pub gemini_api_key: Secret<String>,
    #[serde(default = "default_model")]
    pub gemini_model: String,
    #[serde(default = "default_api_base")]
    pub gemini_api_base: String,
}

fn default_port() -> u16 {
    8000
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

impl AppConfig {
    /// Reads `.env`, an optional `configuration.toml`, then the process environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            api_base: self.gemini_api_base.clone(),
        }
    }
}
