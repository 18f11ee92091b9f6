// src/config.rs
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORE_DIR: &str = "trips";
const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub store_dir: PathBuf,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    /// When false, the simulated gateway is used and no network calls happen.
    pub use_real_provider: bool,
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to the same
    /// defaults the service has always shipped with.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let store_dir = env::var("TRIP_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_DIR));

        let llm = LlmConfig {
            use_real_provider: env::var("REAL_LLM").is_ok(),
            api_url: env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        };

        Self { port, store_dir, llm }
    }
}
