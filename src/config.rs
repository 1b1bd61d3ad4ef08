use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    #[allow(dead_code)]
    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // Worker API
    pub worker_api_url: String,

    // Static assets
    pub public_dir: String,

    // Absolute base for link previews (og:image must not be relative)
    pub public_base_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // Worker API
        let worker_api_url =
            env::var("WORKER_API_URL").context("WORKER_API_URL must be set")?;

        // Static assets
        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        // Link previews
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Ok(Settings {
            env,
            server_addr,
            worker_api_url,
            public_dir,
            public_base_url,
        })
    }
}
