use anyhow::{anyhow, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_DATA_DIR: &str = "./data";

/// Runtime configuration read from the environment (and `.env`, if present)
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub admin_password: String,
    pub frontend_url: String,
    pub is_production: bool,
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let admin_password = env::var("ADMIN_PASSWORD")
            .map_err(|_| anyhow!("ADMIN_PASSWORD must be set"))?;
        if admin_password.is_empty() {
            return Err(anyhow!("ADMIN_PASSWORD must not be empty"));
        }

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());

        let is_production = env::var("APP_ENVIRONMENT")
            .map(|value| value == "production")
            .unwrap_or(false);

        let data_dir = env::var("SHIFT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("Invalid BIND_ADDR: {}", e))?;

        Ok(Self {
            admin_password,
            frontend_url,
            is_production,
            data_dir,
            bind_addr,
        })
    }

    /// Origins allowed to call the API with credentials
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![
            "http://localhost:8080".to_string(),
            "http://127.0.0.1:8080".to_string(),
        ];
        if !self.frontend_url.is_empty() && !origins.contains(&self.frontend_url) {
            origins.push(self.frontend_url.clone());
        }
        origins
    }

    /// Config for tests and local tooling
    pub fn for_tests(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            admin_password: "test-password".to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            is_production: false,
            data_dir: data_dir.into(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_deduplicates_frontend_url() {
        let config = AppConfig::for_tests("/tmp/unused");
        assert_eq!(config.allowed_origins().len(), 2);

        let config = AppConfig {
            frontend_url: "https://shifts.example.com".to_string(),
            ..AppConfig::for_tests("/tmp/unused")
        };
        let origins = config.allowed_origins();
        assert_eq!(origins.len(), 3);
        assert!(origins.contains(&"https://shifts.example.com".to_string()));
    }
}
