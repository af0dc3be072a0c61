//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Public URL prefix that vacation image names are appended to
    #[serde(default = "default_base_image_url")]
    pub base_image_url: String,

    /// Origins accepted by CORS in production
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 4000,
            base_image_url: default_base_image_url(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or(lookup, "SERVER_PORT", defaults.port)?,
            base_image_url: lookup("BASE_IMAGE_URL").unwrap_or(defaults.base_image_url),
            allowed_origins,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the public URL of a stored vacation image
    pub fn image_url(&self, image_name: &str) -> String {
        format!("{}{}", self.base_image_url, image_name)
    }
}

fn default_base_image_url() -> String {
    String::from("http://localhost:4000/api/vacations/images/")
}
