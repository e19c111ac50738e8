//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Front controller settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to listen on (host:port).
    pub bind: String,
    /// Browser origins allowed by CORS.
    pub allowed_origins: Vec<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5080".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.bind.parse().ok()
    }
}
