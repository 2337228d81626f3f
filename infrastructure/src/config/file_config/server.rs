//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.listen_addr.parse()
    }
}
