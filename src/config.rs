//! Startup settings of the HTTP service.

use std::net::SocketAddr;

/// Address the service binds to when none is given.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    /// Prefix under which every route is mounted, e.g. `/chatgpt/dns-actions`.
    pub base_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            base_path: None,
        }
    }
}

impl ServerConfig {
    pub fn new(listen: SocketAddr, base_path: Option<String>) -> Self {
        Self { listen, base_path }
    }

    /// Returns the base path with exactly one leading and no trailing slash,
    /// or `None` when routes live at the root.
    pub fn normalized_base_path(&self) -> Option<String> {
        let raw = self.base_path.as_deref()?;
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}
