use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Network settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server binds to
    pub host: IpAddr,
    /// Port the server listens on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8087,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Storage accounting settings (display-only, never enforced)
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Quota shown to each account
    pub quota_total_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            // 100 GB, matching the quota the UI advertises
            quota_total_bytes: 100 * 1024 * 1024 * 1024,
        }
    }
}

/// Settings for the derived views
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Maximum entries returned by the Recent view
    pub recent_limit: usize,
    /// Default page size for the activity feed
    pub activity_page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            recent_limit: 20,
            activity_page_size: 20,
        }
    }
}

/// Application configuration, read from environment variables with defaults
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub views: ViewConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("CUMULUS_HOST") {
            if let Ok(parsed) = host.parse() {
                config.server.host = parsed;
            }
        }
        if let Ok(port) = std::env::var("CUMULUS_PORT") {
            if let Ok(parsed) = port.parse() {
                config.server.port = parsed;
            }
        }
        if let Ok(quota) = std::env::var("CUMULUS_QUOTA_BYTES") {
            if let Ok(parsed) = quota.parse() {
                config.storage.quota_total_bytes = parsed;
            }
        }
        if let Ok(limit) = std::env::var("CUMULUS_RECENT_LIMIT") {
            if let Ok(parsed) = limit.parse() {
                config.views.recent_limit = parsed;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.views.recent_limit, 20);
        assert_eq!(config.storage.quota_total_bytes, 100 * 1024 * 1024 * 1024);
        assert_eq!(config.server.bind_addr().port(), 8087);
    }
}
