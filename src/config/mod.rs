//! Site configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Site-wide settings for the services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shop name used in email sign-offs
    pub site_name: String,

    /// From-address for outbound notifications
    pub from_address: String,

    /// Upper bound on how long a confirmation send may run before it is
    /// abandoned (the order has already succeeded by then)
    pub notify_timeout_ms: u64,

    /// Items per page for sections without their own `paginate_by`
    pub default_page_size: usize,

    /// Page size for the admin order listing
    pub orders_page_size: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "SilverPress".to_string(),
            from_address: "noreply@silverpress.art".to_string(),
            notify_timeout_ms: 5_000,
            default_page_size: 10,
            orders_page_size: 25,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn notify_timeout(&self) -> Duration {
        Duration::from_millis(self.notify_timeout_ms)
    }
}
