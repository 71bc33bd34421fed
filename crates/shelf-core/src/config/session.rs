//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Session token settings.
///
/// Sessions use a fixed, non-sliding expiry: `resolve` never extends
/// the lifetime of a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token lifetime in hours from issuance.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl SessionConfig {
    /// Token lifetime as a [`std::time::Duration`].
    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_hours * 3600)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    24
}
