//! Share-code registry configuration.

use serde::{Deserialize, Serialize};

/// Share-code registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Lifetime of a minted share code in seconds.
    #[serde(default = "default_expire_seconds")]
    pub expire_seconds: u64,
    /// Interval between background sweeps of expired codes, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            expire_seconds: default_expire_seconds(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_expire_seconds() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    10
}
