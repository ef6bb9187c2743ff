use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::prize_wheel::PrizeCatalog;

/// Deployment settings for the spin widget. `Default` is the reference
/// deployment; any field missing from a serialized config falls back to it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub catalog: PrizeCatalog,
    pub auto_open_delay_ms: u32,
    pub spin_duration_ms: u32,
    pub reveal_delay_ms: u32,
    pub announce_delay_ms: u32,
    pub announcement_lifetime_ms: u32,
    pub submit_timeout_ms: u32,
    pub full_revolutions: u32,
    pub collection: String,
    pub local_cache_key: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            catalog: PrizeCatalog::default(),
            auto_open_delay_ms: AUTO_OPEN_DELAY_MS,
            spin_duration_ms: SPIN_DURATION_MS,
            reveal_delay_ms: REVEAL_DELAY_MS,
            announce_delay_ms: ANNOUNCE_DELAY_MS,
            announcement_lifetime_ms: ANNOUNCEMENT_LIFETIME_MS,
            submit_timeout_ms: SUBMIT_TIMEOUT_MS,
            full_revolutions: FULL_REVOLUTIONS,
            collection: SPIN_ENTRIES_COLLECTION.to_string(),
            local_cache_key: LOCAL_CACHE_KEY.to_string(),
        }
    }
}
