use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://www.dnd5eapi.co";
pub const DEFAULT_LIST_PATH: &str = "/api/monsters";
pub const DEFAULT_OUTPUT_PATH: &str = "../assets/data/monsters_srd.json";
pub const DEFAULT_REQUEST_INTERVAL_MS: u64 = 100;

/// Everything a run needs to know. `Default` is the production setup; tests
/// and embedders override individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Origin that list and detail paths are resolved against.
    pub base_url: String,
    pub list_path: String,
    pub output_path: PathBuf,
    /// Minimum spacing between detail requests.
    pub request_interval_ms: u64,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_path: DEFAULT_LIST_PATH.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_interval_ms: DEFAULT_REQUEST_INTERVAL_MS,
        }
    }
}

impl ExpandConfig {
    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    pub fn trace_loaded(&self) {
        info!(
            base_url = %self.base_url,
            list_path = %self.list_path,
            output_path = %self.output_path.display(),
            request_interval_ms = self.request_interval_ms,
            "Loaded ExpandConfig"
        );
        debug!(?self, "ExpandConfig loaded (full debug)");
    }
}
