//! `load_config` module: reads an optional YAML file into an [`ExpandConfig`].
//!
//! The binary never calls this; it always runs with the defaults. The loader
//! exists for embedders and tests that need to point a run at another API
//! origin, output path or request interval. Any key left out of the file
//! keeps its default.
//!
//! ```yaml
//! base_url: "http://127.0.0.1:8080"
//! output_path: ./tmp/monsters.json
//! request_interval_ms: 0
//! ```
//!
//! All errors use `anyhow::Error` and name the file involved.
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::config::ExpandConfig;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExpandConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty file is a valid "all defaults" config; serde_yaml reads it as null.
    if config_content.trim().is_empty() {
        info!(config_path = ?path_ref, "Config file empty, using defaults");
        return Ok(ExpandConfig::default());
    }

    let config: ExpandConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    if let Err(e) = reqwest::Url::parse(&config.base_url) {
        error!(error = ?e, base_url = %config.base_url, "base_url is not a valid URL");
        anyhow::bail!("base_url {:?} is not a valid URL: {e}", config.base_url);
    }

    config.trace_loaded();
    Ok(config)
}
