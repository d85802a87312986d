//! Entry point glue for the `srd-monsters` binary.
//!
//! The binary takes no arguments: `main` hands [`run`] the default
//! [`ExpandConfig`]. Tests call [`run`] directly with a config that points at
//! a stub server and a temporary output path.
use anyhow::Result;

use crate::config::ExpandConfig;
use crate::download::SrdClient;
use crate::error::ExpandError;
use crate::pipeline::{expand, ExpandReport};

/// Builds the HTTP client, runs the pipeline and prints the user-facing summary.
pub async fn run(config: ExpandConfig) -> Result<ExpandReport> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");
    config.trace_loaded();

    let result = match fetch_and_write(&config).await {
        Ok(report) => {
            println!(
                "Saved {} monsters to {}",
                report.count,
                report.output_path.display()
            );
            tracing::info!(count = report.count, "Expansion complete");
            Ok(report)
        }
        Err(e) => {
            tracing::error!(error = %e, "Expansion failed");
            Err(anyhow::Error::new(e))
        }
    };

    let exit_span = tracing::info_span!("exit");
    exit_span.in_scope(|| {
        tracing::info!(success = result.is_ok(), "run finished");
    });

    result
}

async fn fetch_and_write(config: &ExpandConfig) -> Result<ExpandReport, ExpandError> {
    let client = SrdClient::from_config(config)?;
    println!("Fetching monster list...");
    expand(config, &client).await
}
