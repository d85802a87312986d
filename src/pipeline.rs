//! High-level pipeline: list → fetch → map → write.
//!
//! [`expand`] is the whole run: it lists every monster from the configured
//! [`MonsterSource`], fetches and maps each one in list order, and writes the
//! aggregate document once all of them succeeded.
//!
//! # Error Handling
//! Fail-fast and all-or-nothing. The first fetch or mapping error stops the
//! run and nothing is written; the previous output file, if any, is left as it
//! was.
//!
//! # Pacing
//! Detail requests are issued one at a time, each after passing a
//! [`RateGate`]. [`expand`] uses an [`IntervalGate`] built from
//! `request_interval_ms`; [`collect_monsters`] takes any gate.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::ExpandConfig;
use crate::contract::{Monster, MonsterSource};
use crate::error::ExpandError;
use crate::output::{prepare_output_dir, write_monsters};
use crate::preprocess::map_monster;
use crate::rate_limit::{IntervalGate, RateGate};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandReport {
    pub count: usize,
    pub output_path: PathBuf,
}

/// Lists, fetches and maps every monster, preserving list order.
pub async fn collect_monsters<S, G>(source: &S, gate: &mut G) -> Result<Vec<Monster>, ExpandError>
where
    S: MonsterSource + ?Sized,
    G: RateGate + ?Sized,
{
    info!("[EXPAND] Fetching monster list");
    let references = source.list_monsters().await.map_err(|e| {
        error!(error = %e, "[EXPAND][ERROR] Listing monsters failed");
        e
    })?;

    let total = references.len();
    let mut monsters = Vec::with_capacity(total);

    for (i, reference) in references.iter().enumerate() {
        gate.ready().await;

        let record = source.fetch_monster(reference).await.map_err(|e| {
            error!(monster = %reference.name, error = %e, "[EXPAND][ERROR] Fetch failed, aborting run");
            e
        })?;
        let monster = map_monster(&record).map_err(|e| {
            error!(monster = %reference.name, error = %e, "[EXPAND][ERROR] Mapping failed, aborting run");
            e
        })?;

        monsters.push(monster);
        info!(index = i + 1, total, name = %reference.name, "[EXPAND] Fetched monster");
    }

    Ok(monsters)
}

/// Runs the full pipeline against `source` and writes to `config.output_path`.
pub async fn expand<S>(config: &ExpandConfig, source: &S) -> Result<ExpandReport, ExpandError>
where
    S: MonsterSource + ?Sized,
{
    info!(
        output_path = %config.output_path.display(),
        request_interval_ms = config.request_interval_ms,
        "[EXPAND] Starting monster expansion"
    );

    // Fail before spending a full fetch on an output location we cannot use.
    prepare_output_dir(&config.output_path)?;

    let mut gate = IntervalGate::new(config.request_interval());
    let monsters = collect_monsters(source, &mut gate).await?;
    let count = write_monsters(&config.output_path, &monsters)?;

    info!(count, "[EXPAND] Monster expansion complete");
    Ok(ExpandReport {
        count,
        output_path: config.output_path.clone(),
    })
}
