//! Outbound request pacing.
//!
//! The pipeline asks a [`RateGate`] for permission before each detail request.
//! Keeping the pacing here, rather than sleeping inside the fetch loop, means
//! fetching and mapping do not know how requests are spaced.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

#[async_trait]
pub trait RateGate: Send {
    /// Resolves once the next request may be issued.
    async fn ready(&mut self);
}

/// Enforces a minimum interval between successive passes. The first pass is
/// immediate.
#[derive(Debug)]
pub struct IntervalGate {
    interval: Duration,
    last_pass: Option<Instant>,
}

impl IntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl RateGate for IntervalGate {
    async fn ready(&mut self) {
        if let Some(last) = self.last_pass {
            let next = last + self.interval;
            let now = Instant::now();
            if next > now {
                debug!(wait_ms = (next - now).as_millis() as u64, "[RATE] Waiting before next request");
                sleep_until(next).await;
            }
        }
        self.last_pass = Some(Instant::now());
    }
}
