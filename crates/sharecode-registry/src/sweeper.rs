//! Background sweep of expired share codes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::registry::ShareCodeRegistry;

/// Periodically purges expired entries and applies removals queued by
/// expired lookups.
///
/// The sweep is housekeeping only: lookups never return expired entries
/// regardless of whether the sweeper is running. What the sweeper bounds
/// is memory, to roughly the entries minted within one sweep interval
/// plus the TTL.
#[derive(Debug)]
pub struct RegistrySweeper {
    /// The registry being swept.
    registry: Arc<ShareCodeRegistry>,
    /// Time between sweep passes.
    interval: Duration,
}

impl RegistrySweeper {
    /// Creates a sweeper over `registry` that wakes every `interval`.
    pub fn new(registry: Arc<ShareCodeRegistry>, interval: Duration) -> Self {
        Self { registry, interval }
    }

    /// Runs until the cancel signal is received.
    ///
    /// `removals` is the queue handed out by [`ShareCodeRegistry::new`];
    /// codes arriving on it were found expired by a lookup and are removed
    /// here, outside the caller's request. Remaining queued removals are
    /// drained before the task exits.
    pub async fn run(
        self,
        mut cancel: watch::Receiver<bool>,
        mut removals: mpsc::UnboundedReceiver<String>,
    ) {
        info!(interval_seconds = self.interval.as_secs(), "Share code sweeper started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                Some(code) = removals.recv() => {
                    self.registry.remove(&code);
                }
                _ = ticker.tick() => {
                    let purged = self.registry.purge_expired();
                    if purged > 0 {
                        debug!(purged, "Purged expired share codes");
                    }
                }
            }
        }

        while let Ok(code) = removals.try_recv() {
            self.registry.remove(&code);
        }

        info!("Share code sweeper stopped");
    }
}
