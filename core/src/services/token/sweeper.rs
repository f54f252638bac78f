//! Background pruning of expired revocation records
//!
//! Revocation records only need to live as long as the tokens they
//! invalidate; once a token would have expired on its own, the record is
//! dead weight. This module prunes those records periodically to keep the
//! blacklist bounded.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::RevocationStore;

/// Configuration for the revocation sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic sweeping
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

/// Service for pruning expired revocation records
///
/// Pruning is delete-where-expired, which is safe to run concurrently with
/// inserts of new, unexpired records; active records always survive a
/// sweep cycle.
pub struct RevocationSweeper<S: RevocationStore + 'static> {
    store: Arc<S>,
    config: SweeperConfig,
}

impl<S: RevocationStore> RevocationSweeper<S> {
    /// Create a new revocation sweeper
    pub fn new(store: Arc<S>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep cycle
    ///
    /// Store failures are recorded in the result rather than aborting the
    /// cycle; the sweeper is maintenance, not request handling.
    pub async fn run_sweep(&self) -> Result<SweepResult, DomainError> {
        if !self.config.enabled {
            return Ok(SweepResult::default());
        }

        info!("Starting revocation sweep cycle");

        let mut result = SweepResult::default();

        match self.store.prune_expired().await {
            Ok(count) => {
                result.records_pruned = count;
                info!("Pruned {} expired revocation records", count);
            }
            Err(e) => {
                error!("Failed to prune revocation records: {}", e);
                result.errors.push(format!("Prune error: {}", e));
            }
        }

        match self.store.count().await {
            Ok(remaining) => {
                info!(
                    "Revocation sweep completed - Pruned: {}, Remaining: {}",
                    result.records_pruned, remaining
                );
            }
            Err(e) => {
                warn!("Could not count remaining revocation records: {}", e);
            }
        }

        Ok(result)
    }

    /// Start the sweeper as a background task
    ///
    /// This spawns a tokio task that runs a sweep at regular intervals.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Revocation sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Revocation sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_sweep().await {
                    Ok(result) => {
                        if !result.is_success() {
                            warn!("Sweep completed with errors: {:?}", result.errors);
                        }
                    }
                    Err(e) => {
                        error!("Revocation sweep cycle failed: {}", e);
                    }
                }
            }
        });
    }
}

/// Result of a sweep cycle
#[derive(Debug, Default)]
pub struct SweepResult {
    /// Number of expired revocation records deleted
    pub records_pruned: usize,
    /// Any errors encountered during the sweep
    pub errors: Vec<String>,
}

impl SweepResult {
    /// Check if the sweep finished without errors
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
