//! Expiry reaper: periodic removal of revocation entries whose tokens are
//! already dead on their own.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::errors::DomainError;
use crate::repositories::RevocationRepository;

/// Sweeps the revocation store on a fixed interval
pub struct RevocationReaper<R: RevocationRepository + 'static> {
    repository: Arc<R>,
    interval: Duration,
}

impl<R: RevocationRepository> RevocationReaper<R> {
    pub fn new(repository: Arc<R>, interval: Duration) -> Self {
        Self { repository, interval }
    }

    /// Run a single sweep as if the clock read `now`
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<ReapResult, DomainError> {
        let purged = self.repository.purge_expired(now).await?;
        let remaining = self.repository.count().await.ok();

        info!(purged, remaining = ?remaining, "Revocation sweep completed");

        Ok(ReapResult {
            purged,
            remaining,
            ran_at: now,
        })
    }

    /// Spawn the sweep loop. The first sweep runs immediately.
    ///
    /// A failed sweep is logged and retried on the next tick. Abort the
    /// returned handle on shutdown.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                interval_seconds = self.interval.as_secs(),
                "Revocation reaper started"
            );

            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_once(Utc::now()).await {
                    error!(error = %e, "Revocation sweep failed");
                }
            }
        })
    }
}

/// Outcome of one sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReapResult {
    /// Entries deleted
    pub purged: usize,
    /// Entries left afterwards, if the count could be read
    pub remaining: Option<usize>,
    pub ran_at: DateTime<Utc>,
}
