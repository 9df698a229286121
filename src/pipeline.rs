//! Bounded, fail-fast persistence of a batch of shares
//!
//! Shares are dispatched in index order. Each dispatch either takes one of
//! `capacity` semaphore permits and starts a blocking write task, or, once a
//! task has failed, is skipped without starting. The first failure is kept
//! and cancels the batch; later failures are logged and dropped. The call
//! returns only after every started task has finished.

use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::artifact::{self, ArtifactStore};
use crate::compress::Level;
use crate::domain::{Share, ShareIndex};
use crate::error::{Error, Result};

/// Tuning for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    capacity: NonZeroUsize,
    level: Level,
}

impl PipelineConfig {
    #[must_use]
    pub fn new(capacity: NonZeroUsize, level: Level) -> Self {
        Self { capacity, level }
    }

    /// Maximum number of shares written at the same time
    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn with_capacity(self, capacity: NonZeroUsize) -> Self {
        Self { capacity, ..self }
    }
}

impl Default for PipelineConfig {
    /// One slot per available CPU, default compression
    fn default() -> Self {
        Self {
            capacity: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            level: Level::default(),
        }
    }
}

/// Outcome of a batch in which every share was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Artifact paths in index order
    pub written: Vec<PathBuf>,
}

/// First-error slot and the cancellation it triggers
struct Completion {
    first_error: Mutex<Option<Error>>,
    cancel: CancellationToken,
}

impl Completion {
    fn new() -> Self {
        Self {
            first_error: Mutex::new(None),
            cancel: CancellationToken::new(),
        }
    }

    /// Records `err` if nothing was recorded yet, then cancels the batch
    fn fail(&self, err: Error) {
        let mut slot = self.first_error.lock();
        if slot.is_none() {
            warn!(error = %err, "share failed, cancelling remaining shares");
            *slot = Some(err);
            self.cancel.cancel();
        } else {
            debug!(error = %err, "discarding failure after the first");
        }
    }

    fn take_error(&self) -> Option<Error> {
        self.first_error.lock().take()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| (*msg).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "task panicked".to_string())
}

/// Writes every share to `store` with at most `config.capacity()` writers at once
///
/// # Errors
/// Returns the first error any share task reported. Artifacts completed
/// before that failure are left in place.
pub async fn persist_shares<S: ArtifactStore>(
    shares: Vec<Share>,
    store: Arc<S>,
    config: &PipelineConfig,
) -> Result<BatchReport> {
    let total = shares.len();
    // More permits than shares never helps, and tokio caps the pool size.
    let capacity = config
        .capacity()
        .get()
        .min(total.max(1))
        .min(Semaphore::MAX_PERMITS);
    let semaphore = Arc::new(Semaphore::new(capacity));
    let completion = Arc::new(Completion::new());
    let mut tasks = JoinSet::new();
    let mut started = 0usize;
    let mut skipped = 0usize;

    debug!(
        shares = total,
        capacity,
        "dispatching shares"
    );

    for share in shares {
        let index = share.index();

        // Cancellation wins when a permit frees up at the same moment.
        let permit = tokio::select! {
            biased;
            () = completion.cancel.cancelled() => None,
            permit = Arc::clone(&semaphore).acquire_owned() => permit.ok(),
        };
        let Some(permit) = permit else {
            debug!(%index, "skipping share");
            skipped += 1;
            continue;
        };

        started += 1;
        let store = Arc::clone(&store);
        let completion = Arc::clone(&completion);
        let level = config.level();
        tasks.spawn_blocking(move || -> Option<(ShareIndex, PathBuf)> {
            let _permit = permit;
            // A panic is recorded while the permit is still held, like any other failure.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                artifact::write_artifact(&*store, &share, level, &completion.cancel)
            }))
            .unwrap_or_else(|payload| Err(Error::TaskPanicked(panic_message(&*payload))));
            match outcome {
                Ok(path) => Some((index, path)),
                Err(err) => {
                    completion.fail(err);
                    None
                }
            }
        });
    }

    let mut written = Vec::with_capacity(started);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some(entry)) => written.push(entry),
            Ok(None) => {}
            Err(err) => completion.fail(Error::TaskPanicked(err.to_string())),
        }
    }
    debug_assert_eq!(started + skipped, total);

    if let Some(err) = completion.take_error() {
        info!(
            written = written.len(),
            started,
            skipped,
            "batch failed"
        );
        return Err(err);
    }

    written.sort_by_key(|(index, _)| *index);
    info!(written = written.len(), "batch complete");
    Ok(BatchReport {
        written: written.into_iter().map(|(_, path)| path).collect(),
    })
}
