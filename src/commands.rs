use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use zeroize::Zeroizing;

use crate::artifact::FileStore;
use crate::domain::SplitConfig;
use crate::error::Error;
use crate::pipeline::{self, BatchReport, PipelineConfig};
use crate::splitter;

/// Everything one `distribute` run needs
#[derive(Debug, Clone)]
pub struct DistributeOptions {
    /// Secret file; artifacts are written next to it
    pub filename: PathBuf,
    pub split: SplitConfig,
    pub pipeline: PipelineConfig,
}

/// Split the file at `options.filename` and write one compressed artifact per share
///
/// The secret is dropped (and wiped) as soon as the shares exist.
///
/// # Errors
/// Returns an error if the file cannot be read, the secret cannot be split,
/// or any share fails to persist. Failures from the library carry an
/// [`Error`] that can be recovered with `downcast_ref`.
pub async fn distribute(options: &DistributeOptions) -> Result<BatchReport> {
    let secret = Zeroizing::new(
        tokio::fs::read(&options.filename)
            .await
            .with_context(|| format!("Failed to read {}", options.filename.display()))?,
    );

    let shares = splitter::split(&secret, &options.split).map_err(Error::from)?;
    drop(secret);

    info!(
        file = %options.filename.display(),
        shares = shares.len(),
        threshold = *options.split.threshold(),
        "distributing shares"
    );

    let store = Arc::new(FileStore::new(&options.filename));
    let report = pipeline::persist_shares(shares, store, &options.pipeline).await?;
    Ok(report)
}
