//! Property tests for the persistence pipeline

use std::num::NonZeroUsize;
use std::sync::Arc;

use quickcheck_macros::quickcheck;
use sss_dist::artifact::{FileStore, read_artifact};
use sss_dist::pipeline::{PipelineConfig, persist_shares};
use sss_dist::splitter::split;
use tempfile::tempdir;

use crate::support::{Params, Secret};

/// A successful run leaves exactly one readable artifact per index
#[quickcheck]
fn prop_every_index_gets_one_artifact(secret: Secret, params: Params, capacity: u8) -> bool {
    let Ok(shares) = split(&secret.0, &params.config()) else {
        return false;
    };
    let expected = shares.clone();

    let dir = tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("secret")));
    let capacity = NonZeroUsize::new(usize::from(capacity % 8) + 1).unwrap();
    let config = PipelineConfig::default().with_capacity(capacity);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let Ok(report) = runtime.block_on(persist_shares(shares, store, &config)) else {
        return false;
    };

    let artifact_count = std::fs::read_dir(dir.path()).unwrap().count();
    report.written.len() == expected.len()
        && artifact_count == expected.len()
        && report
            .written
            .iter()
            .zip(&expected)
            .enumerate()
            .all(|(i, (path, share))| {
                *path == dir.path().join(format!("secret.{i}.gz"))
                    && read_artifact(path).ok().as_ref() == Some(share)
            })
}
