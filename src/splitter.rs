//! Chunked threshold splitting on top of blahaj
//!
//! The secret is cut into `chunk_size`-byte chunks and every chunk is dealt
//! independently by a [`Sharks`] dealer. Share `i` collects the `i`-th dealt
//! share of each chunk, so its evaluation point is the same across chunks and
//! any `threshold` shares recover every chunk.

use std::collections::HashSet;

use blahaj::Sharks;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::{Share, ShareIndex, SplitConfig};
use crate::error::SplitError;

/// Split a secret into `config.share_count()` shares
///
/// Shares are returned in index order, `0..share_count`.
///
/// # Errors
/// Returns [`SplitError::EmptySecret`] if there is nothing to split
pub fn split(secret: &[u8], config: &SplitConfig) -> Result<Vec<Share>, SplitError> {
    if secret.is_empty() {
        return Err(SplitError::EmptySecret);
    }

    let sharks = Sharks(*config.threshold());
    let num_shares = usize::from(*config.share_count());
    let chunk_size = *config.chunk_size();
    let chunk_count = secret.len().div_ceil(chunk_size);

    let mut payloads: Vec<Vec<Vec<u8>>> = (0..num_shares)
        .map(|_| Vec::with_capacity(chunk_count))
        .collect();

    for chunk in secret.chunks(chunk_size) {
        let dealer = sharks.dealer(chunk);
        for (payload, share) in payloads.iter_mut().zip(dealer.take(num_shares)) {
            payload.push(Vec::from(&share));
        }
    }

    debug!(
        secret_len = secret.len(),
        chunk_count,
        shares = num_shares,
        threshold = *config.threshold(),
        "split secret"
    );

    payloads
        .into_iter()
        .enumerate()
        .map(|(idx, chunks)| -> Result<Share, SplitError> {
            // Safe: idx < num_shares (which is u8), so idx always fits in u8
            let idx_u8 =
                u8::try_from(idx).unwrap_or_else(|_| unreachable!("idx < num_shares fits in u8"));
            Ok(Share::new(
                ShareIndex::new(idx_u8)?,
                config.threshold(),
                config.share_count(),
                config.chunk_size(),
                chunks,
            ))
        })
        .collect()
}

/// Recombine shares into the original secret
///
/// The threshold, share count and chunk layout are taken from the shares
/// themselves and must agree across the whole set.
///
/// # Errors
/// Returns an error if no shares are given, shares disagree on their
/// metadata, an index repeats, or fewer than `threshold` shares are present
pub fn combine(shares: &[Share]) -> Result<Zeroizing<Vec<u8>>, SplitError> {
    let Some(first) = shares.first() else {
        return Err(SplitError::NoShares);
    };

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        check_consistent(first, share)?;
        if !seen.insert(share.index()) {
            return Err(SplitError::DuplicateShare(*share.index()));
        }
    }

    let threshold = *first.threshold();
    if shares.len() < usize::from(threshold) {
        return Err(SplitError::InsufficientShares {
            threshold,
            provided: shares.len(),
        });
    }

    let sharks = Sharks(threshold);
    // Each chunk payload is its evaluation point followed by the secret bytes.
    let secret_len = first
        .chunks()
        .iter()
        .map(|chunk| chunk.len().saturating_sub(1))
        .sum();
    let mut secret = Zeroizing::new(Vec::with_capacity(secret_len));

    for chunk in 0..first.chunks().len() {
        let parts = shares
            .iter()
            .map(|share| {
                blahaj::Share::try_from(share.chunks()[chunk].as_slice()).map_err(|e| {
                    SplitError::Recovery {
                        chunk,
                        reason: format!("share #{}: {e}", *share.index()),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let recovered = Zeroizing::new(sharks.recover(&parts).map_err(|e| {
            SplitError::Recovery {
                chunk,
                reason: format!("{e:?}"),
            }
        })?);
        secret.extend_from_slice(&recovered);
    }

    Ok(secret)
}

fn check_consistent(reference: &Share, share: &Share) -> Result<(), SplitError> {
    let mismatch = |reason: String| SplitError::InconsistentShare {
        index: *share.index(),
        reference: *reference.index(),
        reason,
    };

    if share.threshold() != reference.threshold() {
        return Err(mismatch(format!(
            "threshold {} vs {}",
            *share.threshold(),
            *reference.threshold()
        )));
    }
    if share.share_count() != reference.share_count() {
        return Err(mismatch(format!(
            "share count {} vs {}",
            *share.share_count(),
            *reference.share_count()
        )));
    }
    if share.chunk_size() != reference.chunk_size() {
        return Err(mismatch(format!(
            "chunk size {} vs {}",
            *share.chunk_size(),
            *reference.chunk_size()
        )));
    }
    let lengths = |s: &Share| s.chunks().iter().map(Vec::len).collect::<Vec<_>>();
    if lengths(share) != lengths(reference) {
        return Err(mismatch("chunk layout differs".to_string()));
    }
    Ok(())
}
