//! Property tests for split/combine workflows

use quickcheck_macros::quickcheck;
use sss_dist::error::SplitError;
use sss_dist::splitter::{combine, split};

use crate::support::{Params, Secret, shuffled};

/// Splitting yields one share per index, in order
#[quickcheck]
fn prop_split_indices_are_dense(secret: Secret, params: Params) -> bool {
    let Ok(shares) = split(&secret.0, &params.config()) else {
        return false;
    };
    shares.len() == usize::from(params.num_shares)
        && shares
            .iter()
            .enumerate()
            .all(|(i, share)| usize::from(*share.index()) == i)
}

/// Any random selection of threshold shares recovers the secret
#[quickcheck]
fn prop_random_share_selection_works(secret: Secret, params: Params, selection_seed: u64) -> bool {
    let Ok(shares) = split(&secret.0, &params.config()) else {
        return false;
    };

    let selected: Vec<_> = shuffled(shares.len(), selection_seed)
        .into_iter()
        .take(usize::from(params.threshold))
        .map(|i| shares[i].clone())
        .collect();

    let Ok(recovered) = combine(&selected) else {
        return false;
    };
    *recovered == secret.0
}

/// One share fewer than the threshold is rejected
#[quickcheck]
fn prop_insufficient_shares_fail(secret: Secret, params: Params) -> bool {
    if params.threshold < 2 {
        return true;
    }
    let Ok(shares) = split(&secret.0, &params.config()) else {
        return false;
    };

    let insufficient = &shares[..usize::from(params.threshold - 1)];
    matches!(
        combine(insufficient),
        Err(SplitError::InsufficientShares { .. })
    )
}
