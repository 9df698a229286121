//! Property tests for share encoding and compression

use quickcheck_macros::quickcheck;
use sss_dist::codec::{decode, encode};
use sss_dist::compress::{Compressor, Level, decompress};
use sss_dist::splitter::split;
use std::io::Write;

use crate::support::{Params, Secret};

/// Encoding is a pure function of the share
#[quickcheck]
fn prop_encoding_is_deterministic(secret: Secret, params: Params) -> bool {
    let Ok(shares) = split(&secret.0, &params.config()) else {
        return false;
    };
    shares
        .iter()
        .all(|share| matches!((encode(share), encode(share)), (Ok(a), Ok(b)) if a == b))
}

/// Every share survives encode, compress, decompress, decode unchanged
#[quickcheck]
fn prop_artifact_bytes_round_trip(secret: Secret, params: Params, level: u8) -> bool {
    let Ok(shares) = split(&secret.0, &params.config()) else {
        return false;
    };
    let Ok(level) = Level::new(u32::from(level % 10)) else {
        return false;
    };

    shares.iter().all(|share| {
        let Ok(encoded) = encode(share) else {
            return false;
        };
        let mut compressor = Compressor::new(Vec::new(), level);
        if compressor.write_all(&encoded).is_err() {
            return false;
        }
        let Ok(compressed) = compressor.finish() else {
            return false;
        };
        let Ok(decompressed) = decompress(compressed.as_slice()) else {
            return false;
        };
        *decompressed == *encoded && decode(&decompressed).ok().as_ref() == Some(share)
    })
}
