//! Canonical byte encoding for shares
//!
//! Every artifact holds one share encoded as a JSON object whose fields appear
//! in a fixed order, so encoding the same share twice yields identical bytes
//! on any platform:
//!
//! ```text
//! {"version":1,"index":0,"threshold":3,"total":5,"chunk_size":4,
//!  "chunks":[[1,..],[1,..]],"checksum":1234567890}
//! ```
//!
//! - `index` is 0-based; chunk payloads carry blahaj's evaluation point first
//! - `checksum` is CRC-32/ISO-HDLC over all chunk payloads concatenated in order
//!
//! This format is the contract with whatever later recombines the shares, so
//! changes must bump [`FORMAT_VERSION`].
//!
//! # Examples
//!
//! ```rust
//! use sss_dist::codec::{decode, encode};
//! use sss_dist::domain::{ChunkSize, ShareCount, SplitConfig, Threshold};
//! use sss_dist::splitter::split;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig::new(Threshold::new(2)?, ShareCount::new(3)?, ChunkSize::new(4)?)?;
//! let shares = split(b"attack at dawn", &config)?;
//!
//! let bytes = encode(&shares[1])?;
//! assert_eq!(decode(&bytes)?, shares[1]);
//! # Ok(())
//! # }
//! ```

use crc::{CRC_32_ISO_HDLC, Crc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::{ChunkSize, Share, ShareCount, ShareIndex, Threshold};
use crate::error::{Error, Result};

/// CRC32 algorithm for share integrity checking
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Version written into every encoded share
pub const FORMAT_VERSION: u8 = 1;

#[derive(Serialize)]
struct EncodedShare<'a> {
    version: u8,
    index: u8,
    threshold: u8,
    total: u8,
    chunk_size: u64,
    chunks: &'a [Vec<u8>],
    checksum: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DecodedShare {
    version: u8,
    index: u8,
    threshold: u8,
    total: u8,
    chunk_size: u64,
    chunks: Vec<Vec<u8>>,
    checksum: u32,
}

fn checksum(chunks: &[Vec<u8>]) -> u32 {
    let mut digest = CRC32.digest();
    for chunk in chunks {
        digest.update(chunk);
    }
    digest.finalize()
}

/// Encodes a share into its canonical byte form
///
/// # Errors
/// Returns [`Error::Serialization`] if the share's index is not below its
/// share count, its threshold exceeds its share count, it has no chunks, or a
/// chunk is too short to hold an evaluation point and at least one byte
pub fn encode(share: &Share) -> Result<Zeroizing<Vec<u8>>> {
    let index = *share.index();
    let reject = |reason: String| Error::Serialization { index, reason };

    if index >= *share.share_count() {
        return Err(reject(format!(
            "index {index} is outside share count {}",
            *share.share_count()
        )));
    }
    if *share.threshold() > *share.share_count() {
        return Err(reject(format!(
            "threshold {} exceeds share count {}",
            *share.threshold(),
            *share.share_count()
        )));
    }
    if share.chunks().is_empty() {
        return Err(reject("share has no chunks".to_string()));
    }
    if let Some(pos) = share.chunks().iter().position(|chunk| chunk.len() < 2) {
        return Err(reject(format!("chunk {pos} is truncated")));
    }

    let record = EncodedShare {
        version: FORMAT_VERSION,
        index,
        threshold: *share.threshold(),
        total: *share.share_count(),
        chunk_size: *share.chunk_size() as u64,
        chunks: share.chunks(),
        checksum: checksum(share.chunks()),
    };

    serde_json::to_vec(&record)
        .map(Zeroizing::new)
        .map_err(|e| reject(e.to_string()))
}

/// Decodes bytes produced by [`encode`] back into a share
///
/// # Errors
/// Returns [`Error::Corrupt`] if the bytes are not a well-formed encoding,
/// carry an unknown version, hold out-of-range metadata or truncated chunks,
/// or fail the checksum
pub fn decode(bytes: &[u8]) -> Result<Share> {
    let record: DecodedShare =
        serde_json::from_slice(bytes).map_err(|e| Error::Corrupt(e.to_string()))?;

    if record.version != FORMAT_VERSION {
        return Err(Error::Corrupt(format!(
            "unsupported format version {} (expected {FORMAT_VERSION})",
            record.version
        )));
    }

    let corrupt = |e: crate::error::SplitError| Error::Corrupt(e.to_string());
    let index = ShareIndex::new(record.index).map_err(corrupt)?;
    let threshold = Threshold::new(record.threshold).map_err(corrupt)?;
    let share_count = ShareCount::new(record.total).map_err(corrupt)?;
    let chunk_size = usize::try_from(record.chunk_size)
        .map_err(|_| Error::Corrupt(format!("chunk size {} too large", record.chunk_size)))?;
    let chunk_size = ChunkSize::new(chunk_size).map_err(corrupt)?;

    if *index >= *share_count {
        return Err(Error::Corrupt(format!(
            "index {} is outside share count {}",
            *index, *share_count
        )));
    }
    if *threshold > *share_count {
        return Err(Error::Corrupt(format!(
            "threshold {} exceeds share count {}",
            *threshold, *share_count
        )));
    }
    if record.chunks.is_empty() {
        return Err(Error::Corrupt("share has no chunks".to_string()));
    }
    if let Some(pos) = record.chunks.iter().position(|chunk| chunk.len() < 2) {
        return Err(Error::Corrupt(format!("chunk {pos} is truncated")));
    }

    let actual = checksum(&record.chunks);
    if actual != record.checksum {
        return Err(Error::Corrupt(format!(
            "Checksum verification failed: expected 0x{:08x}, got 0x{actual:08x}",
            record.checksum
        )));
    }

    Ok(Share::new(
        index,
        threshold,
        share_count,
        chunk_size,
        record.chunks,
    ))
}
