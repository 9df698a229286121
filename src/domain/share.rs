//! The share value handed from the splitter to the persistence pipeline

use zeroize::Zeroize;

use super::{ChunkSize, ShareCount, ShareIndex, Threshold};

/// One share of a split secret
///
/// `chunks[j]` is this share's blahaj share (evaluation point followed by the
/// evaluated bytes) of the `j`-th `chunk_size`-byte chunk of the secret.
/// Shares are never mutated after creation and wipe their payload on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    threshold: Threshold,
    share_count: ShareCount,
    chunk_size: ChunkSize,
    chunks: Vec<Vec<u8>>,
}

impl Share {
    /// Assembles a share from its parts
    ///
    /// No consistency checks happen here; [`crate::codec::encode`] rejects
    /// shares whose metadata does not add up.
    #[must_use]
    pub fn new(
        index: ShareIndex,
        threshold: Threshold,
        share_count: ShareCount,
        chunk_size: ChunkSize,
        chunks: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            index,
            threshold,
            share_count,
            chunk_size,
            chunks,
        }
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    #[must_use]
    pub fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    /// Per-chunk share payloads, in secret order
    #[must_use]
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }
}

impl Drop for Share {
    fn drop(&mut self) {
        self.chunks.zeroize();
    }
}

// Payload bytes stay out of logs and panic messages.
impl std::fmt::Debug for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Share")
            .field("index", &*self.index)
            .field("threshold", &*self.threshold)
            .field("share_count", &*self.share_count)
            .field("chunk_size", &*self.chunk_size)
            .field("chunks", &self.chunks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_payload() {
        let share = Share::new(
            ShareIndex::new(2).unwrap(),
            Threshold::new(2).unwrap(),
            ShareCount::new(3).unwrap(),
            ChunkSize::new(4).unwrap(),
            vec![vec![3, 0xAB, 0xCD]],
        );
        let rendered = format!("{share:?}");
        assert!(rendered.contains("index: 2"));
        assert!(rendered.contains("chunks: 1"));
        assert!(!rendered.contains("171"));
    }
}
