//! Domain types for Shamir Secret Sharing
//!
//! This module contains validated newtypes, configuration and the share value itself:
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=255)
//! - [`ShareIndex`] - Share identifier (0..=254)
//! - [`ShareCount`] - Total number of shares to create (1..=254)
//! - [`ChunkSize`] - Secret bytes dealt per independent split (>= 1)
//! - [`SplitConfig`] - Validated threshold, share count and chunk size
//! - [`Share`] - One dealt share, as handed to the persistence pipeline

mod chunk_size;
mod config;
mod share;
mod share_count;
mod share_index;
mod threshold;

pub use chunk_size::ChunkSize;
pub use config::SplitConfig;
pub use share::Share;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
