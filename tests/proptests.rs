//! Property-based tests for sss-dist
//!
//! This test suite uses quickcheck to verify correctness across random inputs,
//! including random secrets, thresholds, chunk sizes and share selections.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/codec.rs"]
mod codec;

#[path = "proptests/pipeline.rs"]
mod pipeline;

#[path = "proptests/split_combine.rs"]
mod split_combine;

#[path = "proptests/support.rs"]
mod support;
