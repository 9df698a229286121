//! Streaming gzip compression for share artifacts
//!
//! Artifacts are plain gzip members (RFC 1952) named `*.gz`. They are not
//! xz streams, so readers expecting `.xz` share files cannot open them.

use std::io::{self, Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// File extension of every compressed artifact
pub const EXTENSION: &str = "gz";

/// Gzip compression level (0..=9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(u32);

impl Level {
    /// Maximum compression level
    pub const MAX: u32 = 9;

    /// Creates a new compression level
    ///
    /// # Errors
    /// Returns [`Error::Argument`] if the level is above 9
    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::Argument(format!(
                "compression level must be between 0 and {} (got {value})",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(6)
    }
}

impl std::ops::Deref for Level {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Gzip stream over a byte sink
///
/// `write` may consume only part of its input; callers retry with the rest.
/// [`Compressor::finish`] writes the gzip trailer and hands the sink back.
/// A compressor dropped without `finish` still tries to write the trailer,
/// ignoring errors, before the sink itself is dropped.
pub struct Compressor<W: Write> {
    inner: GzEncoder<W>,
}

impl<W: Write> Compressor<W> {
    pub fn new(sink: W, level: Level) -> Self {
        Self {
            inner: GzEncoder::new(sink, Compression::new(*level)),
        }
    }

    /// Bytes already handed to the sink, without finalizing
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Flushes pending compressed data and the gzip trailer, returning the sink
    ///
    /// # Errors
    /// Returns any error the sink raises while the stream is completed
    pub fn finish(self) -> io::Result<W> {
        self.inner.finish()
    }
}

impl<W: Write> Write for Compressor<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Decompresses a complete gzip stream
///
/// # Errors
/// Returns an error if the stream is truncated or not gzip
pub fn decompress<R: Read>(reader: R) -> io::Result<Zeroizing<Vec<u8>>> {
    let mut decoder = GzDecoder::new(reader);
    let mut out = Zeroizing::new(Vec::new());
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
