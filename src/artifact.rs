//! Writing one share to one compressed artifact
//!
//! A share is encoded, pushed through a [`Compressor`] into a sink obtained
//! from an [`ArtifactStore`], finalized, then closed. Every index maps to its
//! own destination, so no two writers ever share a sink.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::codec;
use crate::compress::{self, Compressor, EXTENSION, Level};
use crate::domain::{Share, ShareIndex};
use crate::error::{Error, Result};

/// Destination for share artifacts
pub trait ArtifactStore: Send + Sync + 'static {
    type Sink: Write + Send;

    /// Where the artifact for `index` lives
    fn path(&self, index: ShareIndex) -> PathBuf;

    /// Opens the artifact for `index`, replacing anything already there
    fn create(&self, index: ShareIndex) -> io::Result<Self::Sink>;

    /// Closes a sink whose compressed stream has been finished
    fn close(&self, mut sink: Self::Sink) -> io::Result<()> {
        sink.flush()
    }
}

/// Artifacts as files next to the secret: `<base>.<index>.gz`
#[derive(Debug, Clone)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ArtifactStore for FileStore {
    type Sink = File;

    fn path(&self, index: ShareIndex) -> PathBuf {
        artifact_path(&self.base, index)
    }

    // No existence check: a previous artifact at this path is truncated.
    fn create(&self, index: ShareIndex) -> io::Result<File> {
        File::create(self.path(index))
    }

    fn close(&self, sink: File) -> io::Result<()> {
        sink.sync_all()
    }
}

/// Artifact name for share `index` of the secret at `base`
///
/// # Examples
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use sss_dist::artifact::artifact_path;
/// use sss_dist::domain::ShareIndex;
///
/// let path = artifact_path(Path::new("keys/wallet.dat"), ShareIndex::new(3).unwrap());
/// assert_eq!(path, PathBuf::from("keys/wallet.dat.3.gz"));
/// ```
#[must_use]
pub fn artifact_path(base: &Path, index: ShareIndex) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{index}.{EXTENSION}"));
    PathBuf::from(name)
}

/// How a cancellable write loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Complete,
    Cancelled,
}

/// Writes all of `data`, retrying short writes with the remainder
///
/// `cancel` is checked before each write call, never during one, so a chunk
/// already handed to `sink` is always fully processed first.
///
/// # Errors
/// Returns the sink's error, or [`io::ErrorKind::WriteZero`] if the sink
/// stops accepting bytes
pub fn write_all_cancellable<W: Write>(
    sink: &mut W,
    mut data: &[u8],
    cancel: &CancellationToken,
) -> io::Result<Progress> {
    while !data.is_empty() {
        if cancel.is_cancelled() {
            return Ok(Progress::Cancelled);
        }
        match sink.write(data) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "compressor accepted no bytes",
                ));
            }
            Ok(n) => {
                trace!(written = n, remaining = data.len() - n, "partial write");
                data = &data[n..];
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(Progress::Complete)
}

/// Encodes `share` and writes it to its artifact in `store`
///
/// The compressor is finished before the sink is closed. On any early return
/// both are dropped in that same order.
///
/// # Errors
/// Returns [`Error::Serialization`] if the share cannot be encoded,
/// [`Error::Io`] if opening, writing, finishing or closing fails, and
/// [`Error::Cancelled`] if `cancel` fires between writes
pub fn write_artifact<S: ArtifactStore>(
    store: &S,
    share: &Share,
    level: Level,
    cancel: &CancellationToken,
) -> Result<PathBuf> {
    let index = share.index();
    let encoded = codec::encode(share)?;

    let path = store.path(index);
    let io_error = |source| Error::Io {
        index: *index,
        path: path.clone(),
        source,
    };

    let sink = store.create(index).map_err(io_error)?;
    let mut compressor = Compressor::new(sink, level);

    if write_all_cancellable(&mut compressor, &encoded, cancel).map_err(io_error)?
        == Progress::Cancelled
    {
        debug!(%index, "write cancelled");
        return Err(Error::Cancelled { index: *index });
    }

    let sink = compressor.finish().map_err(io_error)?;
    store.close(sink).map_err(io_error)?;

    debug!(%index, path = %path.display(), bytes = encoded.len(), "artifact written");
    Ok(path)
}

/// Decompresses and decodes one artifact
///
/// # Errors
/// Returns [`Error::Read`] if the file cannot be read or is not a complete
/// gzip stream, and [`Error::Corrupt`] if its contents are not a valid share
pub fn read_artifact(path: &Path) -> Result<Share> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let encoded = compress::decompress(io::BufReader::new(file)).map_err(read_error)?;
    codec::decode(&encoded)
}
