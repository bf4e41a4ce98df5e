use bytes::Bytes;

use crate::{codec::ZlibEncoder, error::Result, generic::Encoder, Level};

/// A streaming zlib compressor.
///
/// Produces a zlib stream: a 2-byte header, DEFLATE compressed blocks and a
/// 4-byte Adler-32 trailer written by [`flush`](Self::flush). The output is
/// standard zlib framing, decodable by any zlib/DEFLATE decompressor.
///
/// The compressor owns its engine state and output buffer exclusively; both
/// are released when the value is dropped. Methods take `&mut self`, so a
/// compressor shared between threads needs external synchronization, and two
/// compressors never affect each other.
#[derive(Debug)]
pub struct ZlibCompressor {
    inner: Encoder<ZlibEncoder>,
}

impl ZlibCompressor {
    /// Creates a compressor producing a zlib stream at the default
    /// compression level.
    pub fn new() -> Self {
        Self::with_quality(Level::Default)
    }

    /// Creates a compressor producing a zlib stream at the given compression
    /// level.
    pub fn with_quality(level: Level) -> Self {
        Self {
            inner: Encoder::new(ZlibEncoder::new(level.into_flate2())),
        }
    }

    /// Feeds `chunk` to the engine and returns a snapshot of the entire
    /// compressed stream produced so far.
    ///
    /// `chunk` may be empty; an empty chunk is a no-op. The engine is free
    /// to buffer input internally, so the snapshot is not required to grow
    /// on every call. The returned bytes are cumulative, not a delta: each
    /// snapshot is a prefix of every later one, and a caller only
    /// interested in fresh output must strip the previously seen prefix
    /// itself.
    ///
    /// # Errors
    ///
    /// [`Error::Finished`](crate::Error::Finished) if [`flush`](Self::flush)
    /// already completed, [`Error::Allocation`](crate::Error::Allocation) if
    /// the output buffer could not grow, or
    /// [`Error::Compression`](crate::Error::Compression) if the engine
    /// reports a fault.
    pub fn compress(&mut self, chunk: &[u8]) -> Result<Bytes> {
        self.inner.compress(chunk)
    }

    /// Finishes the stream and returns the complete compressed output.
    ///
    /// Instructs the engine to emit everything it still buffers plus the
    /// Adler-32 trailer, then returns the whole accumulated stream. Flushing
    /// a stream that never saw input yields a valid empty-payload zlib
    /// stream.
    ///
    /// After a successful flush the compressor is finished: further calls to
    /// [`compress`](Self::compress) or `flush` fail with
    /// [`Error::Finished`](crate::Error::Finished).
    ///
    /// # Errors
    ///
    /// Same classes as [`compress`](Self::compress).
    pub fn flush(&mut self) -> Result<Bytes> {
        self.inner.finish()
    }

    /// Whether the stream has been finished by a successful
    /// [`flush`](Self::flush).
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self::new()
    }
}
