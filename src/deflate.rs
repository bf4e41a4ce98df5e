use bytes::Bytes;

use crate::{codec::DeflateEncoder, error::Result, generic::Encoder, Level};

/// A streaming raw DEFLATE compressor.
///
/// Identical in contract to [`ZlibCompressor`](crate::ZlibCompressor) except
/// that the output is a bare DEFLATE stream with no header or checksum
/// trailer around it.
#[derive(Debug)]
pub struct DeflateCompressor {
    inner: Encoder<DeflateEncoder>,
}

impl DeflateCompressor {
    /// Creates a compressor producing a raw DEFLATE stream at the default
    /// compression level.
    pub fn new() -> Self {
        Self::with_quality(Level::Default)
    }

    /// Creates a compressor producing a raw DEFLATE stream at the given
    /// compression level.
    pub fn with_quality(level: Level) -> Self {
        Self {
            inner: Encoder::new(DeflateEncoder::new(level.into_flate2())),
        }
    }

    /// Feeds `chunk` to the engine and returns a snapshot of the entire
    /// compressed stream produced so far. See
    /// [`ZlibCompressor::compress`](crate::ZlibCompressor::compress) for the
    /// snapshot and error semantics.
    pub fn compress(&mut self, chunk: &[u8]) -> Result<Bytes> {
        self.inner.compress(chunk)
    }

    /// Finishes the stream and returns the complete compressed output. See
    /// [`ZlibCompressor::flush`](crate::ZlibCompressor::flush).
    pub fn flush(&mut self) -> Result<Bytes> {
        self.inner.finish()
    }

    /// Whether the stream has been finished by a successful
    /// [`flush`](Self::flush).
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Default for DeflateCompressor {
    fn default() -> Self {
        Self::new()
    }
}
