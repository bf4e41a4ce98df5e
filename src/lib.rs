//! Streaming compression objects built on [`flate2`].
//!
//! A compressor object accepts input incrementally through
//! [`compress`](ZlibCompressor::compress) and is finished exactly once with
//! [`flush`](ZlibCompressor::flush), which emits any data still buffered by
//! the engine plus the stream trailer. Every call returns the entire
//! accumulated output so far as an immutable [`Bytes`](bytes::Bytes)
//! snapshot, so the bytes returned by `flush` are always an extension of the
//! bytes returned by any earlier call.
//!
//! ```
//! use compressobj::ZlibCompressor;
//!
//! # fn main() -> compressobj::Result<()> {
//! let mut compressor = ZlibCompressor::new();
//! compressor.compress(b"hello, ")?;
//! compressor.compress(b"world")?;
//! let stream = compressor.flush()?;
//! // A standard zlib decoder decodes `stream` back to b"hello, world".
//! # assert_eq!(stream[0], 0x78);
//! # Ok(())
//! # }
//! ```
//!
//! [`ZlibCompressor`] produces a zlib stream (2-byte header, DEFLATE blocks,
//! Adler-32 trailer); [`DeflateCompressor`] produces a raw DEFLATE stream
//! with no framing. Decompression is out of scope for this crate, any
//! standard zlib/DEFLATE decoder can consume the output.

#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations
)]

mod codec;
mod deflate;
mod error;
mod generic;
mod util;
mod zlib;

pub use self::{
    deflate::DeflateCompressor,
    error::{Error, Result},
    zlib::ZlibCompressor,
};

/// Level of compression data should be compressed with.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub enum Level {
    /// Fastest quality of compression, usually produces bigger size.
    Fastest,
    /// Best quality of compression, usually produces the smallest size.
    Best,
    /// Default quality of compression defined by the selected compression
    /// algorithm.
    Default,
    /// Precise quality based on the underlying compression algorithm's
    /// qualities. Qualities are implicitly clamped to the algorithm's
    /// maximum.
    Precise(u32),
}

impl Level {
    fn into_flate2(self) -> flate2::Compression {
        match self {
            Self::Fastest => flate2::Compression::fast(),
            Self::Best => flate2::Compression::best(),
            Self::Precise(quality) => flate2::Compression::new(std::cmp::min(quality, 10)),
            Self::Default => flate2::Compression::default(),
        }
    }
}
