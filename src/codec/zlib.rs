use crate::{
    codec::{Encode, FlateEncoder},
    util::PartialBuffer,
};
use std::io::Result;

use flate2::Compression;

/// Encoder producing a zlib stream: 2-byte header, DEFLATE blocks and an
/// Adler-32 trailer on finish.
#[derive(Debug)]
pub(crate) struct ZlibEncoder {
    inner: FlateEncoder,
}

impl ZlibEncoder {
    pub(crate) fn new(level: Compression) -> Self {
        Self {
            inner: FlateEncoder::new(level, true),
        }
    }
}

impl Encode for ZlibEncoder {
    fn encode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> Result<()> {
        self.inner.encode(input, output)
    }

    fn finish(
        &mut self,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> Result<bool> {
        self.inner.finish(output)
    }
}
