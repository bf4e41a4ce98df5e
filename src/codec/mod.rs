use std::io::Result;

use crate::util::PartialBuffer;

mod deflate;
mod flate;
mod zlib;

pub(crate) use self::{deflate::DeflateEncoder, flate::FlateEncoder, zlib::ZlibEncoder};

/// Abstraction over a streaming compression engine.
pub(crate) trait Encode {
    /// Encode the unwritten part of `input` into the unwritten part of
    /// `output`, advancing both. The engine may buffer internally and is not
    /// required to produce output for every byte of input consumed.
    fn encode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> Result<()>;

    /// Finish the stream, writing any remaining buffered data plus the
    /// framing trailer into the unwritten part of `output`.
    ///
    /// Returns `true` iff the stream has been completely written out.
    fn finish(
        &mut self,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> Result<bool>;
}
