use bytes::Bytes;

use crate::{
    codec::Encode,
    error::{Error, Result},
    util::PartialBuffer,
};

const OUTPUT_BUFFER_SIZE: usize = 8 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Streaming,
    Finished,
}

/// Drives a codec over an owned, append-only output buffer.
///
/// The codec state and the buffer live and die with this value; dropping it
/// releases both. The buffer only ever grows, so the snapshot returned from
/// one call is always a prefix of the snapshot returned from the next.
#[derive(Debug)]
pub(crate) struct Encoder<E> {
    encoder: E,
    output: Vec<u8>,
    state: State,
}

impl<E: Encode> Encoder<E> {
    pub(crate) fn new(encoder: E) -> Self {
        Self {
            encoder,
            output: Vec::new(),
            state: State::Streaming,
        }
    }

    pub(crate) fn compress(&mut self, chunk: &[u8]) -> Result<Bytes> {
        if self.state == State::Finished {
            return Err(Error::Finished);
        }

        let mut input = PartialBuffer::new(chunk);

        while !input.unwritten().is_empty() {
            let mut space = [0u8; OUTPUT_BUFFER_SIZE];
            let mut output = PartialBuffer::new(&mut space[..]);

            self.encoder.encode(&mut input, &mut output)?;
            self.push(output.written())?;
        }

        Ok(self.snapshot())
    }

    pub(crate) fn finish(&mut self) -> Result<Bytes> {
        if self.state == State::Finished {
            return Err(Error::Finished);
        }

        loop {
            let mut space = [0u8; OUTPUT_BUFFER_SIZE];
            let mut output = PartialBuffer::new(&mut space[..]);

            let done = self.encoder.finish(&mut output)?;
            self.push(output.written())?;

            if done {
                break;
            }
        }

        self.state = State::Finished;
        Ok(self.snapshot())
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    fn push(&mut self, bytes: &[u8]) -> Result<()> {
        self.output
            .try_reserve(bytes.len())
            .map_err(|_| Error::Allocation)?;
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    // The whole accumulated stream, not the delta since the last call.
    fn snapshot(&self) -> Bytes {
        Bytes::copy_from_slice(&self.output)
    }
}
