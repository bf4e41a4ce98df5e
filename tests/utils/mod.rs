#![allow(unused)] // Different tests use a different subset of functions

use std::io::Read;

use flate2::bufread::{DeflateDecoder, ZlibDecoder};
use proptest_derive::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct InputStream(Vec<Vec<u8>>);

impl InputStream {
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.0
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.iter().flatten().cloned().collect()
    }
}

impl From<Vec<Vec<u8>>> for InputStream {
    fn from(input: Vec<Vec<u8>>) -> InputStream {
        InputStream(input)
    }
}

pub fn zlib_decompress(input: &[u8]) -> Vec<u8> {
    let mut output = vec![];
    ZlibDecoder::new(input).read_to_end(&mut output).unwrap();
    output
}

pub fn deflate_decompress(input: &[u8]) -> Vec<u8> {
    let mut output = vec![];
    DeflateDecoder::new(input).read_to_end(&mut output).unwrap();
    output
}
