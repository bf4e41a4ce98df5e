use proptest::{prelude::any, proptest};

use compressobj::{DeflateCompressor, ZlibCompressor};

mod utils;

proptest! {
    #[test]
    fn zlib_compress(ref input in any::<utils::InputStream>()) {
        let mut compressor = ZlibCompressor::new();
        for chunk in input.chunks() {
            compressor.compress(chunk).unwrap();
        }
        let data = compressor.flush().unwrap();
        assert_eq!(utils::zlib_decompress(&data), input.bytes());
    }

    #[test]
    fn deflate_compress(ref input in any::<utils::InputStream>()) {
        let mut compressor = DeflateCompressor::new();
        for chunk in input.chunks() {
            compressor.compress(chunk).unwrap();
        }
        let data = compressor.flush().unwrap();
        assert_eq!(utils::deflate_decompress(&data), input.bytes());
    }

    #[test]
    fn zlib_snapshots_grow(ref input in any::<utils::InputStream>()) {
        let mut compressor = ZlibCompressor::new();
        let mut previous = compressor.compress(&[]).unwrap();
        for chunk in input.chunks() {
            let snapshot = compressor.compress(chunk).unwrap();
            assert!(snapshot.starts_with(&previous));
            previous = snapshot;
        }
        let data = compressor.flush().unwrap();
        assert!(data.starts_with(&previous));
    }
}
