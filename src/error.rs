use std::io;

/// Alias for `std::result::Result<T, compressobj::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a compressor object.
///
/// All errors are returned synchronously from the call that caused them and
/// none are retried internally. After a failure the object is left in
/// whatever state the engine left it; there is no rollback.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Growing the output buffer failed because no memory could be obtained.
    #[error("failed to allocate space for compressed output")]
    Allocation,

    /// The compression engine reported a fault, such as corrupted internal
    /// state or invalid parameters.
    #[error("compression engine error")]
    Compression(#[from] io::Error),

    /// The stream was already finished by a successful flush; no further
    /// input or flushes are accepted.
    #[error("compressor has already been finished")]
    Finished,
}
