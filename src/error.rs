use thiserror::Error;

/// Failures of the rolling hasher. None of them change the hasher state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("window of {window_size} bytes is longer than the {len} byte buffer")]
    WindowTooLong { window_size: usize, len: usize },
    #[error("cannot roll {step} bytes, only {remaining} left before the end of the buffer")]
    IllegalRoll { step: usize, remaining: usize },
    #[error("illegal stride: stride must be at least 1")]
    IllegalStride,
    #[error("this hasher is not writable")]
    NotWritable,
}

pub type Result<T> = std::result::Result<T, Error>;
