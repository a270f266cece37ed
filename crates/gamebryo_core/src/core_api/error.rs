use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Io,
    FormatUnrecognized,
    UnexpectedEndOfInput,
    InputTooLarge,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unrecognized save game signature")]
    FormatUnrecognized,

    #[error("unexpected end of file at {offset} (read of {len} bytes)")]
    UnexpectedEndOfInput { offset: u64, len: u64 },

    #[error("input is {len} bytes, larger than the configured limit of {limit} bytes")]
    InputTooLarge { len: u64, limit: u64 },
}

impl CoreError {
    pub fn code(&self) -> CoreErrorCode {
        match self {
            Self::Io(_) => CoreErrorCode::Io,
            Self::FormatUnrecognized => CoreErrorCode::FormatUnrecognized,
            Self::UnexpectedEndOfInput { .. } => CoreErrorCode::UnexpectedEndOfInput,
            Self::InputTooLarge { .. } => CoreErrorCode::InputTooLarge,
        }
    }
}
