//! Error type for the slice-facing entry points.

use core::fmt;

use crate::block::BLOCK_SIZE;
use crate::key::KEY_SIZE;

/// Which caller input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A plaintext or ciphertext block.
    Block,
    /// A cipher key.
    Key,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Block => f.write_str("block"),
            Input::Key => f.write_str("key"),
        }
    }
}

/// Errors surfaced by the cipher API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input was not exactly the size AES-128 requires.
    #[error("invalid {input} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The rejected input.
        input: Input,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn invalid_length(input: Input, actual: usize) -> Self {
        log::debug!("rejecting {actual}-byte {input}");
        let expected = match input {
            Input::Block => BLOCK_SIZE,
            Input::Key => KEY_SIZE,
        };
        Error::InvalidLength {
            input,
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
