use core::fmt::{self, Display};
use thiserror::Error;

/// The encoding a sequence was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Wtf8,
    Utf16,
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Wtf8 => write!(f, "WTF-8"),
            Self::Utf16 => write!(f, "UTF-16"),
        }
    }
}

/// An input sequence that is not well-formed in the expected encoding.
///
/// Positions are counted in input code units (bytes for UTF-8 and WTF-8,
/// 16-bit units for UTF-16).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSequence {
    /// `len` units starting at `valid_up_to` can never begin a well-formed
    /// sequence, whatever follows them.
    #[error("invalid {encoding} sequence of {len} units from index {valid_up_to}")]
    Malformed {
        encoding: Encoding,
        valid_up_to: usize,
        len: u8,
    },
    /// The input ended in the middle of the sequence starting at
    /// `valid_up_to`.
    #[error("incomplete {encoding} sequence from index {valid_up_to}")]
    Incomplete {
        encoding: Encoding,
        valid_up_to: usize,
    },
}

impl InvalidSequence {
    /// Index of the first unit that is not part of a well-formed prefix.
    #[inline]
    pub fn valid_up_to(&self) -> usize {
        match *self {
            Self::Malformed { valid_up_to, .. } | Self::Incomplete { valid_up_to, .. } => {
                valid_up_to
            }
        }
    }

    /// Length of the offending sequence, or `None` if the input ended before
    /// the sequence was complete.
    #[inline]
    pub fn error_len(&self) -> Option<usize> {
        match *self {
            Self::Malformed { len, .. } => Some(len as usize),
            Self::Incomplete { .. } => None,
        }
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        match *self {
            Self::Malformed { encoding, .. } | Self::Incomplete { encoding, .. } => encoding,
        }
    }
}
