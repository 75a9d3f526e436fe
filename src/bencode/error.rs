use thiserror::Error;

/// Errors raised while decoding bencode.
///
/// Offsets are byte positions into the input, useful when a `.fastresume`
/// file is truncated or corrupt and the user wants to inspect it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    #[error("invalid integer at byte {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: String },

    #[error("invalid string length at byte {0}")]
    InvalidStringLength(usize),

    #[error("unexpected byte {byte:#04x} at byte {offset}")]
    UnexpectedByte { offset: usize, byte: u8 },

    #[error("dictionary key at byte {0} is not a byte string")]
    NonStringKey(usize),

    #[error("trailing data after value at byte {0}")]
    TrailingData(usize),

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}
