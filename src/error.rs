use std::io;

/// Errors produced while turning symbols back into integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A byte outside the base32 alphabet reached the symbol parser.
    #[error("invalid base32 symbol {byte:#04x} at offset {offset}")]
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Offset of the byte within the group being parsed.
        offset: usize,
    },

    /// More symbols were given than fit in a 64-bit integer.
    #[error("symbol group of length {len} exceeds {max} symbols")]
    GroupTooLong {
        /// Number of symbols given.
        len: usize,
        /// Largest accepted group length.
        max: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
