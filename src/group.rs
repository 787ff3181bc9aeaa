//! Bit-group primitives shared by every encoder and decoder in this crate.
//!
//! A group is 40 bits wide: 5 bytes on the binary side, 8 symbols on the text side. These functions
//! move a group (or the partial group at the end of a stream) between the two representations via
//! a plain `u64`.

use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// The symbol alphabet, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Number of bytes in a complete group.
pub const BYTES_PER_GROUP: usize = 5;

/// Number of symbols in a complete group.
pub const SYMBOLS_PER_GROUP: usize = 8;

/// Width in bits of a complete group.
pub const GROUP_BITS: u32 = 40;

/// Longest symbol run [`symbols_to_integer`] accepts, 60 bits.
pub const MAX_SYMBOLS: usize = 12;

const SYMBOL_BITS: u32 = 5;
const SYMBOL_MASK: u128 = 0x1f;

/// Returned by [`Symbols`] for an index outside the alphabet, which only a logic error can produce.
const PADDING: char = '=';

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Alphabet index of `byte`, if it is a symbol.
pub fn symbol_index(byte: u8) -> Option<u8> {
    match DECODE_TABLE[usize::from(byte)] {
        INVALID => None,
        index => Some(index),
    }
}

/// Whether `byte` belongs to the alphabet.
pub fn is_symbol(byte: u8) -> bool {
    symbol_index(byte).is_some()
}

/// Interprets `bytes` as a big-endian unsigned integer.
///
/// An empty buffer is `0`. Only the last 8 bytes contribute to the result.
pub fn bytes_to_integer(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |value, &byte| value << 8 | u64::from(byte))
}

/// Renders `value` as `ceil(bit_width / 8)` big-endian bytes, zero padded on the left.
pub fn integer_to_bytes(value: u64, bit_width: u32) -> Vec<u8> {
    let len = bit_width.div_ceil(8);
    (0..len)
        .rev()
        .map(|i| value.checked_shr(i * 8).unwrap_or(0) as u8)
        .collect()
}

/// Lazily renders the low `bit_width` bits of `value` as symbols, most significant first.
///
/// Produces `ceil(bit_width / 5)` symbols. When `bit_width` is not a multiple of 5 the final symbol
/// is zero-extended on the low end.
pub fn integer_to_symbols(value: u64, bit_width: u32) -> Symbols {
    let remaining = bit_width.div_ceil(SYMBOL_BITS);
    let pad = remaining * SYMBOL_BITS - bit_width;
    Symbols {
        value: u128::from(value) << pad,
        remaining,
    }
}

/// Parses a run of symbols into an integer `5 * symbols.len()` bits wide.
///
/// ```
/// use base32_stream::group::symbols_to_integer;
///
/// assert_eq!(symbols_to_integer("ab").unwrap(), 1);
/// assert!(symbols_to_integer("a1").is_err());
/// ```
pub fn symbols_to_integer(symbols: impl AsRef<[u8]>) -> Result<u64> {
    let symbols = symbols.as_ref();
    if symbols.len() > MAX_SYMBOLS {
        return Err(Error::GroupTooLong {
            len: symbols.len(),
            max: MAX_SYMBOLS,
        });
    }

    symbols
        .iter()
        .enumerate()
        .try_fold(0, |value, (offset, &byte)| {
            let index = symbol_index(byte).ok_or(Error::InvalidSymbol { byte, offset })?;
            Ok(value << SYMBOL_BITS | u64::from(index))
        })
}

/// Iterator over the symbols of an integer, created by [`integer_to_symbols`].
#[derive(Debug, Clone)]
pub struct Symbols {
    value: u128,
    remaining: u32,
}

impl Iterator for Symbols {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = self
            .value
            .checked_shr(self.remaining * SYMBOL_BITS)
            .unwrap_or(0)
            & SYMBOL_MASK;

        match ALPHABET.get(index as usize) {
            Some(&symbol) => Some(char::from(symbol)),
            None => {
                debug_assert!(false, "symbol index {} out of range", index);
                Some(PADDING)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Symbols {}

impl FusedIterator for Symbols {}
