//! Streaming lowercase base32 codec over buffers, iterators and asynchronous streams.
//!
//! Data is encoded with the alphabet `abcdefghijklmnopqrstuvwxyz234567`, most significant bit
//! first, 5 bytes to 8 symbols. No padding characters are written or expected: a trailing partial
//! group is zero padded to the next symbol boundary and those bits are dropped again on decode.
//!
//! ```
//! let encoded = base32_stream::encode("hallo philipp wie geht es dir");
//! assert_eq!(encoded, "nbqwy3dpebygq2lmnfyhaidxnfssaz3fnb2cazltebsgs4q");
//!
//! let decoded = base32_stream::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"hallo philipp wie geht es dir");
//! ```
//!
//! # Streaming
//!
//! The streaming adaptors never hold more than one group of input beyond the chunk currently being
//! processed, and yield each group as soon as it is complete. Chunk boundaries are invisible in the
//! output: splitting the same input differently produces the same concatenated result.
//!
//!  Input | Encoder | Decoder
//! -------|---------|--------
//!  [`Iterator`] | [`iter::Base32Encoder`], [`encode_iter`] | [`iter::Base32Decoder`], [`decode_iter`]
#![cfg_attr(
    feature = "stream",
    doc = " [`Stream`](futures_core::stream::Stream) | [`stream::Base32Encoder`], [`encode_stream`] | [`stream::Base32Decoder`], [`decode_stream`]"
)]
#![cfg_attr(
    not(feature = "stream"),
    doc = " `Stream` (`stream` feature, *inactive*) | `stream::Base32Encoder` | `stream::Base32Decoder`"
)]
//!
//! # Malformed input
//!
//! Decoders treat every character outside the alphabet, uppercase letters included, as a separator
//! between runs of symbols and skip it. Once a run shorter than a full group has been read, the rest
//! of that fragment is discarded and the short run is completed from the next fragment.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations
)]

mod codec;
mod error;
pub mod group;
pub mod iter;
#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
pub mod stream;
mod util;

pub use crate::error::{Error, Result};

/// Encodes a complete buffer.
pub fn encode(data: impl AsRef<[u8]>) -> String {
    encode_iter(Some(data)).collect()
}

/// Decodes a complete string.
pub fn decode(text: impl AsRef<str>) -> Result<Vec<u8>> {
    decode_iter(Some(text)).try_fold(Vec::new(), |mut data, piece| {
        data.extend_from_slice(&piece?);
        Ok(data)
    })
}

/// Lazily encodes a sequence of byte chunks, see [`iter::Base32Encoder`].
pub fn encode_iter<I>(chunks: I) -> iter::Base32Encoder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    iter::Base32Encoder::new(chunks.into_iter())
}

/// Lazily decodes a sequence of text fragments, see [`iter::Base32Decoder`].
pub fn decode_iter<I>(fragments: I) -> iter::Base32Decoder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    iter::Base32Decoder::new(fragments.into_iter())
}

/// Encodes an asynchronous sequence of byte chunks, see [`stream::Base32Encoder`].
#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
pub fn encode_stream<S>(chunks: S) -> stream::Base32Encoder<S>
where
    S: futures_core::stream::Stream,
    S::Item: AsRef<[u8]>,
{
    stream::Base32Encoder::new(chunks)
}

/// Decodes an asynchronous sequence of text fragments, see [`stream::Base32Decoder`].
#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
pub fn decode_stream<S>(fragments: S) -> stream::Base32Decoder<S>
where
    S: futures_core::stream::Stream,
    S::Item: AsRef<str>,
{
    stream::Base32Decoder::new(fragments)
}
