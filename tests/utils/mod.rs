#![allow(unused)] // Different tests use a different subset of functions

mod input_stream;

pub use self::input_stream::{InputStream, TextStream};

pub const HALLO: &str = "hallo philipp wie geht es dir";
pub const HALLO_ENCODED: &str = "nbqwy3dpebygq2lmnfyhaidxnfssaz3fnb2cazltebsgs4q";

pub fn random_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|_| rand::random()).collect()
}

/// Splits `data` at each of the given offsets, which must be ascending.
pub fn split_at_offsets<'a>(data: &'a [u8], offsets: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for &offset in offsets {
        chunks.push(&data[start..offset]);
        start = offset;
    }
    chunks.push(&data[start..]);
    chunks
}

pub fn decode_pieces(pieces: impl IntoIterator<Item = base32_stream::Result<Vec<u8>>>) -> Vec<u8> {
    pieces
        .into_iter()
        .map(Result::unwrap)
        .flatten()
        .collect()
}

#[cfg(feature = "stream")]
pub mod stream {
    use futures::{executor::block_on_stream, pin_mut, stream::Stream};

    pub fn to_vec<T>(stream: impl Stream<Item = T>) -> Vec<T> {
        pin_mut!(stream);
        block_on_stream(stream).collect()
    }

    pub fn encode(input: impl Stream<Item = impl AsRef<[u8]>>) -> Vec<String> {
        to_vec(base32_stream::encode_stream(input))
    }

    pub fn decode(input: impl Stream<Item = impl AsRef<str>>) -> Vec<u8> {
        super::decode_pieces(to_vec(base32_stream::decode_stream(input)))
    }
}
