//! Types which operate over [`Iterator`]s of chunks, both an encoder and a decoder.
//!
//! The iterator is treated as a single byte-stream (or text-stream) to be encoded/decoded, each
//! item is a chunk of data from this stream. There is no one-to-one relationship between input
//! chunks and output items: every output item is one complete group, 8 symbols or 5 bytes, except
//! for the final item which carries the partial group left at the end of the input.
//!
//! Nothing is read from the underlying iterator until the adaptor itself is advanced.

mod decoder;
mod encoder;

pub use self::{decoder::Base32Decoder, encoder::Base32Encoder};

#[derive(Clone, Copy, Debug)]
enum State {
    Reading,
    Writing,
    Flushing,
    Done,
}
