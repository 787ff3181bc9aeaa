//! Types which operate over [`Stream`](futures_core::stream::Stream)s of chunks, both an encoder
//! and a decoder.
//!
//! These run the same group state machine as the [`iter`](crate::iter) adaptors. The only
//! difference is that the next chunk is awaited: the adaptor returns `Poll::Pending` exactly when
//! the underlying stream does, and holds no other resources, so dropping it is all the
//! cancellation there is.
//!
//! Every output item is one complete group, 8 symbols or 5 bytes, except for the final item which
//! carries the partial group left at the end of the input.

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
