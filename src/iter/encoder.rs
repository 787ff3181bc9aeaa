use std::{fmt, iter::FusedIterator};

use super::State;
use crate::{
    codec::{self, Encode},
    util::PartialBuffer,
};

/// A base32 encoder over an [`Iterator`] of byte chunks.
///
/// Yields one `String` per complete group of 5 input bytes, followed by the zero-padded final
/// partial group if the input length is not a multiple of 5.
pub struct Base32Encoder<I: Iterator> {
    inner: I,
    encoder: codec::Base32Encoder,
    state: State,
    input: Option<PartialBuffer<I::Item>>,
}

impl<I> Base32Encoder<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    /// Creates a new encoder which will pull chunks from the given iterator and yield encoded
    /// pieces.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            encoder: codec::Base32Encoder::new(),
            state: State::Reading,
            input: None,
        }
    }
}

impl<I: Iterator> Base32Encoder<I> {
    /// Acquires a reference to the underlying iterator that this encoder is wrapping.
    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    /// Acquires a mutable reference to the underlying iterator that this encoder is wrapping.
    ///
    /// Note that care must be taken to avoid tampering with the state of the iterator which may
    /// otherwise confuse this encoder.
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    /// Consumes this encoder returning the underlying iterator.
    ///
    /// Note that this discards any partially consumed chunk and the bytes held for the next group.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for Base32Encoder<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut output = String::new();

        loop {
            self.state = match self.state {
                State::Reading => match self.inner.next() {
                    Some(chunk) => {
                        self.input = Some(PartialBuffer::new(chunk));
                        State::Writing
                    }
                    None => {
                        tracing::trace!("end of input");
                        State::Flushing
                    }
                },

                State::Writing => {
                    if let Some(input) = &mut self.input {
                        if self.encoder.encode(input, &mut output) {
                            return Some(output);
                        }
                    }
                    self.input = None;
                    State::Reading
                }

                State::Flushing => {
                    self.state = State::Done;
                    return if self.encoder.finish(&mut output) {
                        Some(output)
                    } else {
                        None
                    };
                }

                State::Done => return None,
            };
        }
    }
}

impl<I> FusedIterator for Base32Encoder<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
}

impl<I: Iterator + fmt::Debug> fmt::Debug for Base32Encoder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base32Encoder")
            .field("inner", &self.inner)
            .field("encoder", &self.encoder)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

const _: () = {
    fn _assert() {
        use crate::util::{_assert_send, _assert_sync};

        _assert_send::<Base32Encoder<std::vec::IntoIter<Vec<u8>>>>();
        _assert_sync::<Base32Encoder<std::vec::IntoIter<Vec<u8>>>>();
    }
};
