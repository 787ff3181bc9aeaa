use std::{fmt, iter::FusedIterator};

use super::State;
use crate::{
    codec::{self, Decode},
    error::Result,
    util::{PartialBuffer, Text},
};

/// A base32 decoder over an [`Iterator`] of text fragments.
///
/// Yields one 5 byte buffer per complete run of 8 symbols, followed by the bytes of the final short
/// run if there is one. Characters outside the alphabet separate runs and are otherwise ignored.
///
/// Once a run shorter than 8 symbols has been read, the rest of that fragment is discarded and the
/// short run continues at the start of the next fragment.
pub struct Base32Decoder<I: Iterator> {
    inner: I,
    decoder: codec::Base32Decoder,
    state: State,
    input: Option<PartialBuffer<Text<I::Item>>>,
}

impl<I> Base32Decoder<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Creates a new decoder which will pull text fragments from the given iterator and yield
    /// decoded bytes.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            decoder: codec::Base32Decoder::new(),
            state: State::Reading,
            input: None,
        }
    }
}

impl<I: Iterator> Base32Decoder<I> {
    /// Acquires a reference to the underlying iterator that this decoder is wrapping.
    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    /// Acquires a mutable reference to the underlying iterator that this decoder is wrapping.
    ///
    /// Note that care must be taken to avoid tampering with the state of the iterator which may
    /// otherwise confuse this decoder.
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    /// Consumes this decoder returning the underlying iterator.
    ///
    /// Note that this discards any partially consumed fragment and the symbols held for the next
    /// group.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for Base32Decoder<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Result<Vec<u8>>> {
        let mut output = Vec::new();

        loop {
            self.state = match self.state {
                State::Reading => match self.inner.next() {
                    Some(fragment) => {
                        self.input = Some(PartialBuffer::new(Text(fragment)));
                        State::Writing
                    }
                    None => {
                        tracing::trace!("end of input");
                        State::Flushing
                    }
                },

                State::Writing => {
                    if let Some(input) = &mut self.input {
                        match self.decoder.decode(input, &mut output) {
                            Ok(true) => return Some(Ok(output)),
                            Ok(false) => {}
                            Err(err) => {
                                self.state = State::Done;
                                return Some(Err(err));
                            }
                        }
                    }
                    self.input = None;
                    State::Reading
                }

                State::Flushing => {
                    self.state = State::Done;
                    return match self.decoder.finish(&mut output) {
                        Ok(true) => Some(Ok(output)),
                        Ok(false) => None,
                        Err(err) => Some(Err(err)),
                    };
                }

                State::Done => return None,
            };
        }
    }
}

impl<I> FusedIterator for Base32Decoder<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

impl<I: Iterator + fmt::Debug> fmt::Debug for Base32Decoder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base32Decoder")
            .field("inner", &self.inner)
            .field("decoder", &self.decoder)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

const _: () = {
    fn _assert() {
        use crate::util::{_assert_send, _assert_sync};

        _assert_send::<Base32Decoder<std::vec::IntoIter<String>>>();
        _assert_sync::<Base32Decoder<std::vec::IntoIter<String>>>();
    }
};
