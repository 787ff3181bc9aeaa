use std::{
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::{ready, stream::Stream};
use pin_project_lite::pin_project;

use super::State;
use crate::{
    codec::{self, Decode},
    error::Result,
    util::{PartialBuffer, Text},
};

pin_project! {
    /// A base32 decoder over a [`Stream`] of text fragments.
    ///
    /// Yields one 5 byte buffer per complete run of 8 symbols, followed by the bytes of the final
    /// short run if there is one. Characters outside the alphabet separate runs and are otherwise
    /// ignored.
    ///
    /// Once a run shorter than 8 symbols has been read, the rest of that fragment is discarded and
    /// the short run continues at the start of the next fragment.
    pub struct Base32Decoder<S: Stream> {
        #[pin]
        stream: S,
        decoder: codec::Base32Decoder,
        state: State,
        input: Option<PartialBuffer<Text<S::Item>>>,
    }
}

impl<S> Base32Decoder<S>
where
    S: Stream,
    S::Item: AsRef<str>,
{
    /// Creates a new decoder which will read text fragments from the given stream and emit
    /// decoded bytes.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            decoder: codec::Base32Decoder::new(),
            state: State::Reading,
            input: None,
        }
    }
}

impl<S: Stream> Base32Decoder<S> {
    /// Acquires a reference to the underlying stream that this decoder is wrapping.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Acquires a mutable reference to the underlying stream that this decoder is wrapping.
    ///
    /// Note that care must be taken to avoid tampering with the state of the stream which may
    /// otherwise confuse this decoder.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Acquires a pinned mutable reference to the underlying stream that this decoder is
    /// wrapping.
    ///
    /// Note that care must be taken to avoid tampering with the state of the stream which may
    /// otherwise confuse this decoder.
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut S> {
        self.project().stream
    }

    /// Consumes this decoder returning the underlying stream.
    ///
    /// Note that this discards any partially consumed fragment and the symbols held for the next
    /// group.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Stream for Base32Decoder<S>
where
    S: Stream,
    S::Item: AsRef<str>,
{
    type Item = Result<Vec<u8>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Vec<u8>>>> {
        let mut this = self.project();
        let mut output = Vec::new();

        loop {
            *this.state = match *this.state {
                State::Reading => match ready!(this.stream.as_mut().poll_next(cx)) {
                    Some(fragment) => {
                        *this.input = Some(PartialBuffer::new(Text(fragment)));
                        State::Writing
                    }
                    None => {
                        tracing::trace!("end of stream");
                        State::Flushing
                    }
                },

                State::Writing => {
                    if let Some(input) = this.input.as_mut() {
                        match this.decoder.decode(input, &mut output) {
                            Ok(true) => return Poll::Ready(Some(Ok(output))),
                            Ok(false) => {}
                            Err(err) => {
                                *this.state = State::Done;
                                return Poll::Ready(Some(Err(err)));
                            }
                        }
                    }
                    *this.input = None;
                    State::Reading
                }

                State::Flushing => {
                    *this.state = State::Done;
                    return Poll::Ready(match this.decoder.finish(&mut output) {
                        Ok(true) => Some(Ok(output)),
                        Ok(false) => None,
                        Err(err) => Some(Err(err)),
                    });
                }

                State::Done => return Poll::Ready(None),
            };
        }
    }
}

impl<S: Stream + fmt::Debug> fmt::Debug for Base32Decoder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base32Decoder")
            .field("stream", &self.stream)
            .field("decoder", &self.decoder)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

const _: () = {
    fn _assert() {
        use crate::util::{_assert_send, _assert_sync};

        _assert_send::<Base32Decoder<Pin<Box<dyn Stream<Item = String> + Send>>>>();
        _assert_sync::<Base32Decoder<Pin<Box<dyn Stream<Item = String> + Sync>>>>();
    }
};
