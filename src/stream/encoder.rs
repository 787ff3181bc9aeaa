use std::{
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::{ready, stream::Stream};
use pin_project_lite::pin_project;

use super::State;
use crate::{
    codec::{self, Encode},
    util::PartialBuffer,
};

pin_project! {
    /// A base32 encoder over a [`Stream`] of byte chunks.
    ///
    /// Yields one `String` per complete group of 5 input bytes, followed by the zero-padded final
    /// partial group if the input length is not a multiple of 5.
    pub struct Base32Encoder<S: Stream> {
        #[pin]
        stream: S,
        encoder: codec::Base32Encoder,
        state: State,
        input: Option<PartialBuffer<S::Item>>,
    }
}

impl<S> Base32Encoder<S>
where
    S: Stream,
    S::Item: AsRef<[u8]>,
{
    /// Creates a new encoder which will read chunks from the given stream and emit encoded
    /// pieces.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            encoder: codec::Base32Encoder::new(),
            state: State::Reading,
            input: None,
        }
    }
}

impl<S: Stream> Base32Encoder<S> {
    /// Acquires a reference to the underlying stream that this encoder is wrapping.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Acquires a mutable reference to the underlying stream that this encoder is wrapping.
    ///
    /// Note that care must be taken to avoid tampering with the state of the stream which may
    /// otherwise confuse this encoder.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Acquires a pinned mutable reference to the underlying stream that this encoder is
    /// wrapping.
    ///
    /// Note that care must be taken to avoid tampering with the state of the stream which may
    /// otherwise confuse this encoder.
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut S> {
        self.project().stream
    }

    /// Consumes this encoder returning the underlying stream.
    ///
    /// Note that this discards any partially consumed chunk and the bytes held for the next group.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Stream for Base32Encoder<S>
where
    S: Stream,
    S::Item: AsRef<[u8]>,
{
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        let mut this = self.project();
        let mut output = String::new();

        loop {
            *this.state = match *this.state {
                State::Reading => match ready!(this.stream.as_mut().poll_next(cx)) {
                    Some(chunk) => {
                        *this.input = Some(PartialBuffer::new(chunk));
                        State::Writing
                    }
                    None => {
                        tracing::trace!("end of stream");
                        State::Flushing
                    }
                },

                State::Writing => {
                    if let Some(input) = this.input.as_mut() {
                        if this.encoder.encode(input, &mut output) {
                            return Poll::Ready(Some(output));
                        }
                    }
                    *this.input = None;
                    State::Reading
                }

                State::Flushing => {
                    *this.state = State::Done;
                    return Poll::Ready(if this.encoder.finish(&mut output) {
                        Some(output)
                    } else {
                        None
                    });
                }

                State::Done => return Poll::Ready(None),
            };
        }
    }
}

impl<S: Stream + fmt::Debug> fmt::Debug for Base32Encoder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base32Encoder")
            .field("stream", &self.stream)
            .field("encoder", &self.encoder)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

const _: () = {
    fn _assert() {
        use crate::util::{_assert_send, _assert_sync};

        _assert_send::<Base32Encoder<Pin<Box<dyn Stream<Item = Vec<u8>> + Send>>>>();
        _assert_sync::<Base32Encoder<Pin<Box<dyn Stream<Item = Vec<u8>> + Sync>>>>();
    }
};
