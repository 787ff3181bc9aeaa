pub const fn _assert_send<T: Send>() {}
pub const fn _assert_sync<T: Sync>() {}

#[derive(Debug, Default)]
pub(crate) struct PartialBuffer<B> {
    buffer: B,
    index: usize,
}

impl<B: AsRef<[u8]>> PartialBuffer<B> {
    pub(crate) fn new(buffer: B) -> Self {
        Self { buffer, index: 0 }
    }

    pub(crate) fn written(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.index]
    }

    pub(crate) fn unwritten(&self) -> &[u8] {
        &self.buffer.as_ref()[self.index..]
    }

    pub(crate) fn advance(&mut self, amount: usize) {
        self.index += amount;
    }

    pub(crate) fn is_full(&self) -> bool {
        self.unwritten().is_empty()
    }

    pub(crate) fn reset(&mut self) {
        self.index = 0;
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PartialBuffer<B> {
    pub(crate) fn unwritten_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[self.index..]
    }

    pub(crate) fn copy_unwritten_from<C: AsRef<[u8]>>(
        &mut self,
        other: &mut PartialBuffer<C>,
    ) -> usize {
        let len = self.unwritten().len().min(other.unwritten().len());
        self.copy_prefix_from(other, len)
    }

    /// Like [`copy_unwritten_from`](Self::copy_unwritten_from) but stops at the first byte of
    /// `other` rejected by `accept`.
    pub(crate) fn copy_unwritten_while<C: AsRef<[u8]>>(
        &mut self,
        other: &mut PartialBuffer<C>,
        accept: impl Fn(u8) -> bool,
    ) -> usize {
        let len = other
            .unwritten()
            .iter()
            .take(self.unwritten().len())
            .take_while(|&&byte| accept(byte))
            .count();
        self.copy_prefix_from(other, len)
    }

    fn copy_prefix_from<C: AsRef<[u8]>>(
        &mut self,
        other: &mut PartialBuffer<C>,
        len: usize,
    ) -> usize {
        self.unwritten_mut()[..len].copy_from_slice(&other.unwritten()[..len]);

        self.advance(len);
        other.advance(len);
        len
    }
}

/// Views a text fragment as the bytes of its UTF-8 encoding.
///
/// The alphabet is pure ASCII, so scanning bytes never admits part of a multi-byte character into
/// a symbol run.
#[derive(Debug)]
pub(crate) struct Text<T>(pub(crate) T);

impl<T: AsRef<str>> AsRef<[u8]> for Text<T> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref().as_bytes()
    }
}
