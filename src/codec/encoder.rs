use crate::{
    codec::Encode,
    group::{bytes_to_integer, integer_to_symbols, BYTES_PER_GROUP, GROUP_BITS},
    util::PartialBuffer,
};

#[derive(Debug, Default)]
pub(crate) struct Base32Encoder {
    group: PartialBuffer<[u8; BYTES_PER_GROUP]>,
}

impl Base32Encoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Encode for Base32Encoder {
    fn encode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut String,
    ) -> bool {
        self.group.copy_unwritten_from(input);
        if !self.group.is_full() {
            return false;
        }

        let value = bytes_to_integer(self.group.written());
        output.extend(integer_to_symbols(value, GROUP_BITS));
        self.group.reset();
        true
    }

    fn finish(&mut self, output: &mut String) -> bool {
        let remainder = self.group.written();
        if remainder.is_empty() {
            return false;
        }

        let bits = remainder.len() as u32 * 8;
        let pad = (5 - bits % 5) % 5;
        let value = bytes_to_integer(remainder) << pad;
        tracing::trace!(bytes = remainder.len(), pad, "flushing partial group");

        output.extend(integer_to_symbols(value, bits + pad));
        self.group.reset();
        true
    }
}
