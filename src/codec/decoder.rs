use crate::{
    codec::Decode,
    error::Result,
    group::{integer_to_bytes, is_symbol, symbols_to_integer, GROUP_BITS, SYMBOLS_PER_GROUP},
    util::PartialBuffer,
};

#[derive(Debug, Default)]
pub(crate) struct Base32Decoder {
    run: PartialBuffer<[u8; SYMBOLS_PER_GROUP]>,
}

impl Base32Decoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Decode for Base32Decoder {
    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut Vec<u8>,
    ) -> Result<bool> {
        // A held run continues straight into the next fragment, otherwise separators are skipped.
        if self.run.written().is_empty() {
            let skip = input
                .unwritten()
                .iter()
                .take_while(|&&byte| !is_symbol(byte))
                .count();
            input.advance(skip);
        }

        self.run.copy_unwritten_while(input, is_symbol);

        if self.run.is_full() {
            let value = symbols_to_integer(self.run.written())?;
            output.extend(integer_to_bytes(value, GROUP_BITS));
            self.run.reset();
            return Ok(true);
        }

        // The run is short, everything after it in this fragment is dropped.
        let rest = input.unwritten();
        let dropped = rest.len();
        if rest.iter().copied().any(is_symbol) {
            tracing::debug!(
                held = self.run.written().len(),
                dropped,
                "discarding text after short symbol run"
            );
        }
        input.advance(dropped);
        Ok(false)
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<bool> {
        let remainder = self.run.written();
        if remainder.is_empty() {
            return Ok(false);
        }

        let bits = remainder.len() as u32 * 5;
        let extra = bits % 8;
        let value = symbols_to_integer(remainder)? >> extra;
        tracing::trace!(symbols = remainder.len(), extra, "flushing short symbol run");

        let len = output.len();
        output.extend(integer_to_bytes(value, bits - extra));
        self.run.reset();
        Ok(output.len() > len)
    }
}
