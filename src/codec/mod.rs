use crate::{error::Result, util::PartialBuffer};

mod decoder;
mod encoder;

pub(crate) use self::{decoder::Base32Decoder, encoder::Base32Encoder};

pub(crate) trait Encode {
    /// Fill the current group from `input` and render it into `output` once complete.
    ///
    /// Returns `true` iff a complete group was written to `output`, `false` means `input` was
    /// exhausted and any leftover bytes are held until the next call.
    fn encode(&mut self, input: &mut PartialBuffer<impl AsRef<[u8]>>, output: &mut String)
        -> bool;

    /// Render the held partial group, zero padded to a symbol boundary.
    ///
    /// Returns `true` iff anything was written to `output`.
    fn finish(&mut self, output: &mut String) -> bool;
}

pub(crate) trait Decode {
    /// Fill the current run of symbols from `input` and render it into `output` once complete.
    ///
    /// Returns `Ok(true)` iff a complete group was written to `output`, `Ok(false)` means the rest
    /// of `input` was consumed and a short run (if any) is held until the next call.
    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut Vec<u8>,
    ) -> Result<bool>;

    /// Render the held short run, dropping the padding bits added by the encoder.
    ///
    /// Returns `Ok(true)` iff anything was written to `output`.
    fn finish(&mut self, output: &mut Vec<u8>) -> Result<bool>;
}
