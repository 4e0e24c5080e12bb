//! Payload bit packing.
//!
//! Codes are concatenated in input order and packed eight bits per byte,
//! most significant bit first. The final byte is zero-padded; the exact
//! number of meaningful bits travels separately in the header.

use bitvec::prelude::*;

use super::code_table::{Code, CodeTable};
use crate::error::{Error, Result};

/// Accumulates codes into a packed bit stream.
#[derive(Debug, Clone, Default)]
pub struct BitPacker {
    bits: BitVec<u8, Msb0>,
}

impl BitPacker {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a packer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        BitPacker {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Append one code.
    pub fn push_code(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Number of meaningful bits so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Return the packed bytes with the pad bits of the last byte cleared.
    pub fn finish(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}

/// Encode `input` with `table`, returning the exact bit length and the
/// packed payload.
pub fn pack(input: &[u8], table: &CodeTable) -> Result<(u32, Vec<u8>)> {
    let mut total: u64 = 0;
    for &symbol in input {
        let code = table.code(symbol).ok_or(Error::UnknownSymbol(symbol))?;
        total += code.len() as u64;
    }
    let bit_len = u32::try_from(total).map_err(|_| {
        Error::InputTooLarge(format!(
            "encoding needs {total} bits, the length field holds at most {}",
            u32::MAX
        ))
    })?;

    let mut packer = BitPacker::with_capacity(total as usize);
    for &symbol in input {
        // Every symbol was looked up above.
        if let Some(code) = table.code(symbol) {
            packer.push_code(code);
        }
    }
    Ok((bit_len, packer.finish()))
}

/// Prefix-matching decoder state.
///
/// Bits are appended to the pending code until it equals a stored code,
/// at which point the symbol is emitted and the pending code reset.
#[derive(Debug)]
pub struct BitUnpacker<'a> {
    table: &'a CodeTable,
    current: Code,
    output: Vec<u8>,
}

impl<'a> BitUnpacker<'a> {
    /// Create an unpacker that decodes against `table`.
    pub fn new(table: &'a CodeTable) -> Self {
        BitUnpacker {
            table,
            current: Code::with_capacity(table.max_code_len()),
            output: Vec::new(),
        }
    }

    /// Feed one payload bit.
    pub fn push_bit(&mut self, bit: bool) -> Result<()> {
        self.current.push(bit);
        if let Some(symbol) = self.table.symbol(&self.current) {
            self.output.push(symbol);
            self.current.clear();
        } else if self.current.len() >= self.table.max_code_len() {
            return Err(Error::format(format!(
                "{} bits match no code (longest code is {} bits)",
                self.current.len(),
                self.table.max_code_len()
            )));
        }
        Ok(())
    }

    /// Number of bits of the code currently being matched.
    pub fn pending_bits(&self) -> usize {
        self.current.len()
    }

    /// Finish decoding, failing if a partial code is left over.
    pub fn finish(self) -> Result<Vec<u8>> {
        if !self.current.is_empty() {
            return Err(Error::UnmatchedCode {
                pending_bits: self.current.len(),
            });
        }
        Ok(self.output)
    }
}

/// Decode exactly `bit_len` bits of `payload` against `table`.
///
/// The payload must be exactly `ceil(bit_len / 8)` bytes long.
pub fn unpack(payload: &[u8], bit_len: u32, table: &CodeTable) -> Result<Vec<u8>> {
    let bit_len = bit_len as usize;
    let needed = bit_len.div_ceil(8);
    if payload.len() < needed {
        return Err(Error::format(format!(
            "payload is {} bytes, {bit_len} bits need {needed}",
            payload.len()
        )));
    }
    if payload.len() > needed {
        return Err(Error::format(format!(
            "{} trailing bytes after {bit_len}-bit payload",
            payload.len() - needed
        )));
    }
    if bit_len > 0 && table.is_empty() {
        return Err(Error::format("payload present but code table is empty"));
    }

    let mut unpacker = BitUnpacker::new(table);
    for bit in payload.view_bits::<Msb0>()[..bit_len].iter().by_vals() {
        unpacker.push_bit(bit)?;
    }
    unpacker.finish()
}
