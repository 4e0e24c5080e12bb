//! Container header serialization.
//!
//! Layout, in order:
//!
//! 1. entry count (one byte, or two with [`CountWidth::Wide`])
//! 2. per entry: symbol byte, code length byte, then one ASCII `'0'`/`'1'`
//!    byte per code bit
//! 3. encoded bit length as a 4-byte integer in the configured byte order
//!
//! The header is not bit-packed; only the payload that follows it is.

use log::trace;

use super::code_table::{code_to_string, Code, CodeTable};
use super::config::{ByteOrder, CountWidth, HuffmanConfig};
use crate::error::{Error, Result};

/// Size of the encoded bit-length field.
pub const BIT_LENGTH_FIELD: usize = 4;

/// Bounds-checked cursor over a container.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::format(format!(
                "truncated {what}: need {len} bytes at offset {}, {} left",
                self.pos,
                self.remaining()
            )));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn byte(&mut self, what: &str) -> Result<u8> {
        Ok(self.take(1, what)?[0])
    }

    pub fn array<const N: usize>(&mut self, what: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, what)?);
        Ok(out)
    }

    pub fn rest(&mut self) -> &'a [u8] {
        let bytes = &self.data[self.pos..];
        self.pos = self.data.len();
        bytes
    }
}

/// Append the entry count and all table entries to `out`.
pub fn write_table(table: &CodeTable, config: &HuffmanConfig, out: &mut Vec<u8>) -> Result<()> {
    let count = table.len();
    match config.count_width {
        CountWidth::Byte => match count {
            256 => out.push(0),
            n => out.push(n as u8),
        },
        // At most 256 distinct byte values, always fits.
        CountWidth::Wide => out.extend_from_slice(&config.byte_order.u16_to_bytes(count as u16)),
    }

    for (symbol, code) in table.entries() {
        let len = u8::try_from(code.len()).map_err(|_| {
            Error::InputTooLarge(format!(
                "code for symbol {symbol:#04x} is {} bits long",
                code.len()
            ))
        })?;
        out.push(*symbol);
        out.push(len);
        out.extend(code.iter().by_vals().map(|bit| if bit { b'1' } else { b'0' }));
    }
    Ok(())
}

/// Append the encoded bit length field to `out`.
pub fn write_bit_length(bit_len: u32, byte_order: ByteOrder, out: &mut Vec<u8>) {
    out.extend_from_slice(&byte_order.u32_to_bytes(bit_len));
}

/// Read the entry count and the raw `(symbol, code)` entries, without
/// validating them as a table.
pub fn read_entries(
    reader: &mut ByteReader<'_>,
    config: &HuffmanConfig,
) -> Result<Vec<(u8, Code)>> {
    let count = match config.count_width {
        CountWidth::Byte => match reader.byte("table count")? {
            // Zero is an empty table only if the bit-length field is all
            // that follows; anything more is a full alphabet.
            0 if reader.remaining() == BIT_LENGTH_FIELD => 0,
            0 => 256,
            n => n as usize,
        },
        CountWidth::Wide => {
            let count = config.byte_order.u16_from_bytes(reader.array("table count")?) as usize;
            if count > 256 {
                return Err(Error::format(format!("table count {count} exceeds 256")));
            }
            count
        }
    };

    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        let symbol = reader.byte("table entry symbol")?;
        let len = reader.byte("table entry length")? as usize;
        if len == 0 {
            return Err(Error::format(format!(
                "table entry {index} (symbol {symbol:#04x}) has zero-length code"
            )));
        }
        let mut code = Code::with_capacity(len);
        for &digit in reader.take(len, "table entry code")? {
            match digit {
                b'0' => code.push(false),
                b'1' => code.push(true),
                other => {
                    return Err(Error::format(format!(
                        "table entry {index} has non-binary code byte {other:#04x}"
                    )))
                }
            }
        }
        trace!("table entry {index}: {} -> {symbol:#04x}", code_to_string(&code));
        entries.push((symbol, code));
    }
    Ok(entries)
}

/// Read and validate the code table at the start of a container.
pub fn read_table(reader: &mut ByteReader<'_>, config: &HuffmanConfig) -> Result<CodeTable> {
    CodeTable::from_entries(read_entries(reader, config)?)
}

/// Read the encoded bit length field.
pub fn read_bit_length(reader: &mut ByteReader<'_>, byte_order: ByteOrder) -> Result<u32> {
    Ok(byte_order.u32_from_bytes(reader.array("encoded bit length")?))
}
