//! Static Huffman compressor and decompressor.
//!
//! A container is a code table header followed by the packed payload:
//!
//! ```text
//! count | (symbol, len, len x '0'/'1')* | bit length (u32) | payload
//! ```
//!
//! Compression counts symbol frequencies, builds the tree, assigns codes,
//! writes the table and packs the input. Decompression only needs the table;
//! the tree is never stored.
//!
//! # Examples
//!
//! ```
//! use huffpack::compression::huffman::{huffman_decode, huffman_encode};
//!
//! let input = b"abracadabra";
//! let container = huffman_encode(input).unwrap();
//! assert_eq!(huffman_decode(&container).unwrap(), input.to_vec());
//! ```

use std::io::{Read, Write};

use log::{debug, warn};

use super::bit_packer::{pack, unpack};
use super::code_table::{Code, CodeTable};
use super::config::HuffmanConfig;
use super::frequency::FrequencyTable;
use super::table_codec::{
    read_bit_length, read_entries, read_table, write_bit_length, write_table, ByteReader,
    BIT_LENGTH_FIELD,
};
use super::tree::build_huffman_tree;
use super::Compression;
use crate::error::{Error, Result};

/// Huffman codec with a fixed container layout.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    config: HuffmanConfig,
}

/// Header summary of a container, read without decoding the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// `(symbol, code)` in stored order.
    pub entries: Vec<(u8, Code)>,
    /// Number of meaningful payload bits.
    pub bit_len: u32,
    /// Bytes before the payload.
    pub header_len: usize,
    /// Payload bytes.
    pub payload_len: usize,
}

impl ContainerInfo {
    /// Total container size in bytes.
    pub fn container_len(&self) -> usize {
        self.header_len + self.payload_len
    }

    /// Container size divided by the original size.
    pub fn compression_ratio(&self, original_len: usize) -> f64 {
        if original_len == 0 {
            return 0.0;
        }
        self.container_len() as f64 / original_len as f64
    }
}

impl HuffmanCodec {
    /// Create a codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom configuration.
    pub fn with_config(config: HuffmanConfig) -> Self {
        HuffmanCodec { config }
    }

    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Count symbol frequencies, in parallel shards for large inputs when
    /// the `parallel` feature is enabled.
    pub fn frequencies(&self, data: &[u8]) -> FrequencyTable {
        #[cfg(feature = "parallel")]
        if let Some(threshold) = self.config.parallel_threshold {
            if data.len() >= threshold {
                let shard_len = data.len().div_ceil(rayon::current_num_threads());
                return FrequencyTable::from_bytes_parallel(data, shard_len);
            }
        }
        FrequencyTable::from_bytes(data)
    }

    /// Build the code table for `data`. Empty input yields an empty table.
    pub fn code_table(&self, data: &[u8]) -> CodeTable {
        build_huffman_tree(&self.frequencies(data))
            .map(|root| CodeTable::from_tree(&root))
            .unwrap_or_default()
    }

    /// Parse a container's header without decoding its payload.
    pub fn inspect(&self, container: &[u8]) -> Result<ContainerInfo> {
        let mut reader = ByteReader::new(container);
        let entries = read_entries(&mut reader, &self.config)?;
        CodeTable::from_entries(entries.iter().cloned())?;
        let bit_len = read_bit_length(&mut reader, self.config.byte_order)?;
        let header_len = reader.position();
        let payload_len = reader.remaining();
        let needed = (bit_len as usize).div_ceil(8);
        if payload_len != needed {
            return Err(Error::format(format!(
                "payload is {payload_len} bytes, {bit_len} bits need {needed}"
            )));
        }
        Ok(ContainerInfo {
            entries,
            bit_len,
            header_len,
            payload_len,
        })
    }

    /// Compress `input` and write the container to `out`.
    pub fn compress_to<W: Write>(&self, input: &[u8], mut out: W) -> Result<()> {
        let container = self.compress(input)?;
        out.write_all(&container)?;
        out.flush()?;
        Ok(())
    }

    /// Read a whole container from `input` and decompress it.
    pub fn decompress_from<R: Read>(&self, mut input: R) -> Result<Vec<u8>> {
        let mut container = Vec::new();
        input.read_to_end(&mut container)?;
        self.decompress(&container)
    }

    fn decode_container(&self, container: &[u8]) -> Result<Vec<u8>> {
        let mut reader = ByteReader::new(container);
        let table = read_table(&mut reader, &self.config)?;
        let bit_len = read_bit_length(&mut reader, self.config.byte_order)?;
        debug!(
            "decoding container: {} table entries, {bit_len} bits",
            table.len()
        );
        let output = unpack(reader.rest(), bit_len, &table)?;
        debug!("decoded {} bytes", output.len());
        Ok(output)
    }
}

impl Compression for HuffmanCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let table = self.code_table(data);

        let mut out = Vec::new();
        write_table(&table, &self.config, &mut out)?;
        let header_len = out.len() + BIT_LENGTH_FIELD;
        let (bit_len, payload) = pack(data, &table)?;
        write_bit_length(bit_len, self.config.byte_order, &mut out);
        out.extend_from_slice(&payload);

        debug!(
            "compressed {} bytes: {} symbols, {header_len}-byte header, {bit_len} bits, {} bytes total",
            data.len(),
            table.len(),
            out.len()
        );
        Ok(out)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode_container(data).inspect_err(|e| {
            warn!("rejected {}-byte container: {e}", data.len());
        })
    }
}

/// Compress `input` with the default configuration.
pub fn huffman_encode(input: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().compress(input)
}

/// Decompress a container written with the default configuration.
pub fn huffman_decode(container: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().decompress(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::config::{ByteOrder, CountWidth};
    use std::io::Cursor;

    #[test]
    fn test_encode_decode() {
        let input = b"huffman coding in rust is fun!";
        let encoded = huffman_encode(input).unwrap();
        assert_eq!(huffman_decode(&encoded).unwrap(), input.to_vec());
    }

    #[test]
    fn test_known_container() {
        let container = huffman_encode(b"bacc").unwrap();
        // Frequencies b=1 a=1 c=2: b and a merge first, then (c, (b, a)).
        let mut expected = b"\x03c\x010b\x0210a\x0211".to_vec();
        expected.extend_from_slice(&[6, 0, 0, 0, 0b1011_0000]);
        assert_eq!(container, expected);
    }

    #[test]
    fn test_empty_input() {
        let container = huffman_encode(b"").unwrap();
        assert_eq!(container, vec![0, 0, 0, 0, 0]);
        assert!(huffman_decode(&container).unwrap().is_empty());
    }

    #[test]
    fn test_single_character() {
        let input = vec![b'a'; 1000];
        let container = huffman_encode(&input).unwrap();
        let info = HuffmanCodec::new().inspect(&container).unwrap();
        assert_eq!(info.entries.len(), 1);
        assert_eq!(info.entries[0].1.len(), 1);
        assert_eq!(info.bit_len, 1000);
        assert_eq!(info.payload_len, 125);
        assert_eq!(huffman_decode(&container).unwrap(), input);
    }

    #[test]
    fn test_big_endian_wide_count() {
        let codec = HuffmanCodec::with_config(
            HuffmanConfig::new()
                .with_byte_order(ByteOrder::Big)
                .with_count_width(CountWidth::Wide),
        );
        let input = b"configurable container layout";
        let container = codec.compress(input).unwrap();
        assert_eq!(codec.decompress(&container).unwrap(), input.to_vec());

        let info = codec.inspect(&container).unwrap();
        let field = &container[info.header_len - 4..info.header_len];
        assert_eq!(u32::from_be_bytes(field.try_into().unwrap()), info.bit_len);
    }

    #[test]
    fn test_inspect_reports_sizes() {
        let input = b"abracadabra".repeat(10);
        let codec = HuffmanCodec::new();
        let container = codec.compress(&input).unwrap();
        let info = codec.inspect(&container).unwrap();
        assert_eq!(info.entries.len(), 5);
        assert_eq!(info.container_len(), container.len());
        assert!(info.compression_ratio(input.len()) < 1.0);
        assert_eq!(
            info.entries,
            codec.code_table(&input).entries().to_vec()
        );

        let truncated = &container[..container.len() - 1];
        assert!(matches!(codec.inspect(truncated), Err(Error::Format(_))));
    }

    #[test]
    fn test_stream_adapters() {
        let codec = HuffmanCodec::new();
        let input = b"streams carry whole containers";
        let mut sink = Vec::new();
        codec.compress_to(input, &mut sink).unwrap();
        let output = codec.decompress_from(Cursor::new(sink)).unwrap();
        assert_eq!(output, input.to_vec());
    }

    #[test]
    fn test_decompress_garbage() {
        assert!(huffman_decode(&[]).is_err());
        assert!(huffman_decode(&[1]).is_err());
        assert!(matches!(huffman_decode(&[0, 1, 0, 0, 0]), Err(Error::Format(_))));
    }
}
