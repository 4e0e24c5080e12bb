//! Static Huffman compression.
//!
//! The pipeline, leaf-first:
//! - [`frequency`]: symbol occurrence counts
//! - [`tree`]: Huffman tree with a deterministic tie-break
//! - [`code_table`]: symbol to code and code to symbol maps
//! - [`table_codec`]: container header
//! - [`bit_packer`]: payload packing and prefix-matching decode
//! - [`huffman`]: compressor and decompressor
//!
//! # Examples
//!
//! ```rust
//! use huffpack::compression::{Compression, HuffmanCodec};
//!
//! let codec = HuffmanCodec::new();
//! let container = codec.compress(b"hello huffman").unwrap();
//! assert_eq!(codec.decompress(&container).unwrap(), b"hello huffman".to_vec());
//! ```

use crate::error::Result;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress the compressed data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod bit_packer;
pub mod code_table;
pub mod config;
pub mod frequency;
pub mod huffman;
pub mod table_codec;
pub mod tree;


pub use bit_packer::{pack, unpack, BitPacker, BitUnpacker};
pub use code_table::{Code, CodeTable};
pub use config::{ByteOrder, CountWidth, HuffmanConfig};
pub use frequency::FrequencyTable;
pub use huffman::{huffman_decode, huffman_encode, ContainerInfo, HuffmanCodec};
pub use tree::{build_huffman_tree, HuffmanNode};
