//! Lossless static Huffman compression.
//!
//! Input bytes are counted, a Huffman tree is built from the counts, and the
//! resulting code table is stored ahead of the bit-packed payload so the
//! container can be decoded on its own.

pub mod compression;
pub mod error;

pub use compression::{huffman_decode, huffman_encode, Compression, HuffmanCodec, HuffmanConfig};
pub use error::{Error, Result};
