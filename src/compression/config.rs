//! Container layout options shared by compressor and decompressor.

/// Byte order of multi-byte header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    pub(crate) fn u32_to_bytes(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    pub(crate) fn u32_from_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    pub(crate) fn u16_to_bytes(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    pub(crate) fn u16_from_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Little => u16::from_le_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        }
    }
}

/// Width of the table entry count at the start of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountWidth {
    /// One byte. A full 256-symbol alphabet is stored as 0; it reads back as
    /// an empty table only when nothing but the bit-length field follows.
    #[default]
    Byte,
    /// Two bytes in the configured byte order.
    Wide,
}

/// Configuration for [`HuffmanCodec`](super::huffman::HuffmanCodec).
///
/// Containers must be read back with the same configuration they were
/// written with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HuffmanConfig {
    /// Byte order of the encoded bit-length field (and a wide count).
    pub byte_order: ByteOrder,
    /// How the table entry count is stored.
    pub count_width: CountWidth,
    /// Inputs at least this long are counted in parallel shards. Only
    /// honoured with the `parallel` feature.
    pub parallel_threshold: Option<usize>,
}

impl HuffmanConfig {
    /// Create a config with the default layout: one-byte count,
    /// little-endian bit length, sequential counting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Customize the byte order of multi-byte fields.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Customize the width of the table entry count.
    pub fn with_count_width(mut self, count_width: CountWidth) -> Self {
        self.count_width = count_width;
        self
    }

    /// Count frequencies in parallel for inputs of at least `threshold` bytes.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }
}
