//! Symbol frequency counting.
//!
//! Counts are kept per byte value alongside the order in which each symbol
//! was first seen. That discovery order is what the tree builder uses to
//! break ties between equal weights, so two tables built from the same input
//! always produce the same tree.

/// Occurrence counts for every distinct byte of an input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    /// Distinct symbols in order of first occurrence.
    order: Vec<u8>,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        FrequencyTable {
            counts: [0; 256],
            order: Vec::new(),
        }
    }
}

impl FrequencyTable {
    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = FrequencyTable::default();
        for &symbol in data {
            if table.counts[symbol as usize] == 0 {
                table.order.push(symbol);
            }
            table.counts[symbol as usize] += 1;
        }
        table
    }

    /// Count `data` in parallel shards and merge them.
    ///
    /// Each shard remembers where it first saw every symbol, so the merged
    /// discovery order is identical to [`FrequencyTable::from_bytes`].
    #[cfg(feature = "parallel")]
    pub fn from_bytes_parallel(data: &[u8], shard_len: usize) -> Self {
        use rayon::prelude::*;

        let shard_len = shard_len.max(1);
        let (counts, first_seen) = data
            .par_chunks(shard_len)
            .enumerate()
            .map(|(shard, chunk)| {
                let base = shard * shard_len;
                let mut counts = [0u64; 256];
                let mut first_seen = [usize::MAX; 256];
                for (offset, &symbol) in chunk.iter().enumerate() {
                    let slot = symbol as usize;
                    if counts[slot] == 0 {
                        first_seen[slot] = base + offset;
                    }
                    counts[slot] += 1;
                }
                (counts, first_seen)
            })
            .reduce(
                || ([0u64; 256], [usize::MAX; 256]),
                |(mut counts, mut first_seen), (other_counts, other_seen)| {
                    for slot in 0..256 {
                        counts[slot] += other_counts[slot];
                        first_seen[slot] = first_seen[slot].min(other_seen[slot]);
                    }
                    (counts, first_seen)
                },
            );

        let mut order: Vec<u8> = (0..=255u8).filter(|&s| counts[s as usize] > 0).collect();
        order.sort_by_key(|&s| first_seen[s as usize]);
        FrequencyTable { counts, order }
    }

    /// Occurrences of `symbol` (zero if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of counted bytes.
    pub fn total(&self) -> u64 {
        self.order.iter().map(|&s| self.counts[s as usize]).sum()
    }

    /// `(symbol, count)` pairs in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.order.iter().map(move |&s| (s, self.counts[s as usize]))
    }
}
