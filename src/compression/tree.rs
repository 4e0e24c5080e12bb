//! Huffman tree construction.
//!
//! Leaves enter a min-heap in the frequency table's discovery order. The two
//! lightest nodes are merged repeatedly until one root remains. Equal weights
//! are resolved by arrival order: every node carries the sequence number it
//! was pushed with, and the lower number wins.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::frequency::FrequencyTable;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf holds one symbol and its occurrence count.
    Leaf { symbol: u8, weight: u64 },
    /// An internal node owns exactly two children; its weight is their sum.
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the weight of the node.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Sum of `weight * depth` over all leaves.
    ///
    /// A lone leaf counts as depth 1, matching the one-bit code it is given.
    pub fn weighted_path_length(&self) -> u64 {
        if let HuffmanNode::Leaf { weight, .. } = self {
            return *weight;
        }
        let mut total = 0;
        let mut stack = vec![(self, 0u64)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { weight, .. } => total += weight * depth,
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        total
    }
}

/// Heap entry: lower weight first, then lower sequence number.
#[derive(Debug)]
struct QueuedNode {
    seq: usize,
    node: Box<HuffmanNode>,
}

impl QueuedNode {
    fn key(&self) -> (u64, usize) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueuedNode {}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
/// Returns `None` if the table is empty.
pub fn build_huffman_tree(freq: &FrequencyTable) -> Option<HuffmanNode> {
    let mut heap = BinaryHeap::with_capacity(freq.len());
    let mut seq = 0;
    for (symbol, weight) in freq.iter() {
        heap.push(QueuedNode {
            seq,
            node: Box::new(HuffmanNode::Leaf { symbol, weight }),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        let weight = left.node.weight() + right.node.weight();
        heap.push(QueuedNode {
            seq,
            node: Box::new(HuffmanNode::Internal {
                weight,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    }

    heap.pop().map(|root| *root.node)
}
