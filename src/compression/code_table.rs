//! Code assignment from a Huffman tree.
//!
//! Descending left appends a `0`, descending right a `1`; each leaf's path is
//! its code. The table keeps both directions: symbol to code for encoding and
//! code to symbol for decoding.

use std::collections::HashMap;

use bitvec::prelude::*;

use super::tree::HuffmanNode;
use crate::error::{Error, Result};

/// A variable-length code, most significant bit first.
pub type Code = BitVec<u8, Msb0>;

/// Bijective mapping between symbols and their prefix-free codes.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    /// `(symbol, code)` in assignment order.
    entries: Vec<(u8, Code)>,
    /// Index into `entries` per symbol.
    forward: HashMap<u8, usize>,
    inverse: HashMap<Code, u8>,
    max_len: usize,
}

impl CodeTable {
    /// Walk the tree (left subtree first) and assign every leaf its path.
    ///
    /// If the tree is a single leaf, the code "0" is assigned.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut table = CodeTable::default();
        let mut stack = vec![(root, Code::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    let code = if prefix.is_empty() {
                        bitvec![u8, Msb0; 0]
                    } else {
                        prefix
                    };
                    table.insert(*symbol, code);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push(true);
                    stack.push((right.as_ref(), right_prefix));
                    let mut left_prefix = prefix;
                    left_prefix.push(false);
                    stack.push((left.as_ref(), left_prefix));
                }
            }
        }
        table
    }

    /// Rebuild a table from stored entries, rejecting anything a tree could
    /// not have produced.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Code)>,
    {
        let mut table = CodeTable::default();
        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(Error::format(format!("empty code for symbol {symbol:#04x}")));
            }
            if table.forward.contains_key(&symbol) {
                return Err(Error::format(format!("symbol {symbol:#04x} listed twice")));
            }
            if table.inverse.contains_key(&code) {
                return Err(Error::format(format!(
                    "code {} assigned to more than one symbol",
                    code_to_string(&code)
                )));
            }
            table.insert(symbol, code);
        }
        if !table.is_prefix_free() {
            return Err(Error::format("code table is not prefix-free"));
        }
        Ok(table)
    }

    fn insert(&mut self, symbol: u8, code: Code) {
        self.max_len = self.max_len.max(code.len());
        self.forward.insert(symbol, self.entries.len());
        self.inverse.insert(code.clone(), symbol);
        self.entries.push((symbol, code));
    }

    /// Code for `symbol`, if it is part of the alphabet.
    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.forward.get(&symbol).map(|&i| &self.entries[i].1)
    }

    /// Symbol whose code is exactly `code`.
    pub fn symbol(&self, code: &Code) -> Option<u8> {
        self.inverse.get(code).copied()
    }

    /// `(symbol, code)` pairs in assignment order.
    pub fn entries(&self) -> &[(u8, Code)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code (0 for an empty table).
    pub fn max_code_len(&self) -> usize {
        self.max_len
    }

    /// No code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.entries.iter().map(|(_, code)| code).collect();
        codes.sort_by(|a, b| a.iter().by_vals().cmp(b.iter().by_vals()));
        // After a lexicographic sort, any prefix sits directly before one of
        // its extensions.
        codes
            .windows(2)
            .all(|pair| pair[1].len() < pair[0].len() || pair[1][..pair[0].len()] != pair[0][..])
    }
}

/// Render a code as ASCII `0`/`1` characters.
pub fn code_to_string(code: &BitSlice<u8, Msb0>) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
