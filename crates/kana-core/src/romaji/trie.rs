use std::collections::HashMap;
use std::sync::OnceLock;

use crate::kana::KanaTable;
use crate::unicode::is_hiragana;

#[derive(Default)]
struct Node {
    next: HashMap<u8, Node>,
    /// Hiragana unit whose spelling ends at this node.
    unit: Option<String>,
}

/// Spelling → hiragana trie, the inverse of the kana table.
pub struct RomajiTrie {
    root: Node,
    spellings: usize,
}

impl RomajiTrie {
    /// Get or initialize the global singleton, built from the global table.
    pub fn global() -> &'static RomajiTrie {
        static INSTANCE: OnceLock<RomajiTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| RomajiTrie::from_table(KanaTable::global()))
    }

    /// Build from the hiragana half of `table`. When two units share a
    /// spelling ("ji" for じ and ぢ), the one listed first keeps it.
    pub fn from_table(table: &KanaTable) -> Self {
        let mut trie = RomajiTrie {
            root: Node::default(),
            spellings: 0,
        };
        for entry in table
            .entries()
            .iter()
            .filter(|e| e.text.chars().all(is_hiragana))
        {
            for spelling in &entry.spellings {
                trie.insert(spelling, &entry.text);
            }
        }
        trie
    }

    fn insert(&mut self, spelling: &str, unit: &str) {
        let node = spelling
            .bytes()
            .fold(&mut self.root, |node, b| node.next.entry(b).or_default());
        if node.unit.is_none() {
            node.unit = Some(unit.to_string());
            self.spellings += 1;
        }
    }

    /// Number of distinct spellings the trie converts.
    pub fn len(&self) -> usize {
        self.spellings
    }

    pub fn is_empty(&self) -> bool {
        self.spellings == 0
    }

    /// Longest spelling that prefixes `input`: (byte length, hiragana unit).
    pub fn longest_match<'s>(&'s self, input: &str) -> Option<(usize, &'s str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, b) in input.bytes().enumerate() {
            match node.next.get(&b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(unit) = &node.unit {
                best = Some((i + 1, unit.as_str()));
            }
        }
        best
    }
}
