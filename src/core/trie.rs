// --- File: src/core/trie.rs
use crate::core::alphabet::Alphabet;
use crate::errors::{BuildError, Result};

/// Index of a node in the trie arena.
pub type NodeId = usize;

/// The arena slot of the root node.
pub const ROOT: NodeId = 0;

/// What an insertion applies at the node where the key ends.
///
/// Dictionary word lists mark terminality without touching frequency; free
/// corpus tokens bump frequency without claiming dictionary membership; the
/// two signals coexist per node. N-gram phrases set both together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    MarkTerminal,
    IncrementFrequency,
    Both,
}

#[derive(Debug)]
struct TrieNode {
    children: Box<[Option<NodeId>]>,
    terminal: bool,
    frequency: u64,
}

impl TrieNode {
    fn new(width: usize) -> Self {
        Self {
            children: vec![None; width].into_boxed_slice(),
            terminal: false,
            frequency: 0,
        }
    }
}

/// A character-indexed tree over a bounded Devanagari alphabet.
///
/// Nodes live in an arena and refer to children by index, so the structure
/// has no cycles and drops without recursion. Every reachable node
/// corresponds to exactly one supported-character path from the root;
/// unsupported characters are skipped on every walk, never stored as gaps.
/// Mutation happens only during the single-threaded build phase; after that
/// the trie is read-only and freely shareable.
#[derive(Debug)]
pub struct Trie {
    alphabet: Alphabet,
    nodes: Vec<TrieNode>,
    skipped_chars: u64,
}

/// One terminal entry produced by [`Trie::enumerate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieEntry {
    pub key: String,
    pub frequency: u64,
}

impl Trie {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            nodes: vec![TrieNode::new(alphabet.width())],
            skipped_chars: 0,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// True when nothing has been inserted below the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Unsupported characters dropped during insertions so far.
    pub fn skipped_chars(&self) -> u64 {
        self.skipped_chars
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    pub fn frequency(&self, node: NodeId) -> u64 {
        self.nodes[node].frequency
    }

    /// Child of `node` on the given slot, if present.
    pub fn child(&self, node: NodeId, slot: usize) -> Option<NodeId> {
        self.nodes[node].children[slot]
    }

    fn alloc_node(&mut self) -> Result<NodeId> {
        // Growth is fallible so an exhausted arena degrades the build
        // instead of aborting the process.
        self.nodes
            .try_reserve(1)
            .map_err(|_| BuildError::OutOfMemory)?;
        self.nodes.push(TrieNode::new(self.alphabet.width()));
        Ok(self.nodes.len() - 1)
    }

    /// Walks/creates the node path for `key` and applies `mode` at its end.
    ///
    /// Unsupported characters are skipped, so "रा1म" and "राम" share one
    /// path. A key with no supported character at all is a no-op: the root
    /// never becomes a terminal entry.
    pub fn insert(&mut self, key: &str, mode: InsertMode) -> Result<()> {
        let mut node = ROOT;
        let mut consumed = false;
        for ch in key.chars() {
            let Some(slot) = self.alphabet.encode(ch) else {
                self.skipped_chars += 1;
                continue;
            };
            node = match self.nodes[node].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.alloc_node()?;
                    self.nodes[node].children[slot] = Some(child);
                    child
                }
            };
            consumed = true;
        }
        if !consumed {
            return Ok(());
        }
        let end = &mut self.nodes[node];
        match mode {
            InsertMode::MarkTerminal => end.terminal = true,
            InsertMode::IncrementFrequency => end.frequency += 1,
            InsertMode::Both => {
                end.terminal = true;
                end.frequency += 1;
            }
        }
        Ok(())
    }

    /// Follows the path for `key`, failing as soon as a child is missing.
    /// Returns the terminal flag and frequency at the final node.
    pub fn lookup_exact(&self, key: &str) -> Option<(bool, u64)> {
        let node = self.walk(ROOT, key)?;
        Some((self.nodes[node].terminal, self.nodes[node].frequency))
    }

    /// Subtree root for `prefix`, for enumeration; terminality not required.
    pub fn lookup_prefix_node(&self, prefix: &str) -> Option<NodeId> {
        self.walk(ROOT, prefix)
    }

    fn walk(&self, start: NodeId, key: &str) -> Option<NodeId> {
        let mut node = start;
        for ch in key.chars() {
            let Some(slot) = self.alphabet.encode(ch) else {
                continue;
            };
            node = self.nodes[node].children[slot]?;
        }
        Some(node)
    }

    /// Collects terminal descendants of `node` in preorder, ascending slot
    /// order, stopping once `limit` entries have been gathered. Keys are
    /// accumulated relative to `node`, so enumerating a prefix node yields
    /// completions rather than full words.
    pub fn enumerate(&self, node: NodeId, limit: usize) -> Vec<TrieEntry> {
        let mut entries = Vec::new();
        let mut buffer = String::new();
        self.collect(node, limit, &mut buffer, &mut entries);
        entries
    }

    fn collect(
        &self,
        node: NodeId,
        limit: usize,
        buffer: &mut String,
        entries: &mut Vec<TrieEntry>,
    ) {
        if entries.len() >= limit {
            return;
        }
        if self.nodes[node].terminal {
            entries.push(TrieEntry {
                key: buffer.clone(),
                frequency: self.nodes[node].frequency,
            });
        }
        for slot in 0..self.alphabet.width() {
            if let Some(child) = self.nodes[node].children[slot] {
                buffer.push(self.alphabet.decode(slot));
                self.collect(child, limit, buffer, entries);
                buffer.pop();
                if entries.len() >= limit {
                    return;
                }
            }
        }
    }
}
