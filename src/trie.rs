//! Radix tree for dictionary-based word breaking.
//!
//! The Trie stores dictionary words as compressed edges (each edge carries a
//! run of characters shared by every word below it) and answers longest-prefix
//! queries in time proportional to the length of the match, not the size of
//! the dictionary.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{self, BufRead};

/// A node in the Trie
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Edge label leading into this node (empty only for the root)
    label: String,
    /// Children nodes, keyed by the first character of their label
    children: HashMap<char, TrieNode>,
    /// Whether this node marks the end of a valid word
    is_leaf: bool,
}

impl TrieNode {
    fn leaf(label: &str) -> Self {
        TrieNode {
            label: label.to_string(),
            children: HashMap::new(),
            is_leaf: true,
        }
    }

    /// Insert `key` below this node. Returns true if a new word was added.
    fn insert(&mut self, key: &str) -> bool {
        let Some(first) = key.chars().next() else {
            let added = !self.is_leaf;
            self.is_leaf = true;
            return added;
        };

        match self.children.entry(first) {
            Entry::Vacant(slot) => {
                slot.insert(TrieNode::leaf(key));
                true
            }
            Entry::Occupied(mut slot) => {
                let child = slot.get_mut();
                let common = common_prefix_len(&child.label, key);
                if common < child.label.len() {
                    child.split_at(common);
                }
                child.insert(&key[common..])
            }
        }
    }

    /// Split this node's label at byte offset `at` (a char boundary), pushing
    /// the tail of the label and all existing children one level down.
    fn split_at(&mut self, at: usize) {
        let tail = self.label.split_off(at);
        let Some(first) = tail.chars().next() else {
            return;
        };
        let lower = TrieNode {
            label: tail,
            children: std::mem::take(&mut self.children),
            is_leaf: self.is_leaf,
        };
        self.is_leaf = false;
        self.children.insert(first, lower);
    }

    fn collect_words(&self, prefix: &mut String, out: &mut Vec<String>) {
        let mark = prefix.len();
        prefix.push_str(&self.label);
        if self.is_leaf {
            out.push(prefix.clone());
        }
        for child in self.children.values() {
            child.collect_words(prefix, out);
        }
        prefix.truncate(mark);
    }
}

/// Byte length of the longest common prefix of `a` and `b`, always on a char boundary.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, c), _)| i + c.len_utf8())
}

/// A compressed prefix tree holding the word list
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of words in the trie
    word_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a word to the trie.
    ///
    /// Returns `true` if the word was not present before. Empty words are
    /// ignored, and inserting a word twice is a no-op.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let added = self.root.insert(word);
        if added {
            self.word_count += 1;
        }
        added
    }

    /// Check if a word exists in the trie
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        let mut rest = word;
        loop {
            let Some(first) = rest.chars().next() else {
                return node.is_leaf;
            };
            match node.children.get(&first) {
                Some(child) if rest.starts_with(child.label.as_str()) => {
                    rest = &rest[child.label.len()..];
                    node = child;
                }
                _ => return false,
            }
        }
    }

    /// Find the longest word in the trie that is a prefix of `text`.
    ///
    /// The returned slice borrows from `text`.
    pub fn longest_prefix<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut node = &self.root;
        let mut consumed = 0;
        let mut best = None;

        while let Some(first) = text[consumed..].chars().next() {
            let Some(child) = node.children.get(&first) else {
                break;
            };
            if !text[consumed..].starts_with(child.label.as_str()) {
                break;
            }
            consumed += child.label.len();
            if child.is_leaf {
                best = Some(consumed);
            }
            node = child;
        }

        best.map(|end| &text[..end])
    }

    /// Add every word of `other` to this trie
    pub fn merge(&mut self, other: &Trie) {
        self.extend(other.words());
    }

    /// All words in the trie, in no particular order
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.word_count);
        self.root.collect_words(&mut String::new(), &mut out);
        out
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Normalize one line of a word list; `None` for lines that carry no word.
fn word_from_line(line: &str) -> Option<&str> {
    let word = line.trim();
    (!word.is_empty()).then_some(word)
}

/// Builder for loading a Trie from newline-delimited word lists
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        TrieBuilder { trie: Trie::new() }
    }

    /// Load words from an in-memory word list (one word per line)
    pub fn load_words(&mut self, content: &str) -> &mut Self {
        for word in content.lines().filter_map(word_from_line) {
            self.trie.insert(word);
        }
        self
    }

    /// Load words from any line-oriented reader.
    ///
    /// Returns the number of lines read.
    pub fn read_words<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut lines = 0;
        for line in reader.lines() {
            let line = line?;
            lines += 1;
            if let Some(word) = word_from_line(&line) {
                self.trie.insert(word);
            }
        }
        Ok(lines)
    }

    /// Build and return the Trie
    pub fn build(self) -> Trie {
        self.trie
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
