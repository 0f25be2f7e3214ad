//! Trie-backed word dictionary: exact membership plus definition retrieval.
//!
//! Built once per game session from a word list and immutable afterwards.

use crate::word::{Word, ALPHABET_SIZE};

/// One trie node. Uses array-based child storage instead of a `HashMap` since
/// edges are limited to 'A'-'Z'; this also makes traversal order deterministic
/// (pre-order by edge letter).
#[derive(Debug)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    /// A terminal node ends a complete stored word.
    terminal: bool,
    definition: Option<String>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            children: [const { None }; ALPHABET_SIZE],
            terminal: false,
            definition: None,
        }
    }
}

/// Convert an edge character to a child index, 'A' -> 0 through 'Z' -> 25.
///
/// Returns `None` for anything else: lookups take raw player input (drag
/// selections, claimed words), so out-of-alphabet characters mean "not
/// stored", not a programming error.
#[inline]
fn letter_to_index(c: char) -> Option<usize> {
    match c {
        'A'..='Z' => Some((c as u8 - b'A') as usize),
        _ => None,
    }
}

/// The set of placeable words, with optional definitions on terminal nodes.
#[derive(Debug, Default)]
pub struct Dictionary {
    root: Node,
    word_count: usize,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating the character path as needed and marking the
    /// final node terminal. Idempotent on repeats; the last definition wins.
    pub fn insert(&mut self, word: &Word) {
        let mut node = &mut self.root;
        for c in word.text().chars() {
            // Word validation guarantees A-Z, so the index always exists.
            let i = (c as u8 - b'A') as usize;
            node = node.children[i].get_or_insert_with(Box::default);
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        node.definition = word.definition().map(str::to_string);
    }

    /// Exact-match membership. Fails fast on the first missing edge; prefixes
    /// of stored words are not themselves members unless separately inserted.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(|n| n.terminal)
    }

    /// The stored definition for an exact match, if the word is stored and a
    /// definition was attached.
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.node(word)
            .filter(|n| n.terminal)
            .and_then(|n| n.definition.as_deref())
    }

    /// Every stored word with its definition, by full tree traversal.
    ///
    /// The order is pre-order by edge letter (lexicographic by path), which is
    /// deterministic but not insertion order; callers must not rely on a
    /// specific order.
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        let mut out = Vec::with_capacity(self.word_count);
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut out);
        out
    }

    /// Number of distinct stored words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Walk the edge path for `word`; `None` as soon as an edge is absent.
    fn node(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in word.chars() {
            let i = letter_to_index(c)?;
            node = node.children[i].as_deref()?;
        }
        Some(node)
    }
}

fn collect_words(node: &Node, path: &mut String, out: &mut Vec<Word>) {
    if node.terminal {
        out.push(Word::from_parts(path.clone(), node.definition.clone()));
    }
    for (i, child) in node.children.iter().enumerate() {
        if let Some(child) = child {
            path.push((b'A' + i as u8) as char);
            collect_words(child, path, out);
            path.pop();
        }
    }
}
