//! Symbol sets - the faces a deck is built from
//!
//! A symbol set is an ordered list of named faces. [`Symbol`] ids are indices
//! into the set, so the core only compares ids while the views ask the set
//! for something printable.

use crate::types::Symbol;

/// Display data for one face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Full name, e.g. "hedgehog"
    pub name: String,
    /// Short label that fits inside a board cell
    pub label: String,
}

/// Ordered collection of card faces
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSet {
    entries: Vec<SymbolInfo>,
}

const ANIMALS: [(&str, &str); 18] = [
    ("bee", "BEE"),
    ("lion", "LIO"),
    ("owl", "OWL"),
    ("cat", "CAT"),
    ("bear", "BEA"),
    ("bird", "BRD"),
    ("cow", "COW"),
    ("crocodile", "CRO"),
    ("dog", "DOG"),
    ("donkey", "DON"),
    ("elephant", "ELE"),
    ("hedgehog", "HOG"),
    ("monkey", "MON"),
    ("sheep", "SHP"),
    ("stork", "STK"),
    ("seagull", "GUL"),
    ("squirrel", "SQR"),
    ("toucan", "TOU"),
];

impl SymbolSet {
    /// Build a set from `(name, label)` pairs.
    pub fn new<I, N, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, label)| SymbolInfo {
                    name: name.into(),
                    label: label.into(),
                })
                .collect(),
        }
    }

    /// The default 18 animals, enough for a full 6x6 board.
    pub fn animals() -> Self {
        Self::new(ANIMALS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of every face in the set, in set order
    pub fn symbols(&self) -> Vec<Symbol> {
        (0..self.entries.len() as u16).map(Symbol).collect()
    }

    pub fn get(&self, symbol: Symbol) -> Option<&SymbolInfo> {
        self.entries.get(symbol.0 as usize)
    }

    /// Board label for `symbol`, or `"?"` for an id outside the set.
    pub fn label(&self, symbol: Symbol) -> &str {
        self.get(symbol).map(|s| s.label.as_str()).unwrap_or("?")
    }

    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.get(symbol).map(|s| s.name.as_str())
    }
}
