use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::preprocess::fold_case;

/// A dictionary term (single word or short phrase) and its gesture description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossEntry {
    pub term: String,
    pub gloss: String,
}

impl GlossEntry {
    pub fn new(term: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            gloss: gloss.into(),
        }
    }
}

/// Read-only gloss lookup operations
pub trait GlossDictionary: Send + Sync {
    /// All entries in dictionary order. The order decides which phrase wins
    /// when several of them occur in the same text.
    fn entries(&self) -> &[GlossEntry];

    /// Search dictionary by exact (already normalized) term
    fn lookup_exact(&self, term: &str) -> Option<&GlossEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    /// Primary language the glosses are authored for
    pub language: String,
    pub entry_count: usize,
}

/// Immutable ordered gloss table.
///
/// Terms are case-folded and trimmed on construction and must be unique.
/// Nothing mutates the table afterwards, so it can be shared between
/// concurrent requests behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct GlossTable {
    entries: Vec<GlossEntry>,
    index: HashMap<String, usize>,
}

impl GlossTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries in their intended iteration order
    pub fn from_entries<I>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = GlossEntry>,
    {
        let mut table = Self::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let term = fold_case(entry.term.trim());
            if term.is_empty() {
                return Err(LoadError::EmptyTerm { position });
            }
            if table.index.contains_key(&term) {
                return Err(LoadError::DuplicateTerm(term));
            }

            table.index.insert(term.clone(), table.entries.len());
            table.entries.push(GlossEntry {
                term,
                gloss: entry.gloss,
            });
        }

        Ok(table)
    }

    pub fn entries(&self) -> &[GlossEntry] {
        &self.entries
    }

    pub fn get(&self, term: &str) -> Option<&GlossEntry> {
        self.index.get(term).and_then(|&idx| self.entries.get(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlossDictionary for GlossTable {
    fn entries(&self) -> &[GlossEntry] {
        &self.entries
    }

    fn lookup_exact(&self, term: &str) -> Option<&GlossEntry> {
        self.get(term)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "inline".to_string(),
            version: "0".to_string(),
            language: String::new(),
            entry_count: self.entries.len(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Duplicate term: {0}")]
    DuplicateTerm(String),

    #[error("Empty term at position {position}")]
    EmptyTerm { position: usize },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
