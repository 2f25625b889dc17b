use std::collections::HashMap;

use crate::corpus::TermCard;

/// Glossary lookup operations
pub trait Glossary: Send + Sync {
    /// Search glossary by exact match
    fn lookup_exact(&self, query: &str) -> Vec<Box<dyn GlossaryEntry>>;

    /// Search glossary with options
    fn search(&self, query: &str, options: SearchOptions) -> Vec<Box<dyn GlossaryEntry>>;

    /// Get entry by canonical ID if present
    fn get_by_id(&self, id: &str) -> Option<Box<dyn GlossaryEntry>>;

    /// Get glossary metadata
    fn metadata(&self) -> GlossaryMetadata;
}

/// Individual glossary entry
pub trait GlossaryEntry: Send + Sync {
    /// Canonical entry ID
    fn id(&self) -> String;

    /// Main headword/term
    fn headword(&self) -> String;

    /// All definitions
    fn definitions(&self) -> Vec<Definition>;

    /// Corpus-specific data as JSON
    fn metadata(&self) -> serde_json::Value;

    /// Convert to generic term card
    fn to_card(&self) -> TermCard {
        TermCard {
            term: self.headword(),
            definition: self
                .definitions()
                .iter()
                .map(|d| d.text.clone())
                .collect::<Vec<_>>()
                .join("; "),
            games: vec![],
            category: vec![],
            metadata: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub max_results: usize,
    pub match_type: MatchType,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 10,
            match_type: MatchType::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MatchType {
    Exact,
    Prefix,
    Contains,
}

#[derive(Debug, Clone)]
pub struct GlossaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, Clone)]
pub struct Definition {
    pub text: String,
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
