use std::collections::HashMap;

use serde::Serialize;

/// Lookup interface a term corpus exposes to display collaborators
pub trait CorpusProcessor: Send + Sync {
    /// Corpus identifier ("gaming-zh", etc.)
    fn corpus_code(&self) -> &str;

    /// Normalize a raw query (Unicode normalization, whitespace, case)
    fn normalize(&self, text: &str) -> String;

    /// Resolve a query to its term card; None when nothing matches
    fn resolve(&self, query: &str) -> Option<TermCard>;

    /// All cards in corpus order
    fn cards(&self) -> Vec<TermCard>;
}

/// Display-ready view of one term
#[derive(Debug, Clone, Serialize)]
pub struct TermCard {
    pub term: String,
    pub definition: String,
    /// Canonical game names; empty means the term is general/universal
    pub games: Vec<String>,
    /// Category path, broadest level first
    pub category: Vec<String>,
    pub metadata: HashMap<String, String>,
}
