use std::path::Path;

use slangdex_core::corpus::{CorpusProcessor, TermCard};
use slangdex_core::glossary::GlossaryEntry;
use slangdex_core::normalize::collapse_whitespace;
use unicode_normalization::UnicodeNormalization;

use crate::indexer::TermIndex;
use crate::loader::{CorpusLoader, RawCorpus};
use crate::quiz::{self, QuizItem, QuizOptions};
use crate::term::Term;

/// Gaming-slang corpus processor
pub struct SlangProcessor {
    index: TermIndex,
}

impl SlangProcessor {
    /// Create a processor over the embedded corpus
    pub fn new() -> Self {
        Self::with_additional_sources(&[])
    }

    /// Create a processor, merging extra community datasets over the
    /// embedded corpus
    pub fn with_additional_sources(additional_paths: &[String]) -> Self {
        let mut raw = CorpusLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded corpus: {}", e);
            tracing::warn!("Starting with an empty corpus");
            RawCorpus::default()
        });

        for path in additional_paths {
            match CorpusLoader::load_community_file(Path::new(path)) {
                Ok(records) => {
                    tracing::info!(
                        "Merging {} community records from: {}",
                        records.len(),
                        path
                    );
                    raw.community.extend(records);
                }
                Err(e) => {
                    tracing::warn!("Failed to load community records from {}: {}", path, e);
                }
            }
        }

        Self {
            index: TermIndex::build(&raw.curated, &raw.taxonomy, &raw.community),
        }
    }

    /// Create a processor with no terms at all
    pub fn empty() -> Self {
        Self {
            index: TermIndex::new(),
        }
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Generate a quiz bank from the corpus
    pub fn quiz(&self, options: &QuizOptions) -> Vec<QuizItem> {
        quiz::generate(&self.index, options)
    }

    fn card_for(&self, term: &Term) -> TermCard {
        let mut card = term.to_card();
        card.metadata
            .insert("source".to_string(), term.source.as_str().to_string());
        if !term.tags.is_empty() {
            card.metadata
                .insert("tags".to_string(), term.tags.join(","));
        }
        card
    }
}

impl Default for SlangProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusProcessor for SlangProcessor {
    fn corpus_code(&self) -> &str {
        "gaming-zh"
    }

    fn normalize(&self, text: &str) -> String {
        collapse_whitespace(&text.nfkc().collect::<String>())
    }

    fn resolve(&self, query: &str) -> Option<TermCard> {
        let term = self
            .index
            .get(query)
            .or_else(|| self.index.get(self.normalize(query).as_str()))?;
        Some(self.card_for(term))
    }

    fn cards(&self) -> Vec<TermCard> {
        self.index
            .list_all()
            .iter()
            .map(|t| self.card_for(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Provenance;

    #[test]
    fn embedded_corpus_resolves_and_renders_cards() {
        let processor = SlangProcessor::new();
        assert!(!processor.index().is_empty());

        let card = processor.resolve("gg").unwrap();
        assert_eq!(card.term, "GG");
        assert_eq!(card.metadata.get("source").map(String::as_str), Some("merged"));

        assert_eq!(processor.cards().len(), processor.index().len());
    }

    #[test]
    fn full_width_queries_resolve_through_normalization() {
        let processor = SlangProcessor::new();
        let card = processor.resolve("ＧＧ").unwrap();
        assert_eq!(card.term, "GG");
    }

    #[test]
    fn community_only_terms_carry_their_tag() {
        let processor = SlangProcessor::new();
        let term = processor.index().get("破防").unwrap();
        assert_eq!(term.source, Provenance::Community);
        let card = processor.resolve("破防").unwrap();
        assert_eq!(card.metadata.get("tags").map(String::as_str), Some("community"));
    }
}
