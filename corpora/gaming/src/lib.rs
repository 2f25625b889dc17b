pub mod aliases;
pub mod clarify;
pub mod games;
pub mod indexer;
pub mod loader;
pub mod processor;
pub mod quiz;
pub mod records;
pub mod term;

pub use clarify::{CLARIFY_MARKER, Clarifications};
pub use games::GameNames;
pub use indexer::{GENERAL_GAME, IndexStats, TermIndex};
pub use loader::{CorpusLoader, RawCorpus};
pub use processor::SlangProcessor;
pub use quiz::{QuizItem, QuizOptions};
pub use records::{CommunityRecord, CuratedRecord, TaxonomyRecord};
pub use term::{Category, Provenance, Term};
