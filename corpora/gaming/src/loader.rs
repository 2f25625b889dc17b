use std::path::Path;

use slangdex_core::glossary::LoadError;

use crate::records::{CommunityRecord, CuratedRecord, TaxonomyRecord};

/// The three raw datasets, as loaded
#[derive(Debug, Clone, Default)]
pub struct RawCorpus {
    pub curated: Vec<CuratedRecord>,
    pub taxonomy: Vec<TaxonomyRecord>,
    pub community: Vec<CommunityRecord>,
}

pub struct CorpusLoader;

impl CorpusLoader {
    /// Load the embedded datasets
    pub fn load_embedded() -> Result<RawCorpus, LoadError> {
        tracing::info!("Loading embedded gaming-slang corpus...");
        let curated: Vec<CuratedRecord> = parse(include_str!("../data/curated.json"))?;
        let taxonomy: Vec<TaxonomyRecord> = parse(include_str!("../data/taxonomy.json"))?;
        let community: Vec<CommunityRecord> = parse(include_str!("../data/community.json"))?;
        tracing::info!(
            curated = curated.len(),
            taxonomy = taxonomy.len(),
            community = community.len(),
            "Loaded embedded corpus"
        );
        Ok(RawCorpus {
            curated,
            taxonomy,
            community,
        })
    }

    /// Load an additional community dataset from a file path
    pub fn load_community_file(path: &Path) -> Result<Vec<CommunityRecord>, LoadError> {
        tracing::info!("Loading community records from file: {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::FileNotFound(path.display().to_string())
            } else {
                LoadError::IoError(e)
            }
        })?;
        let records: Vec<CommunityRecord> = parse(&json)?;
        tracing::info!("Loaded {} community records from file", records.len());
        Ok(records)
    }
}

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_corpus_loads() {
        let raw = CorpusLoader::load_embedded().unwrap();
        assert!(!raw.taxonomy.is_empty());
        assert!(!raw.community.is_empty());
        assert!(raw.curated.len() >= raw.taxonomy.len());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = CorpusLoader::load_community_file(Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
