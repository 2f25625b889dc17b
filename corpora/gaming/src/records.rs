use serde::Deserialize;

/// Curated taxonomy record: authoritative for category assignment.
///
/// Every field is defaulted so a partial record degrades to empty strings
/// instead of failing the whole dataset parse.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyRecord {
    #[serde(default)]
    pub level1: String,
    #[serde(default)]
    pub level2: String,
    #[serde(default)]
    pub level3: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

/// Community-scraped record, attested in one game
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityRecord {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub game: String,
}

/// Curated summary record, consumed by the fallback pass
#[derive(Debug, Clone, Deserialize)]
pub struct CuratedRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}
