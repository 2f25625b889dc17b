use std::collections::HashMap;

use serde::Serialize;
use slangdex_core::corpus::TermCard;
use slangdex_core::glossary::{Definition, GlossaryEntry};

/// Three-tier category, level1/level2 always populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub level1: String,
    pub level2: String,
    pub level3: Option<String>,
}

impl Category {
    /// Placeholder category for curated terms the taxonomy missed
    pub fn uncategorized() -> Self {
        Self {
            level1: "Uncategorized".to_string(),
            level2: "General".to_string(),
            level3: None,
        }
    }

    /// Catch-all category for community-only terms
    pub fn community() -> Self {
        Self {
            level1: "Community Slang".to_string(),
            level2: "Other".to_string(),
            level3: None,
        }
    }

    /// Build from raw taxonomy levels, defaulting blanks
    pub fn from_levels(level1: &str, level2: &str, level3: Option<&str>) -> Self {
        let level1 = level1.trim();
        let level2 = level2.trim();
        let level3 = level3.map(str::trim).filter(|l| !l.is_empty());
        Self {
            level1: if level1.is_empty() {
                "Uncategorized".to_string()
            } else {
                level1.to_string()
            },
            level2: if level2.is_empty() {
                "General".to_string()
            } else {
                level2.to_string()
            },
            level3: level3.map(str::to_string),
        }
    }

    /// Category path, broadest first
    pub fn path(&self) -> Vec<String> {
        let mut path = vec![self.level1.clone(), self.level2.clone()];
        if let Some(level3) = &self.level3 {
            path.push(level3.clone());
        }
        path
    }
}

/// Which source(s) contributed to a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Curated,
    Community,
    Merged,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Curated => "curated",
            Provenance::Community => "community",
            Provenance::Merged => "merged",
        }
    }
}

/// Canonical merged slang term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub id: String,
    pub display_name: String,
    pub definition: String,
    /// Canonical game names, insertion-ordered, no duplicates; empty means
    /// the term is general/universal
    pub games: Vec<String>,
    pub category: Category,
    pub source: Provenance,
    pub tags: Vec<String>,
}

impl Term {
    /// Add a canonical game name, keeping set semantics
    pub fn add_game(&mut self, game: String) {
        if !game.is_empty() && !self.games.contains(&game) {
            self.games.push(game);
        }
    }

    /// Add a tag, keeping set semantics
    pub fn add_tag(&mut self, tag: String) {
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

impl GlossaryEntry for Term {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn headword(&self) -> String {
        if self.display_name.is_empty() {
            self.id.clone()
        } else {
            self.display_name.clone()
        }
    }

    fn definitions(&self) -> Vec<Definition> {
        vec![Definition {
            text: self.definition.clone(),
            tags: self.tags.clone(),
        }]
    }

    fn metadata(&self) -> serde_json::Value {
        serde_json::json!({
            "games": self.games,
            "category": self.category.path(),
            "source": self.source.as_str(),
            "tags": self.tags,
        })
    }

    fn to_card(&self) -> TermCard {
        TermCard {
            term: self.headword(),
            definition: self.definition.clone(),
            games: self.games.clone(),
            category: self.category.path(),
            metadata: HashMap::new(),
        }
    }
}
