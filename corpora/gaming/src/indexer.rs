use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use slangdex_core::glossary::{
    Glossary, GlossaryEntry, GlossaryMetadata, MatchType, SearchOptions,
};
use slangdex_core::normalize::fold_key;

use crate::aliases::{self, ShortForms};
use crate::clarify::Clarifications;
use crate::games::GameNames;
use crate::records::{CommunityRecord, CuratedRecord, TaxonomyRecord};
use crate::term::{Category, Provenance, Term};

/// Game-index bucket for terms attested in no particular game
pub const GENERAL_GAME: &str = "General";

/// Merged term collection with its derived indices.
///
/// Built once from the three raw datasets and never mutated afterwards;
/// every accessor is read-only and safe for any number of concurrent
/// readers.
pub struct TermIndex {
    terms: Vec<Term>,
    by_id: HashMap<String, usize>,
    game_index: BTreeMap<String, BTreeSet<String>>,
    category_index: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
    alias_index: HashMap<String, String>,
    short_forms: ShortForms,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub terms: usize,
    pub curated: usize,
    pub community: usize,
    pub merged: usize,
    pub games: usize,
    pub categories: usize,
}

impl TermIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            by_id: HashMap::new(),
            game_index: BTreeMap::new(),
            category_index: BTreeMap::new(),
            alias_index: HashMap::new(),
            short_forms: ShortForms::with_defaults(),
        }
    }

    /// Merge the three raw datasets into the canonical term collection.
    ///
    /// Three ordered passes: taxonomy (authoritative categories), community
    /// (games + provenance), curated summaries (fallback for taxonomy gaps).
    /// Malformed records degrade to defaults; the merge itself never fails,
    /// and identical inputs always produce an identical collection.
    pub fn build(
        curated: &[CuratedRecord],
        taxonomy: &[TaxonomyRecord],
        community: &[CommunityRecord],
    ) -> Self {
        let games = GameNames::with_defaults();
        let clarifications = Clarifications::with_defaults();

        let mut terms: Vec<Term> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for record in taxonomy {
            let id = record.title.trim();
            if id.is_empty() {
                tracing::debug!("skipping taxonomy record with blank title");
                continue;
            }
            let term = Term {
                id: id.to_string(),
                display_name: id.to_string(),
                definition: record.summary.trim().to_string(),
                games: vec![],
                category: Category::from_levels(
                    &record.level1,
                    &record.level2,
                    record.level3.as_deref(),
                ),
                source: Provenance::Curated,
                tags: vec![],
            };
            if let Some(&idx) = by_id.get(id) {
                // duplicate title: last record wins
                terms[idx] = term;
            } else {
                by_id.insert(id.to_string(), terms.len());
                terms.push(term);
            }
        }

        for record in community {
            let id = record.term.trim();
            if id.is_empty() {
                tracing::debug!("skipping community record with blank term");
                continue;
            }
            let game = games.canonicalize(&record.game);
            if let Some(&idx) = by_id.get(id) {
                let term = &mut terms[idx];
                if let Some(game) = game {
                    term.add_game(game);
                }
                // keep the curated definition
                if term.source == Provenance::Curated {
                    term.source = Provenance::Merged;
                }
            } else {
                let mut term = Term {
                    id: id.to_string(),
                    display_name: id.to_string(),
                    definition: record.definition.trim().to_string(),
                    games: vec![],
                    category: Category::community(),
                    source: Provenance::Community,
                    tags: vec!["community".to_string()],
                };
                if let Some(game) = game {
                    term.add_game(game);
                }
                by_id.insert(id.to_string(), terms.len());
                terms.push(term);
            }
        }

        // The taxonomy normally covers every curated title; fill the gaps
        // when it does not
        for record in curated {
            let id = record.title.trim();
            if id.is_empty() || by_id.contains_key(id) {
                continue;
            }
            by_id.insert(id.to_string(), terms.len());
            terms.push(Term {
                id: id.to_string(),
                display_name: id.to_string(),
                definition: record.summary.trim().to_string(),
                games: vec![],
                category: Category::uncategorized(),
                source: Provenance::Curated,
                tags: vec![],
            });
        }

        for term in &mut terms {
            clarifications.apply(term);
        }

        let mut index = Self {
            terms,
            by_id,
            game_index: BTreeMap::new(),
            category_index: BTreeMap::new(),
            alias_index: HashMap::new(),
            short_forms: ShortForms::with_defaults(),
        };
        index.build_indices();
        tracing::info!(
            terms = index.terms.len(),
            aliases = index.alias_index.len(),
            "term index built"
        );
        index
    }

    fn build_indices(&mut self) {
        for term in &self.terms {
            if term.games.is_empty() {
                self.game_index
                    .entry(GENERAL_GAME.to_string())
                    .or_default()
                    .insert(term.id.clone());
            } else {
                for game in &term.games {
                    self.game_index
                        .entry(game.clone())
                        .or_default()
                        .insert(term.id.clone());
                }
            }

            self.category_index
                .entry(term.category.level1.clone())
                .or_default()
                .entry(term.category.level2.clone())
                .or_default()
                .insert(term.id.clone());

            let mut candidates = aliases::expand(&term.id);
            candidates.extend(self.short_forms.aliases_for(&term.id));
            for candidate in candidates {
                let key = fold_key(&candidate);
                if key.is_empty() {
                    continue;
                }
                // first writer wins on alias collisions
                self.alias_index
                    .entry(key)
                    .or_insert_with(|| term.id.clone());
            }
        }
    }

    /// Resolve an id or alias to its term: exact id, then exact match of an
    /// input candidate, then folded candidates against the alias index.
    /// Absence is a value, not an error.
    pub fn get(&self, query: &str) -> Option<&Term> {
        if let Some(&idx) = self.by_id.get(query) {
            return self.terms.get(idx);
        }

        let trimmed = query.trim();
        let mut candidates = aliases::expand(trimmed);
        if let Some(canonical) = self.short_forms.canonical_for(trimmed) {
            candidates.push(canonical.clone());
        }

        for candidate in &candidates {
            if let Some(&idx) = self.by_id.get(candidate.as_str()) {
                return self.terms.get(idx);
            }
        }

        for candidate in &candidates {
            if let Some(id) = self.alias_index.get(&fold_key(candidate)) {
                return self.by_id.get(id).and_then(|&idx| self.terms.get(idx));
            }
        }

        None
    }

    /// All terms in merge (pass 1 → 2 → 3) order
    pub fn list_all(&self) -> &[Term] {
        &self.terms
    }

    /// Game name → ids attested there ("General" bucket for game-less terms)
    pub fn game_index(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.game_index
    }

    /// level1 → level2 → ids
    pub fn category_index(&self) -> &BTreeMap<String, BTreeMap<String, BTreeSet<String>>> {
        &self.category_index
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let mut curated = 0;
        let mut community = 0;
        let mut merged = 0;
        for term in &self.terms {
            match term.source {
                Provenance::Curated => curated += 1,
                Provenance::Community => community += 1,
                Provenance::Merged => merged += 1,
            }
        }
        IndexStats {
            terms: self.terms.len(),
            curated,
            community,
            merged,
            games: self
                .game_index
                .keys()
                .filter(|g| g.as_str() != GENERAL_GAME)
                .count(),
            categories: self.category_index.len(),
        }
    }
}

impl Default for TermIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Glossary for TermIndex {
    fn lookup_exact(&self, query: &str) -> Vec<Box<dyn GlossaryEntry>> {
        self.by_id
            .get(query)
            .and_then(|&idx| self.terms.get(idx))
            .map(|t| vec![Box::new(t.clone()) as Box<dyn GlossaryEntry>])
            .unwrap_or_default()
    }

    fn search(&self, query: &str, options: SearchOptions) -> Vec<Box<dyn GlossaryEntry>> {
        match options.match_type {
            MatchType::Exact => self.lookup_exact(query),
            MatchType::Prefix => self
                .terms
                .iter()
                .filter(|t| t.display_name.starts_with(query))
                .take(options.max_results)
                .map(|t| Box::new(t.clone()) as Box<dyn GlossaryEntry>)
                .collect(),
            MatchType::Contains => self
                .terms
                .iter()
                .filter(|t| t.display_name.contains(query))
                .take(options.max_results)
                .map(|t| Box::new(t.clone()) as Box<dyn GlossaryEntry>)
                .collect(),
        }
    }

    fn get_by_id(&self, id: &str) -> Option<Box<dyn GlossaryEntry>> {
        self.by_id
            .get(id)
            .and_then(|&idx| self.terms.get(idx))
            .map(|t| Box::new(t.clone()) as Box<dyn GlossaryEntry>)
    }

    fn metadata(&self) -> GlossaryMetadata {
        GlossaryMetadata {
            name: "slangdex-gaming".to_string(),
            version: "1.0".to_string(),
            language: "zh".to_string(),
            entry_count: self.terms.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy(level1: &str, level2: &str, level3: Option<&str>, title: &str, summary: &str) -> TaxonomyRecord {
        TaxonomyRecord {
            level1: level1.to_string(),
            level2: level2.to_string(),
            level3: level3.map(str::to_string),
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }

    fn community(term: &str, definition: &str, game: &str) -> CommunityRecord {
        CommunityRecord {
            term: term.to_string(),
            definition: definition.to_string(),
            game: game.to_string(),
        }
    }

    fn curated(title: &str, summary: &str) -> CuratedRecord {
        CuratedRecord {
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }

    fn sample() -> TermIndex {
        let taxonomy_records = vec![
            taxonomy("Combat", "Roles", None, "坦克", "抗伤害角色"),
            taxonomy("Combat", "Roles", Some("Core"), "C位（Carry位）", "队伍核心输出位置"),
            taxonomy("Communication", "Etiquette", None, "GG", "对局结束时表示认可"),
        ];
        let community_records = vec![
            community("坦克", "tank role", "LoL (League of Legends)"),
            community("坦克", "主坦", "英雄联盟"),
            community("白给", "没有价值地送掉人头", "CSGO"),
        ];
        let curated_records = vec![
            curated("坦克", "抗伤害角色"),
            curated("开黑", "和朋友组队开语音一起打游戏"),
        ];
        TermIndex::build(&curated_records, &taxonomy_records, &community_records)
    }

    #[test]
    fn merged_term_unions_games_and_flips_provenance() {
        let index = sample();
        let term = index.get("坦克").unwrap();
        assert_eq!(term.source, Provenance::Merged);
        assert_eq!(term.games, vec!["英雄联盟"]);
        assert_eq!(term.category.level1, "Combat");
        // curated definition retained over the community one
        assert!(term.definition.starts_with("抗伤害角色"));
    }

    #[test]
    fn community_only_term_gets_default_category_and_tag() {
        let index = sample();
        let term = index.get("白给").unwrap();
        assert_eq!(term.source, Provenance::Community);
        assert_eq!(term.category, Category::community());
        assert!(term.tags.contains(&"community".to_string()));
        assert_eq!(term.games, vec!["CS:GO"]);
    }

    #[test]
    fn fallback_pass_fills_taxonomy_gaps() {
        let index = sample();
        let term = index.get("开黑").unwrap();
        assert_eq!(term.source, Provenance::Curated);
        assert_eq!(term.category, Category::uncategorized());
    }

    #[test]
    fn merge_is_idempotent() {
        let a = sample();
        let b = sample();
        assert_eq!(a.list_all(), b.list_all());
    }

    #[test]
    fn every_input_id_resolves() {
        let index = sample();
        for id in ["坦克", "C位（Carry位）", "GG", "白给", "开黑"] {
            assert!(index.get(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn alias_resolution_strips_parentheticals() {
        let index = sample();
        let full = index.get("C位（Carry位）").unwrap();
        let stripped = index.get("C位").unwrap();
        assert_eq!(full.id, stripped.id);
        assert_eq!(index.get("c位").unwrap().id, full.id);
    }

    #[test]
    fn short_forms_resolve_through_the_static_table() {
        let index = sample();
        assert_eq!(index.get("mt").unwrap().id, "坦克");
        assert_eq!(index.get("gg").unwrap().id, "GG");
    }

    #[test]
    fn unknown_queries_are_absent_not_errors() {
        let index = sample();
        assert!(index.get("不存在的词").is_none());
        assert!(index.get("").is_none());
    }

    #[test]
    fn game_index_covers_every_term() {
        let index = sample();
        for term in index.list_all() {
            if term.games.is_empty() {
                assert!(index.game_index()[GENERAL_GAME].contains(&term.id));
            } else {
                for game in &term.games {
                    assert!(index.game_index()[game].contains(&term.id));
                }
            }
        }
    }

    #[test]
    fn category_index_covers_every_term() {
        let index = sample();
        for term in index.list_all() {
            let ids = &index.category_index()[&term.category.level1][&term.category.level2];
            assert!(ids.contains(&term.id));
        }
    }

    #[test]
    fn malformed_records_degrade_to_defaults() {
        let taxonomy_records = vec![
            taxonomy("", "", None, "空分类", ""),
            taxonomy("Combat", "Roles", None, "", "no title"),
        ];
        let index = TermIndex::build(&[], &taxonomy_records, &[]);
        assert_eq!(index.len(), 1);
        let term = index.get("空分类").unwrap();
        assert_eq!(term.category.level1, "Uncategorized");
        assert_eq!(term.category.level2, "General");
    }

    #[test]
    fn blank_game_leaves_term_general() {
        let index = TermIndex::build(&[], &[], &[community("solo", "独自排位上分", "  ")]);
        let term = index.get("solo").unwrap();
        assert!(term.games.is_empty());
        assert!(index.game_index()[GENERAL_GAME].contains(&term.id));
    }

    #[test]
    fn community_duplicate_of_community_term_stays_community() {
        let records = vec![
            community("破防", "防御被打穿，也指心态绷不住了", "原神"),
            community("破防", "心态炸了", "王者荣耀"),
        ];
        let index = TermIndex::build(&[], &[], &records);
        let term = index.get("破防").unwrap();
        assert_eq!(term.source, Provenance::Community);
        assert_eq!(term.games, vec!["原神", "王者荣耀"]);
        // first definition wins
        assert!(term.definition.starts_with("防御被打穿"));
    }

    #[test]
    fn prefix_and_contains_search_scan_display_names() {
        let index = sample();
        let found = index.search(
            "C位",
            SearchOptions {
                max_results: 10,
                match_type: MatchType::Prefix,
            },
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "C位（Carry位）");

        let found = index.search(
            "位",
            SearchOptions {
                max_results: 10,
                match_type: MatchType::Contains,
            },
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn stats_count_provenance_buckets() {
        let index = sample();
        let stats = index.stats();
        assert_eq!(stats.terms, 5);
        assert_eq!(stats.merged, 1);
        assert_eq!(stats.community, 1);
        assert_eq!(stats.curated, 3);
    }
}
