use std::collections::HashMap;

use slangdex_core::normalize::{collapse_whitespace, fold_key, strip_parentheticals};

/// Separator set for the broad split step of alias generation
const DELIMITERS: &[char] = &[
    ' ', '\t', '/', '／', ',', '，', '、', ';', '；', '|', '·', '~', '～',
];

/// Static short-form table: acronyms and single-letter shorthands mapped to
/// the canonical id they conventionally refer to.
pub struct ShortForms {
    by_alias: HashMap<String, String>,
}

impl ShortForms {
    /// Create empty short-form table
    pub fn new() -> Self {
        Self {
            by_alias: HashMap::new(),
        }
    }

    /// Create with the embedded short forms
    pub fn with_defaults() -> Self {
        let mut by_alias = HashMap::new();

        let forms = [
            ("gg", "GG"),
            ("glhf", "GLHF"),
            ("gl hf", "GLHF"),
            ("afk", "AFK"),
            ("op", "OP"),
            ("mvp", "MVP"),
            ("adc", "ADC"),
            ("c", "C位"),
            ("carry", "C位"),
            ("t", "坦克"),
            ("mt", "坦克"),
        ];

        for (alias, canonical) in forms {
            by_alias.insert(alias.to_string(), canonical.to_string());
        }

        Self { by_alias }
    }

    /// Canonical id a short form points at, keyed on the folded alias
    pub fn canonical_for(&self, alias: &str) -> Option<&String> {
        self.by_alias.get(&fold_key(alias))
    }

    /// All short forms pointing at an id, sorted for stable iteration
    pub fn aliases_for(&self, id: &str) -> Vec<String> {
        let mut aliases: Vec<String> = self
            .by_alias
            .iter()
            .filter(|(_, canonical)| canonical.as_str() == id)
            .map(|(alias, _)| alias.clone())
            .collect();
        aliases.sort();
        aliases
    }
}

/// Heuristic alias candidates for a string: the string itself, case
/// variants, the parenthetical-stripped form, slash parts, and
/// broad-delimiter parts. Order is stable; duplicates are dropped.
pub fn expand(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut out = Vec::new();

    push_unique(&mut out, text.to_string());
    push_unique(&mut out, text.to_uppercase());
    push_unique(&mut out, text.to_lowercase());
    push_unique(
        &mut out,
        collapse_whitespace(&strip_parentheticals(text)),
    );

    for part in text.split('/') {
        push_unique(&mut out, part.trim().to_string());
    }
    for part in text.split(DELIMITERS) {
        push_unique(&mut out, part.trim().to_string());
    }

    out
}

fn push_unique(list: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !list.contains(&candidate) {
        list.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_covers_case_and_paren_variants() {
        let candidates = expand("C位（Carry位）");
        assert!(candidates.contains(&"C位".to_string()));
        assert!(candidates.contains(&"c位（carry位）".to_string()));
    }

    #[test]
    fn expand_splits_on_slash_and_delimiters() {
        let candidates = expand("坦克/肉盾");
        assert!(candidates.contains(&"坦克".to_string()));
        assert!(candidates.contains(&"肉盾".to_string()));

        let candidates = expand("走A，平A");
        assert!(candidates.contains(&"走A".to_string()));
        assert!(candidates.contains(&"平A".to_string()));
    }

    #[test]
    fn expand_drops_blank_parts() {
        let candidates = expand("GG");
        assert!(!candidates.iter().any(|c| c.is_empty()));
    }

    #[test]
    fn short_forms_resolve_both_directions() {
        let forms = ShortForms::with_defaults();
        assert_eq!(forms.canonical_for("GG"), Some(&"GG".to_string()));
        assert_eq!(forms.canonical_for("mt"), Some(&"坦克".to_string()));
        assert_eq!(forms.aliases_for("坦克"), vec!["mt", "t"]);
    }
}
