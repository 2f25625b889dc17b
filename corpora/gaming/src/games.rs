use std::collections::HashMap;

use slangdex_core::normalize::{collapse_whitespace, fold_key, strip_parentheticals};

/// Best-effort game-name canonicalization
pub struct GameNames {
    canonical: HashMap<String, String>,
}

impl GameNames {
    /// Create empty canonicalization table
    pub fn new() -> Self {
        Self {
            canonical: HashMap::new(),
        }
    }

    /// Create with embedded spellings for well-known games
    pub fn with_defaults() -> Self {
        let mut canonical = HashMap::new();

        // Keys are fold_key-normalized variants; values are display labels
        let variants = [
            ("lol", "英雄联盟"),
            ("league of legends", "英雄联盟"),
            ("英雄联盟", "英雄联盟"),
            ("撸啊撸", "英雄联盟"),
            ("csgo", "CS:GO"),
            ("cs:go", "CS:GO"),
            ("cs go", "CS:GO"),
            ("cs2", "CS:GO"),
            ("counter-strike", "CS:GO"),
            ("反恐精英", "CS:GO"),
            ("dota", "DOTA2"),
            ("dota2", "DOTA2"),
            ("dota 2", "DOTA2"),
            ("刀塔", "DOTA2"),
            ("王者荣耀", "王者荣耀"),
            ("wzry", "王者荣耀"),
            ("honor of kings", "王者荣耀"),
            ("hok", "王者荣耀"),
            ("原神", "原神"),
            ("genshin", "原神"),
            ("genshin impact", "原神"),
            ("pubg", "绝地求生"),
            ("绝地求生", "绝地求生"),
            ("吃鸡", "绝地求生"),
            ("overwatch", "守望先锋"),
            ("ow", "守望先锋"),
            ("守望先锋", "守望先锋"),
            ("minecraft", "我的世界"),
            ("mc", "我的世界"),
            ("我的世界", "我的世界"),
            ("valorant", "无畏契约"),
            ("无畏契约", "无畏契约"),
            ("hearthstone", "炉石传说"),
            ("hs", "炉石传说"),
            ("炉石传说", "炉石传说"),
        ];

        for (variant, label) in variants {
            canonical.insert(variant.to_string(), label.to_string());
        }

        Self { canonical }
    }

    /// Canonicalize a raw game field. Unknown names pass through trimmed
    /// (parentheticals dropped); blank input yields None.
    pub fn canonicalize(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Folding strips parentheticals, so "LoL (League of Legends)"
        // matches through its base form first
        if let Some(label) = self.canonical.get(&fold_key(trimmed)) {
            return Some(label.clone());
        }

        // Then through each parenthetical segment on its own
        for content in paren_contents(trimmed) {
            if let Some(label) = self.canonical.get(&fold_key(&content)) {
                return Some(label.clone());
            }
        }

        let base = collapse_whitespace(&strip_parentheticals(trimmed));
        if base.is_empty() {
            Some(collapse_whitespace(trimmed))
        } else {
            Some(base)
        }
    }
}

/// Top-level parenthetical segments, both ASCII and full-width pairs
fn paren_contents(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;
    for c in text.chars() {
        match c {
            '(' | '（' => {
                if depth == 0 {
                    current.clear();
                }
                depth += 1;
            }
            ')' | '）' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && !current.is_empty() {
                    segments.push(current.clone());
                    current.clear();
                }
            }
            _ if depth > 0 => current.push(c),
            _ => {}
        }
    }
    segments
}
