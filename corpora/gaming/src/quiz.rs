use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::indexer::TermIndex;
use crate::term::Term;

/// Characters of the definition embedded in the question text
const QUESTION_PREFIX_CHARS: usize = 40;

/// One multiple-choice quiz item
#[derive(Debug, Clone, Serialize)]
pub struct QuizItem {
    pub id: Uuid,
    pub question: String,
    /// Shuffled display names, the answer among them exactly once
    pub options: Vec<String>,
    pub answer: String,
    /// Resolvable via the index the item was generated from
    pub term_id: String,
}

#[derive(Debug, Clone)]
pub struct QuizOptions {
    pub count: usize,
    pub option_count: usize,
    /// Terms with shorter definitions are excluded from the pool
    pub min_definition_chars: usize,
    /// Cap on distractor re-draws before the option list shrinks
    pub max_draw_attempts: usize,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            count: 5,
            option_count: 4,
            min_definition_chars: 10,
            max_draw_attempts: 32,
        }
    }
}

/// Generate a quiz bank with the thread-local RNG
pub fn generate(index: &TermIndex, options: &QuizOptions) -> Vec<QuizItem> {
    generate_with_rng(index, options, &mut rand::thread_rng())
}

/// Generate a quiz bank with a caller-supplied RNG (seedable for tests).
///
/// Targets are drawn without replacement, so an under-populated pool ends
/// generation early instead of looping; distractor draws are capped and the
/// option list shrinks when the pool cannot fill it.
pub fn generate_with_rng(
    index: &TermIndex,
    options: &QuizOptions,
    rng: &mut impl Rng,
) -> Vec<QuizItem> {
    let mut pool: Vec<&Term> = index
        .list_all()
        .iter()
        .filter(|t| t.definition.chars().count() >= options.min_definition_chars)
        .collect();
    if pool.is_empty() || options.option_count == 0 {
        return vec![];
    }

    pool.shuffle(rng);
    let mut items = Vec::new();

    for target in pool.iter().take(options.count) {
        let mut choices = vec![target.display_name.clone()];
        let mut attempts = 0;
        while choices.len() < options.option_count && attempts < options.max_draw_attempts {
            attempts += 1;
            let distractor = pool[rng.gen_range(0..pool.len())];
            if !choices.contains(&distractor.display_name) {
                choices.push(distractor.display_name.clone());
            }
        }
        choices.shuffle(rng);

        items.push(QuizItem {
            id: Uuid::new_v4(),
            question: render_question(&target.definition),
            options: choices,
            answer: target.display_name.clone(),
            term_id: target.id.clone(),
        });
    }

    items
}

fn render_question(definition: &str) -> String {
    let prefix: String = definition.chars().take(QUESTION_PREFIX_CHARS).collect();
    let ellipsis = if definition.chars().count() > QUESTION_PREFIX_CHARS {
        "…"
    } else {
        ""
    };
    format!("“{prefix}{ellipsis}”说的是哪个术语？")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::records::TaxonomyRecord;

    fn index_with(titles: &[(&str, &str)]) -> TermIndex {
        let taxonomy: Vec<TaxonomyRecord> = titles
            .iter()
            .map(|(title, summary)| TaxonomyRecord {
                level1: "Combat".to_string(),
                level2: "Roles".to_string(),
                level3: None,
                title: title.to_string(),
                summary: summary.to_string(),
            })
            .collect();
        TermIndex::build(&[], &taxonomy, &[])
    }

    fn full_index() -> TermIndex {
        index_with(&[
            ("打野", "负责野区资源并到处支援的位置角色"),
            ("辅助", "保护输出并提供视野控制的位置角色"),
            ("中单", "走中路、节奏很快的法师输出位置"),
            ("上单", "走上路、通常比较抗压的半肉位置"),
            ("射手", "后排持续物理输出的远程位置角色"),
            ("游走", "离开自己的分路去别的路找机会"),
        ])
    }

    #[test]
    fn items_have_four_unique_options_containing_the_answer() {
        let index = full_index();
        let mut rng = StdRng::seed_from_u64(7);
        let items = generate_with_rng(&index, &QuizOptions::default(), &mut rng);

        assert_eq!(items.len(), 5);
        for item in &items {
            assert_eq!(item.options.len(), 4);
            let mut unique = item.options.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 4);
            assert_eq!(
                item.options.iter().filter(|o| **o == item.answer).count(),
                1
            );
            assert!(index.get(&item.term_id).is_some());
        }
    }

    #[test]
    fn short_definitions_are_excluded() {
        let index = index_with(&[
            ("打野", "负责野区资源并到处支援的位置角色"),
            ("短", "太短"),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let items = generate_with_rng(&index, &QuizOptions::default(), &mut rng);
        for item in &items {
            assert_ne!(item.term_id, "短");
        }
    }

    #[test]
    fn under_populated_pool_ends_early_and_shrinks_options() {
        let index = index_with(&[
            ("打野", "负责野区资源并到处支援的位置角色"),
            ("辅助", "保护输出并提供视野控制的位置角色"),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let items = generate_with_rng(&index, &QuizOptions::default(), &mut rng);

        // two eligible terms: two items, two options each
        assert_eq!(items.len(), 2);
        for item in &items {
            assert_eq!(item.options.len(), 2);
            assert!(item.options.contains(&item.answer));
        }
    }

    #[test]
    fn empty_pool_yields_empty_bank() {
        let index = index_with(&[("短", "太短")]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_with_rng(&index, &QuizOptions::default(), &mut rng).is_empty());
    }

    #[test]
    fn question_embeds_truncated_definition_prefix() {
        let long = "这是一条特别长的定义，".repeat(10);
        let index = index_with(&[("长词", long.as_str()), ("短词", "另一条足够长的定义文本")]);
        let mut rng = StdRng::seed_from_u64(7);
        let items = generate_with_rng(&index, &QuizOptions::default(), &mut rng);
        let item = items.iter().find(|i| i.term_id == "长词").unwrap();
        assert!(item.question.contains('…'));
        assert!(item.question.chars().count() < long.chars().count());
    }
}
