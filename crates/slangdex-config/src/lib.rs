use std::env;

use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::quiz::QuizConfig;

pub mod corpus;
pub mod quiz;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub quiz: QuizConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut corpus = CorpusConfig::default();
        if let Ok(paths) = env::var("SLANGDEX_CORPUS_PATHS") {
            corpus.additional_paths = paths
                .split(':')
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }

        let mut quiz = QuizConfig::default();
        if let Some(count) = env::var("SLANGDEX_QUIZ_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            quiz.question_count = count;
        }
        if let Some(chars) = env::var("SLANGDEX_QUIZ_MIN_DEF_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            quiz.min_definition_chars = chars;
        }

        Config { corpus, quiz }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus: CorpusConfig::default(),
            quiz: QuizConfig::default(),
        }
    }
}
