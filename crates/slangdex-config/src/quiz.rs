use serde::{Deserialize, Serialize};

fn default_question_count() -> usize {
    5
}

fn default_option_count() -> usize {
    4
}

fn default_min_definition_chars() -> usize {
    10
}

fn default_max_draw_attempts() -> usize {
    32
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuizConfig {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_option_count")]
    pub option_count: usize,
    /// Terms with shorter definitions are excluded from the quiz pool
    #[serde(default = "default_min_definition_chars")]
    pub min_definition_chars: usize,
    /// Cap on distractor re-draws before shrinking the option list
    #[serde(default = "default_max_draw_attempts")]
    pub max_draw_attempts: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            option_count: default_option_count(),
            min_definition_chars: default_min_definition_chars(),
            max_draw_attempts: default_max_draw_attempts(),
        }
    }
}
