use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra community datasets merged over the embedded corpus
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            additional_paths: vec![],
        }
    }
}
