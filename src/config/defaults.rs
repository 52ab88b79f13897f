use crate::config::*;

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            separator: None,
            sections: SectionsConfig::default_layout(),
        }
    }
}

impl SectionsConfig {
    /// Session on the left, clock in the center, git branch on the right.
    pub fn default_layout() -> Self {
        Self {
            a: vec![ProducerSpec::Text("active-session".to_string())],
            b: vec![ProducerSpec::Text("clock".to_string())],
            c: vec![ProducerSpec::Text("git-branch".to_string())],
        }
    }
}
