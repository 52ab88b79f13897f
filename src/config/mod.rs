pub mod defaults;
pub mod loader;

pub use defaults::*;
pub use loader::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Joins producer outputs within a section. Defaults to `" | "`.
    pub separator: Option<String>,
    #[serde(default)]
    pub sections: SectionsConfig,
}

/// The three status-line regions, in display order: left, center, right.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default)]
    pub a: Vec<ProducerSpec>,
    #[serde(default)]
    pub b: Vec<ProducerSpec>,
    #[serde(default)]
    pub c: Vec<ProducerSpec>,
}

/// One entry in a section's producer list.
///
/// A bare string is static text, unless it names a built-in producer
/// (`"active-session"`, `"clock"`, `"git-branch"`). The object form selects
/// a built-in explicitly and can carry options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProducerSpec {
    Builtin(BuiltinSpec),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinSpec {
    pub producer: String,
    pub format: Option<String>,
}

fn default_enabled() -> bool {
    true
}
