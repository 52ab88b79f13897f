pub mod clock;
pub mod git;
pub mod session;

pub use clock::*;
pub use git::*;
pub use session::*;

use crate::utils::debug_with_context;
use thiserror::Error;

/// Why a producer had nothing to contribute this render pass.
///
/// Both cases are absorbed at the producer boundary: callers only ever see
/// an absent value, never an error.
#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("producer backend unavailable: {0}")]
    Unavailable(String),
    #[error("producer returned no usable output")]
    Empty,
}

/// One source of text for a status-line section.
///
/// `Static` text is captured once at config load; every other variant is
/// re-evaluated on each render pass.
pub enum Producer {
    Static(String),
    Session(SessionProducer),
    Clock(ClockProducer),
    GitBranch(GitBranchProducer),
    /// Host-supplied zero-argument producer.
    Dynamic(Box<dyn Fn() -> Option<String> + Send + Sync>),
}

impl Producer {
    /// Evaluate the producer. `None` means "no contribution", never failure
    /// surfaced to the caller.
    pub async fn resolve(&self) -> Option<String> {
        match self {
            Producer::Static(text) => Some(text.clone()),
            Producer::Session(p) => p.resolve(),
            Producer::Clock(p) => Some(p.resolve()),
            Producer::GitBranch(p) => p.resolve().await,
            Producer::Dynamic(f) => f(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Producer::Static(_) => "static",
            Producer::Session(_) => "session",
            Producer::Clock(_) => "clock",
            Producer::GitBranch(_) => "git-branch",
            Producer::Dynamic(_) => "dynamic",
        }
    }
}

impl std::fmt::Debug for Producer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Producer::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Producer::Dynamic(_) => f.write_str("Dynamic(..)"),
            other => f.write_str(other.name()),
        }
    }
}

/// A producer that never contributes. Stands in for producer names the
/// config referenced but this build does not know.
pub fn unknown_producer(name: &str) -> Producer {
    debug_with_context("config", &format!("Unknown producer name: {}", name));
    Producer::Dynamic(Box::new(|| None))
}
