use std::env;
use std::sync::Arc;

/// Accessor for the host's active session name.
///
/// Injected at status-line construction time so the renderer never reaches
/// into process-wide state and stays testable in isolation.
pub trait SessionSource: Send + Sync {
    fn active_session(&self) -> Option<String>;
}

/// Session source backed by the `MUXLINE_SESSION` environment variable,
/// which the host multiplexer exports into client processes.
pub struct EnvSessionSource;

impl SessionSource for EnvSessionSource {
    fn active_session(&self) -> Option<String> {
        env::var("MUXLINE_SESSION").ok()
    }
}

pub struct SessionProducer {
    source: Arc<dyn SessionSource>,
}

impl SessionProducer {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self { source }
    }

    pub fn resolve(&self) -> Option<String> {
        self.source.active_session().filter(|name| !name.is_empty())
    }
}
