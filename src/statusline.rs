use crate::config::{BuiltinSpec, Config, ProducerSpec};
use crate::producers::{
    unknown_producer, ClockProducer, GitBranchProducer, Producer, SessionProducer, SessionSource,
};
use crate::utils::debug_with_context;
use futures::future::join_all;
use std::sync::Arc;

/// Separator between producer outputs within a section, matching the host
/// widget's join. Overridable via config.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// An ordered, read-only table of sections and their producers.
///
/// Built once at startup; render passes re-evaluate dynamic producers but
/// never mutate the table.
pub struct StatusLine {
    enabled: bool,
    separator: String,
    sections: Vec<Section>,
}

struct Section {
    key: String,
    producers: Vec<Producer>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            enabled: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Build the section table from configuration. The session accessor is
    /// injected here rather than looked up globally.
    pub fn from_config(config: &Config, session: Arc<dyn SessionSource>) -> Self {
        let mut statusline = StatusLine::new();
        statusline.enabled = config.enabled;
        if let Some(separator) = &config.separator {
            statusline.separator = separator.clone();
        }

        for (key, specs) in [
            ("a", &config.sections.a),
            ("b", &config.sections.b),
            ("c", &config.sections.c),
        ] {
            for spec in specs {
                statusline.push(key, build_producer(spec, &session));
            }
        }

        statusline
    }

    /// Append a producer to a section, creating the section if needed.
    /// Section and producer order is display order.
    pub fn push(&mut self, key: &str, producer: Producer) {
        match self.sections.iter_mut().find(|s| s.key == key) {
            Some(section) => section.producers.push(producer),
            None => self.sections.push(Section {
                key: key.to_string(),
                producers: vec![producer],
            }),
        }
    }

    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// Render one section: evaluate its producers in order, drop absent
    /// values, join the rest. Unknown keys and empty sections render as an
    /// empty string; a failing producer never disturbs its siblings.
    pub async fn render(&self, key: &str) -> String {
        if !self.enabled {
            return String::new();
        }

        let Some(section) = self.sections.iter().find(|s| s.key == key) else {
            return String::new();
        };

        let resolved = join_all(section.producers.iter().map(|p| p.resolve())).await;
        let parts: Vec<String> = resolved.into_iter().flatten().collect();

        debug_with_context(
            "render",
            &format!("Section {}: {} of {} producers contributed", key, parts.len(), section.producers.len()),
        );

        parts.join(&self.separator)
    }

    /// Render every section in display order.
    pub async fn render_all(&self) -> Vec<(String, String)> {
        let mut rendered = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            rendered.push((section.key.clone(), self.render(&section.key).await));
        }
        rendered
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

fn build_producer(spec: &ProducerSpec, session: &Arc<dyn SessionSource>) -> Producer {
    match spec {
        ProducerSpec::Text(text) => match text.as_str() {
            "active-session" => Producer::Session(SessionProducer::new(session.clone())),
            "clock" => Producer::Clock(ClockProducer::new()),
            "git-branch" => Producer::GitBranch(GitBranchProducer::new()),
            _ => Producer::Static(text.clone()),
        },
        ProducerSpec::Builtin(spec) => build_builtin(spec, session),
    }
}

fn build_builtin(spec: &BuiltinSpec, session: &Arc<dyn SessionSource>) -> Producer {
    match spec.producer.as_str() {
        "active-session" => Producer::Session(SessionProducer::new(session.clone())),
        "clock" => match &spec.format {
            Some(format) => Producer::Clock(ClockProducer::with_format(format)),
            None => Producer::Clock(ClockProducer::new()),
        },
        "git-branch" => Producer::GitBranch(GitBranchProducer::new()),
        other => unknown_producer(other),
    }
}
