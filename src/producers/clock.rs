use chrono::{DateTime, Local};

pub const DEFAULT_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats the local wall-clock time at render time.
#[derive(Debug, Clone)]
pub struct ClockProducer {
    pub format: String,
}

impl ClockProducer {
    pub fn new() -> Self {
        Self {
            format: DEFAULT_CLOCK_FORMAT.to_string(),
        }
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        Self { format: format.into() }
    }

    pub fn resolve(&self) -> String {
        self.format_at(Local::now())
    }

    pub fn format_at(&self, time: DateTime<Local>) -> String {
        time.format(&self.format).to_string()
    }
}

impl Default for ClockProducer {
    fn default() -> Self {
        Self::new()
    }
}
