use crate::producers::ProducerError;
use crate::utils::{debug_with_context, Cache};
use std::env;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Looks up the current git branch by spawning the git binary.
///
/// The lookup is best-effort: a missing executable, a directory outside any
/// repository, a non-zero exit, or empty output all degrade to "no
/// contribution". Results are cached per working directory so a redraw loop
/// does not respawn git on every frame.
pub struct GitBranchProducer {
    command: String,
    cache: Cache<String, Option<String>>,
}

impl GitBranchProducer {
    pub fn new() -> Self {
        Self {
            command: "git".to_string(),
            cache: Cache::new(Duration::from_secs(5)),
        }
    }

    /// Override the binary name. Used by hosts that ship their own git and
    /// by tests exercising the missing-executable path.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cache: Cache::new(Duration::from_secs(5)),
        }
    }

    pub async fn resolve(&self) -> Option<String> {
        let cwd = env::current_dir().ok()?;
        self.branch_in(&cwd).await
    }

    /// Branch name for `dir`, or `None` if there is nothing to show.
    pub async fn branch_in(&self, dir: &Path) -> Option<String> {
        let cache_key = dir.to_string_lossy().to_string();

        if let Some(cached) = self.cache.get(&cache_key) {
            debug_with_context("git", "Using cached branch lookup");
            return cached;
        }

        let branch = match self.lookup_branch(dir).await {
            Ok(branch) => Some(branch),
            Err(e) => {
                debug_with_context("git", &format!("Branch lookup failed: {}", e));
                None
            }
        };

        self.cache.insert(cache_key, branch.clone());
        branch
    }

    async fn lookup_branch(&self, dir: &Path) -> Result<String, ProducerError> {
        let output = Command::new(&self.command)
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .current_dir(dir)
            .output()
            .await
            .map_err(|e| ProducerError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(ProducerError::Unavailable(format!(
                "git exited with {}",
                output.status
            )));
        }

        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if branch.is_empty() {
            return Err(ProducerError::Empty);
        }

        Ok(branch)
    }
}

impl Default for GitBranchProducer {
    fn default() -> Self {
        Self::new()
    }
}
