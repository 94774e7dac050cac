use std::process::Stdio;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub type DynGenerator = Box<dyn Generator + Send + Sync>;

pub fn make_generator(model: String, timeout_secs: u64) -> DynGenerator {
    Box::new(OllamaCli {
        model,
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Runs a local `ollama run <model>` process: prompt on stdin, paragraph on
/// stdout, hard deadline on the whole call.
pub struct OllamaCli {
    pub model: String,
    pub timeout: Duration,
}

#[async_trait]
impl Generator for OllamaCli {
    async fn generate(&self, prompt: &str) -> Result<String> {
        which::which("ollama").context("ollama binary not found on PATH")?;

        let mut child = Command::new("ollama")
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .context("failed to spawn ollama")?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("ollama stdin unavailable"))?;
        stdin
            .write_all(prompt.as_bytes())
            .await
            .context("failed to deliver prompt to ollama")?;
        drop(stdin);

        let out = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| anyhow!("generation timed out after {}s", self.timeout.as_secs()))?
            .context("ollama did not exit cleanly")?;

        if !out.status.success() {
            return Err(anyhow!(
                "ollama exited with {}: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            ));
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}
