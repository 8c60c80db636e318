//! Operator prompting

use crate::error::{Error, Result};
use async_trait::async_trait;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

/// Asks the operator a question and waits for one line of input
#[async_trait]
pub trait OperatorPrompt: Send + Sync {
    /// Show `message` and block until the operator answers.
    ///
    /// The answer is trimmed and may be empty.
    async fn ask(&self, message: &str) -> Result<String>;
}

/// Prompt on the controlling terminal
///
/// Falls back to plain line reads when stdin is not a terminal, so answers
/// can be piped in.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

#[async_trait]
impl OperatorPrompt for TerminalPrompt {
    async fn ask(&self, message: &str) -> Result<String> {
        let message = message.to_string();
        // Both paths read synchronously; keep them off the async workers
        let answer = tokio::task::spawn_blocking(move || {
            if std::io::stdin().is_terminal() {
                Input::<String>::new()
                    .with_prompt(message)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| Error::Prompt(format!("failed to read input: {e}")))
            } else {
                read_piped_line(&message)
            }
        })
        .await
        .map_err(|e| Error::Internal(format!("prompt task failed: {e}")))??;

        Ok(answer.trim().to_string())
    }
}

fn read_piped_line(message: &str) -> Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{message}: ")?;
    stderr.flush()?;

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| Error::Prompt(format!("failed to read input: {e}")))?;
    if read == 0 {
        return Err(Error::Prompt("input closed".to_string()));
    }
    Ok(line)
}
