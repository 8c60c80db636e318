//! Scripted operator for testing

#![allow(dead_code)]

use async_trait::async_trait;
use cherry_batch::error::{Error, Result};
use cherry_batch::prompt::OperatorPrompt;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Operator prompt that replays canned answers in order
///
/// Runs out of answers with `Error::Prompt`, like a closed stdin.
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Create a prompt that will answer with `answers`, in order
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(ToString::to_string).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Prompt that must never be asked anything
    pub fn silent() -> Self {
        Self::new(&[])
    }

    /// Messages the driver asked, in order
    pub fn get_asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    /// Number of times the prompt was shown
    pub fn ask_count(&self) -> usize {
        self.asked.lock().unwrap().len()
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

#[async_trait]
impl OperatorPrompt for ScriptedPrompt {
    async fn ask(&self, message: &str) -> Result<String> {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or_else(|| Error::Prompt("no scripted answer left".to_string()))
    }
}
