//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;

use crate::inference::{CompletionProvider, CompletionRequest, Generator, ProviderError};
use crate::term::ByteSource;

/// A byte source that replays a fixed script, then reports EOF.
pub struct ScriptedInput {
    bytes: VecDeque<u8>,
    consumed: usize,
}

impl ScriptedInput {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            consumed: 0,
        }
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for ScriptedInput {
    fn read_byte(&mut self) -> io::Result<u8> {
        let byte = self
            .bytes
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))?;
        self.consumed += 1;
        Ok(byte)
    }
}

/// A generator that answers with a canned reply and records every prompt.
pub struct RecordingGenerator {
    reply: String,
    pub prompts: RefCell<Vec<String>>,
}

impl RecordingGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Generator for RecordingGenerator {
    fn generate(&self, prompt: &str) -> String {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.reply.clone()
    }
}

/// A provider that returns a fixed result without any I/O.
pub struct StubProvider {
    pub result: Result<String, ProviderError>,
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        self.result.clone()
    }
}
