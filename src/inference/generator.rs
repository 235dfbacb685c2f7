//! # Blocking Generation
//!
//! The event loop is synchronous: it blocks on a keystroke, then blocks on
//! the model. [`BlockingGenerator`] owns a private current-thread tokio
//! runtime and drives an async [`CompletionProvider`] to completion on it.
//!
//! Failures never reach the UI. Any provider error is logged and the
//! generator answers with an empty string, which shows up as an empty list
//! entry.

use std::io;
use std::sync::Arc;

use log::{info, warn};
use tokio::runtime::Runtime;

use super::{CompletionProvider, CompletionRequest};

/// Synchronous prompt -> reply function as seen by the event loop.
pub trait Generator {
    fn generate(&self, prompt: &str) -> String;
}

pub struct BlockingGenerator {
    runtime: Runtime,
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl BlockingGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: String) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            provider,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Generator for BlockingGenerator {
    fn generate(&self, prompt: &str) -> String {
        let request = CompletionRequest {
            prompt,
            model: &self.model,
        };
        match self.runtime.block_on(self.provider.complete(request)) {
            Ok(text) => {
                info!("{} replied with {} bytes", self.provider.name(), text.len());
                unescape_response(&text)
            }
            Err(e) => {
                warn!("{} generation failed: {}", self.provider.name(), e);
                String::new()
            }
        }
    }
}

/// Expand literal `\n` and `\t` escapes some models emit inside their text.
///
/// Both replacements run over the same string, newline first.
pub fn unescape_response(text: &str) -> String {
    let text = text.replace("\\n", "\n");
    text.replace("\\t", "\t")
}
