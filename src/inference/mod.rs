pub mod generator;
pub mod provider;
pub mod providers;

pub use generator::{BlockingGenerator, Generator};
pub use provider::{CompletionProvider, CompletionRequest, ProviderError};
pub use providers::OllamaProvider;
