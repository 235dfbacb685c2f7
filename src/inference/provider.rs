use std::fmt;

use async_trait::async_trait;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Everything a provider needs to fulfill a completion request.
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Sends one prompt and waits for the whole reply.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProviderError::Network("refused".into()).to_string(),
            "network error: refused"
        );
        assert_eq!(
            ProviderError::Api {
                status: 404,
                message: "model not found".into()
            }
            .to_string(),
            "API error (HTTP 404): model not found"
        );
        assert_eq!(
            ProviderError::Parse("eof".into()).to_string(),
            "parse error: eof"
        );
    }
}
