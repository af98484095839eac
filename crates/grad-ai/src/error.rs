//! Search API error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured; no request was sent.
    #[error("AI search is not configured: set GRADTRACK_AI__API_KEY or [ai] api_key")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The first choice carried no message content.
    #[error("no content in API response")]
    NoContent,

    /// The message content held no `{...}` block.
    #[error("no JSON found in response")]
    NoJson,

    /// The JSON block did not match the expected shape.
    #[error("failed to parse AI response: {0}")]
    Parse(String),
}
