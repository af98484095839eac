//! Pull the JSON object out of a free-text model reply.

use serde::de::DeserializeOwned;

use crate::error::AiError;

/// Greedy brace block: the first `{` through the last `}`.
#[must_use]
pub fn json_block(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

/// Extract and deserialize the brace block.
///
/// # Errors
///
/// [`AiError::NoJson`] when there is no block, [`AiError::Parse`] when it does
/// not deserialize into `T`.
pub fn parse_block<T: DeserializeOwned>(content: &str) -> Result<T, AiError> {
    let block = json_block(content).ok_or(AiError::NoJson)?;
    serde_json::from_str(block).map_err(|e| AiError::Parse(e.to_string()))
}
