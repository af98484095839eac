//! Response status checks shared by every request.

use crate::error::AiError;

/// Map 429 to [`AiError::RateLimited`] (honoring `Retry-After`, default 60 s)
/// and any other non-success status to [`AiError::Api`] with the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AiError> {
    if resp.status() == 429 {
        return Err(AiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(AiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
