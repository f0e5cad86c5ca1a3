//! Single blocking HTTP GET via libcurl.
//!
//! The whole response body is collected in memory and returned as-is. Any
//! transport failure or non-2xx status is a `NetworkFailure`.

use crate::error::FetchError;
use std::time::Duration;

/// Conventional desktop browser identification. Some servers reject clients without one.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request settings. Timeouts are left to libcurl unless set.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            connect_timeout: None,
            timeout: None,
        }
    }
}

/// GETs `url` and returns the response body. Follows redirects.
pub fn http_get(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let fail = |e: curl::Error| FetchError::NetworkFailure {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(fail)?;
    easy.get(true).map_err(fail)?;
    easy.follow_location(true).map_err(fail)?;
    easy.max_redirections(10).map_err(fail)?;
    easy.useragent(&opts.user_agent).map_err(fail)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t).map_err(fail)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t).map_err(fail)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(fail)?;
        transfer.perform().map_err(fail)?;
    }

    let code = easy.response_code().map_err(fail)?;
    if !(200..300).contains(&code) {
        tracing::debug!(url, code, "GET returned non-success status");
        return Err(FetchError::NetworkFailure {
            url: url.to_string(),
            reason: format!("HTTP {}", code),
        });
    }

    tracing::debug!(url, bytes = body.len(), "GET complete");
    Ok(body)
}
