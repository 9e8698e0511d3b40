//! Websocket endpoint derivation from the hosting page.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Path of the chat endpoint on the hosting origin.
pub const DEFAULT_ENDPOINT_PATH: &str = "/chat/user";

/// Host used when the page reports none (e.g. `file://`).
pub const FALLBACK_HOST: &str = "localhost";

/// Error returned by [`endpoint_url_from_origin`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("origin must look like scheme://host[:port]: {0}")]
    MalformedOrigin(String),
    #[error("unsupported origin scheme: {0}")]
    UnsupportedScheme(String),
}

/// Websocket scheme for a page scheme: `wss` for `https`, `ws` otherwise.
///
/// Accepts the scheme with or without the trailing colon that
/// `location.protocol` reports.
#[must_use]
pub fn ws_scheme(page_scheme: &str) -> &'static str {
    if page_scheme.trim_end_matches(':').eq_ignore_ascii_case("https") { "wss" } else { "ws" }
}

/// Full websocket URL for `path` on the page's host (`host` may carry a port).
#[must_use]
pub fn endpoint_url(page_scheme: &str, host: &str, path: &str) -> String {
    let host = if host.is_empty() { FALLBACK_HOST } else { host };
    let path = path.trim_start_matches('/');
    format!("{}://{host}/{path}", ws_scheme(page_scheme))
}

/// [`endpoint_url`] for an origin string such as `https://rules.example:8443`.
pub fn endpoint_url_from_origin(origin: &str, path: &str) -> Result<String, EndpointError> {
    let (scheme, rest) = origin
        .split_once("://")
        .ok_or_else(|| EndpointError::MalformedOrigin(origin.to_owned()))?;
    if !matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https") {
        return Err(EndpointError::UnsupportedScheme(scheme.to_owned()));
    }
    let host = rest.split('/').next().unwrap_or_default();
    Ok(endpoint_url(scheme, host, path))
}
