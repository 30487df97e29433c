//! Header extraction and redacted header logging.

use axum::http::{header, HeaderMap, HeaderName};

/// Header carrying the tenant identifier (matched case-insensitively).
pub const TENANT_HEADER: &str = "tenant";

const REDACTED: &str = "<redacted>";

/// Headers whose values never reach the logs.
fn is_sensitive(name: &HeaderName) -> bool {
    [
        header::AUTHORIZATION,
        header::PROXY_AUTHORIZATION,
        header::COOKIE,
        header::SET_COOKIE,
    ]
    .contains(name)
}

/// Header value as UTF-8; non-UTF-8 values count as absent.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

pub fn authorization(headers: &HeaderMap) -> Option<&str> {
    header_str(headers, header::AUTHORIZATION.as_str())
}

pub fn tenant(headers: &HeaderMap) -> Option<&str> {
    header_str(headers, TENANT_HEADER)
}

/// Value as it may appear in logs.
pub fn loggable_value<'a>(name: &HeaderName, value: &'a str) -> &'a str {
    if is_sensitive(name) {
        REDACTED
    } else {
        value
    }
}

pub fn log_headers(headers: &HeaderMap) {
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<non-utf8>");
        tracing::debug!(header = %name, value = loggable_value(name, value), "request header");
    }
}
