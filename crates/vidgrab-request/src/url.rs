//! Syntactic URL checking.
//!
//! Only the shape `scheme://[userinfo@]host[:port][/path][?query][#fragment]`
//! is accepted. Nothing is resolved or fetched.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{RequestError, RequestResult};

/// Regex pattern for an absolute URL with an authority component.
const URL_PATTERN: &str = r"^([A-Za-z][A-Za-z0-9+.\-]*)://(?:[^/?#\s@]*@)?(\[[0-9A-Fa-f:.]+\]|[^/?#\s:@\[\]]+)(?::(\d*))?([/?#]\S*)?$";

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("invalid regex pattern"))
}

/// The parts of a URL the request layer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme (`https`).
    pub scheme: String,
    /// Lowercased host, without port.
    pub host: String,
    /// Explicit port, if any.
    pub port: Option<u16>,
    /// Path, query, and fragment as written (`/watch?v=...`); may be empty.
    pub rest: String,
}

impl ParsedUrl {
    /// Parses `input`, rejecting anything that is not an absolute URL with a
    /// host.
    pub fn parse(input: &str) -> RequestResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RequestError::EmptyUrl);
        }

        let caps = url_regex().captures(input).ok_or_else(|| {
            let reason = if !input.contains("://") {
                "missing scheme"
            } else {
                "malformed authority or path"
            };
            RequestError::invalid_url(input, reason)
        })?;

        let port = match caps.get(3).map(|m| m.as_str()) {
            None | Some("") => None,
            Some(digits) => Some(
                digits
                    .parse::<u16>()
                    .map_err(|_| RequestError::invalid_url(input, "port out of range"))?,
            ),
        };

        let host = caps[2].to_ascii_lowercase();
        if host.starts_with('.') || host.contains("..") {
            return Err(RequestError::invalid_url(input, "empty host label"));
        }

        Ok(Self {
            scheme: caps[1].to_ascii_lowercase(),
            host,
            port,
            rest: caps.get(4).map(|m| m.as_str().to_string()).unwrap_or_default(),
        })
    }

    /// Whether the scheme is http or https.
    pub fn is_web(&self) -> bool {
        self.scheme == "http" || self.scheme == "https"
    }
}

/// Returns true if `input` parses as a URL.
pub fn is_valid_url(input: &str) -> bool {
    ParsedUrl::parse(input).is_ok()
}
