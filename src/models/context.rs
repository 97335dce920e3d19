//! Per-connection state threaded through the gate.

use axum::http::Uri;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use url::form_urlencoded;

/// Query parameter carrying the bearer token.
pub const AUTHORIZATION_PARAM: &str = "Authorization";

/// Connection attempt as seen by the gate: query parameters, requested path and the
/// resulting authorization flag (fail-closed, `false` until a check succeeds).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionContext {
    pub query: HashMap<String, Vec<String>>,
    pub path: String,
    pub user_auth: bool,
}

impl ConnectionContext {
    pub fn new(path: impl Into<String>, raw_query: Option<&str>) -> Self {
        Self {
            query: raw_query.map(parse_query).unwrap_or_default(),
            path: path.into(),
            user_auth: false,
        }
    }

    /// The path is percent-decoded, the way the router decodes `:user_id`.
    pub fn from_uri(uri: &Uri) -> Self {
        Self::new(decode_path(uri.path()), uri.query())
    }

    /// First `Authorization` value, if any.
    pub fn token(&self) -> Option<&str> {
        first_value(&self.query, AUTHORIZATION_PARAM)
    }
}

/// Percent-decode a request path. Invalid UTF-8 keeps the raw path, which never
/// matches a designated channel.
pub fn decode_path(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(path) => path.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Parse a raw query string into `key -> values`, keeping every value in order.
/// Blank values are dropped, so `Authorization=` counts as no token at all.
pub fn parse_query(raw: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

pub fn first_value<'a>(params: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}
