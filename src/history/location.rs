//! Location parsing and base-prefix handling.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Errors produced while normalizing a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("navigation target is empty")]
    EmptyPath,

    #[error("invalid URL {input}: {reason}")]
    InvalidUrl { input: String, reason: String },
}

/// Deployment prefix the app is served under (e.g. `/hikes/`).
///
/// Stored with a leading slash and without a trailing one, so the root
/// base is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base {
    prefix: String,
}

impl Base {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let prefix = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { prefix }
    }

    /// The base as it appears in links, always ending in `/`.
    pub fn as_href(&self) -> String {
        format!("{}/", self.prefix)
    }

    /// Prefix a route path with the base.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.prefix, path)
        } else {
            format!("{}/{}", self.prefix, path)
        }
    }

    /// Remove the base from a browser path.
    ///
    /// Paths outside the base are returned unchanged.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return path;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_href())
    }
}

/// A normalized navigation target.
///
/// `path` has a leading slash, no query, no fragment and no base prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl Location {
    /// The app root.
    pub fn root() -> Self {
        Self::from_path("/")
    }

    /// Wrap an already-normalized path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            fragment: None,
        }
    }

    /// Normalize an absolute URL or a path against the base.
    pub fn parse(input: &str, base: &Base) -> Result<Self, LocationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LocationError::EmptyPath);
        }

        let (path, query, fragment) = if is_absolute_url(input) {
            let url = Url::parse(input).map_err(|e| LocationError::InvalidUrl {
                input: input.to_string(),
                reason: e.to_string(),
            })?;
            // Non-special schemes (`custom://host`) have an empty path
            let path = match url.path() {
                "" => "/".to_string(),
                p => p.to_string(),
            };
            (
                path,
                url.query().map(str::to_string),
                url.fragment().map(str::to_string),
            )
        } else {
            let (rest, fragment) = match input.split_once('#') {
                Some((rest, frag)) => (rest, Some(frag.to_string())),
                None => (input, None),
            };
            let (path, query) = match rest.split_once('?') {
                Some((path, q)) => (path, Some(q.to_string())),
                None => (rest, None),
            };
            let path = if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{}", path)
            };
            (path, query, fragment)
        };

        Ok(Self {
            path: base.strip(&path).to_string(),
            query: query.filter(|q| !q.is_empty()),
            fragment: fragment.filter(|f| !f.is_empty()),
        })
    }

    /// Path plus query and fragment, as shown in the address bar (minus base).
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        if let Some(q) = &self.query {
            out.push('?');
            out.push_str(q);
        }
        if let Some(f) = &self.fragment {
            out.push('#');
            out.push_str(f);
        }
        out
    }
}

/// A scheme separator before any query or fragment marks an absolute URL.
fn is_absolute_url(input: &str) -> bool {
    if input.starts_with('/') {
        return false;
    }
    let head = input.split(['?', '#']).next().unwrap_or_default();
    head.contains("://")
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}
