//! URL normalization.
//!
//! Every YouTube URL shape we accept collapses to a single canonical watch
//! URL keyed by the 11-character video identifier. The canonical form is the
//! cache key and the fetch target, so it has to be produced in exactly one
//! place: [`normalize`] is the only constructor of [`CanonicalUrl`].
//!
//! Policy: strict-match-or-reject. Input that does not carry a recognizable
//! video identifier is an error; we never fall back to a best-effort cleanup
//! of the raw string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Failed to compile id regex"));

/// A normalized video URL of the form `https://www.youtube.com/watch?v=<id>`.
///
/// Only [`normalize`] constructs this type, so holding one guarantees the
/// embedded identifier passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 11-character video identifier.
    pub fn video_id(&self) -> &str {
        // Invariant: the canonical form always ends with the identifier.
        &self.0[self.0.len() - 11..]
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("not a valid url: {0}")]
    Unparseable(#[from] url::ParseError),

    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("not a youtube host")]
    UnknownHost,

    #[error("no video identifier in url")]
    NoVideoId,
}

/// Normalize any accepted YouTube URL shape to the canonical watch URL.
///
/// Recognized shapes, all with optional scheme and optional `www.`/`m.`
/// subdomain:
///
/// - `youtu.be/<id>`
/// - `youtube.com/watch?v=<id>` (extra query parameters ignored)
/// - `youtube.com/shorts/<id>`
/// - `youtube.com/embed/<id>` and the legacy `youtube.com/v/<id>`
pub fn normalize(raw: &str) -> Result<CanonicalUrl, NormalizeError> {
    let trimmed = raw.trim();

    let parsed = match Url::parse(trimmed) {
        Ok(url) => url,
        // User-supplied links routinely omit the scheme.
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{trimmed}"))?,
        Err(e) => return Err(e.into()),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(NormalizeError::UnsupportedScheme(other.to_string())),
    }

    let host = parsed.host_str().ok_or(NormalizeError::UnknownHost)?;
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host);

    let id = match host {
        "youtu.be" => parsed.path_segments().and_then(|mut s| s.next()),
        "youtube.com" => {
            let mut segments = parsed.path_segments().ok_or(NormalizeError::NoVideoId)?;
            match segments.next() {
                Some("watch") => None, // handled below via the query string
                Some("shorts") | Some("embed") | Some("v") => segments.next(),
                _ => return Err(NormalizeError::NoVideoId),
            }
        }
        _ => return Err(NormalizeError::UnknownHost),
    };

    // The watch form carries the identifier in the `v` query parameter.
    let id = match id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .ok_or(NormalizeError::NoVideoId)?,
    };

    if !VIDEO_ID.is_match(&id) {
        return Err(NormalizeError::NoVideoId);
    }

    Ok(CanonicalUrl(format!(
        "https://www.youtube.com/watch?v={id}"
    )))
}
