use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::{StatusCode, header::HeaderMap};

/// A fetched video page, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: url::Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body_raw: Bytes,
    pub body_utf8: String,
    pub fetched_at: DateTime<Utc>,
}
