//! Response post-processing: charset detection and decoding to UTF-8.
//!
//! An explicit charset in the `Content-Type` header or a `<meta charset>`
//! in the document head is honored; everything else decodes as UTF-8.
//! Undecodable byte sequences become replacement characters rather than
//! failing the request.

use std::sync::LazyLock;

use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::{StatusCode, header::HeaderMap};
use url::Url;

use crate::fetcher::types::PageResponse;

static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
    content_type: &str,
) -> PageResponse {
    let encoding = detect_encoding(content_type, &body_bytes);
    let (decoded, _, had_errors) = encoding.decode(&body_bytes);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), url = %url_final, "lossy body decode");
    }

    PageResponse {
        url_final,
        status,
        headers,
        body_utf8: decoded.into_owned(),
        body_raw: body_bytes,
        fetched_at: Utc::now(),
    }
}

fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(captures) = HEADER_CHARSET.captures(content_type)
        && let Some(label) = captures.get(1)
        && let Some(encoding) = Encoding::for_label(label.as_str().as_bytes())
    {
        return encoding;
    }

    // Fall back to a <meta charset> declaration in the first 4KB.
    let head = &body_bytes[..body_bytes.len().min(4096)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(captures) = META_CHARSET.captures(&head_str)
        && let Some(label) = captures.get(1)
        && let Some(encoding) = Encoding::for_label(label.as_str().as_bytes())
    {
        return encoding;
    }

    encoding_rs::UTF_8
}
