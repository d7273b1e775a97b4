//! Tag extraction from embedded player JSON.
//!
//! The page embeds its keyword list inside a large script-carried JSON blob.
//! Strategy one slices out the `"keywords"` array (respecting string
//! escaping) and hands it to serde. Strategy two is the blunt fallback for
//! half-broken blobs: split on commas and strip quotes. Both cap the result
//! at [`MAX_TAGS`] entries, order preserved.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::extractor::model::MAX_TAGS;

const KEYWORDS_MARKER: &str = "\"keywords\":[";

static SCRIPT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").expect("Failed to parse script selector"));

pub fn tags(doc: &Html) -> Vec<String> {
    for script in doc.select(&SCRIPT) {
        let text: String = script.text().collect();
        let Some(start) = text.find(KEYWORDS_MARKER) else {
            continue;
        };
        let array = &text[start + KEYWORDS_MARKER.len() - 1..];

        if let Some(parsed) = parse_keywords_array(array) {
            return parsed;
        }
        // Malformed JSON in the blob; degrade to the literal split.
        return split_keywords_literal(array);
    }
    Vec::new()
}

/// Parse the array at the start of `input` as JSON, tolerating trailing
/// content. Returns `None` when the array is not valid JSON.
fn parse_keywords_array(input: &str) -> Option<Vec<String>> {
    let slice = balanced_array_slice(input)?;
    let keywords: Vec<String> = serde_json::from_str(slice).ok()?;
    Some(keywords.into_iter().take(MAX_TAGS).collect())
}

/// Slice `input` (which starts at `[`) up to its matching `]`, skipping
/// brackets inside string literals and escape sequences.
fn balanced_array_slice(input: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&input[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Last-resort extraction: take everything up to the first `]`, split on
/// commas, strip quoting. Mirrors how the blob looks when it is close to,
/// but not quite, valid JSON.
fn split_keywords_literal(input: &str) -> Vec<String> {
    let inner = input
        .strip_prefix('[')
        .and_then(|rest| rest.split(']').next())
        .unwrap_or("");

    inner
        .split(',')
        .map(|part| part.trim().trim_matches('"').trim().to_string())
        .filter(|part| !part.is_empty())
        .take(MAX_TAGS)
        .collect()
}
