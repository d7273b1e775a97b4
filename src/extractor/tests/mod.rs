use std::fs;

use crate::extractor::{NOT_AVAILABLE, extract};

#[test]
fn extracts_full_watch_page() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/watch.html")
        .expect("Failed to read test fixture");

    let meta = extract(&html);

    assert_eq!(
        meta.title,
        "Rick Astley - Never Gonna Give You Up (Official Music Video)"
    );
    assert_eq!(meta.channel, "Rick Astley");
    // interactionCount wins over the visible view-count span and gets
    // thousands separators.
    assert_eq!(meta.views, "1,463,268,432");
    assert_eq!(meta.duration, "3:33");
    assert_eq!(
        meta.thumbnail,
        "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
    );
    assert_eq!(
        meta.tags,
        vec![
            "rick astley",
            "never gonna give you up",
            "music video",
            "80s",
            "pop"
        ]
    );
}

#[test]
fn bare_page_degrades_to_sentinels_without_error() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/bare.html")
        .expect("Failed to read test fixture");

    let meta = extract(&html);

    assert_eq!(meta.title, NOT_AVAILABLE);
    assert_eq!(meta.channel, NOT_AVAILABLE);
    assert_eq!(meta.views, NOT_AVAILABLE);
    assert_eq!(meta.duration, NOT_AVAILABLE);
    assert_eq!(meta.thumbnail, NOT_AVAILABLE);
    assert!(meta.tags.is_empty());
}

#[test]
fn fields_degrade_independently() {
    let html = r#"<html><head>
        <meta property="og:title" content="Partial page">
    </head><body>
        <span class="view-count">12 views</span>
    </body></html>"#;

    let meta = extract(html);

    assert_eq!(meta.title, "Partial page");
    assert_eq!(meta.views, "12");
    assert_eq!(meta.channel, NOT_AVAILABLE);
    assert_eq!(meta.duration, NOT_AVAILABLE);
    assert_eq!(meta.thumbnail, NOT_AVAILABLE);
    assert!(meta.tags.is_empty());
}

#[test]
fn handles_malformed_markup() {
    let html = "<html><head><meta name=\"title\" content=\"Broken\"><body><p>Unclosed";

    let meta = extract(html);
    assert_eq!(meta.title, "Broken");
    assert_eq!(meta.channel, NOT_AVAILABLE);
}

#[test]
fn empty_input_yields_unavailable_record() {
    let meta = extract("");
    assert_eq!(meta, crate::extractor::VideoMetadata::unavailable());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::MAX_TAGS;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extract_never_panics(html in ".*") {
            let _ = extract(&html);
        }

        #[test]
        fn tags_never_exceed_cap(html in ".*") {
            let meta = extract(&html);
            prop_assert!(meta.tags.len() <= MAX_TAGS);
        }
    }
}
