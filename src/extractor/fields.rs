//! Per-field extraction strategies.
//!
//! Each field resolves through an ordered chain: structured metadata and
//! micro-data elements first, visible-text heuristics after, `None` when
//! nothing matched. The ordering reflects observed reliability of the
//! markup, so callers must keep first-match-wins semantics.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static META_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="title"]"#).expect("Failed to parse title selector")
});
static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("Failed to parse og:title selector")
});
static OG_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:image"]"#).expect("Failed to parse og:image selector")
});
static AUTHOR_NAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"span[itemprop="author"] link[itemprop="name"]"#)
        .expect("Failed to parse author selector")
});
static INTERACTION_COUNT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[itemprop="interactionCount"]"#)
        .expect("Failed to parse interactionCount selector")
});
static VIEW_COUNT_TEXT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.view-count, div#count, .watch-view-count")
        .expect("Failed to parse view-count selector")
});
static PLAYER_DURATION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".ytp-time-duration").expect("Failed to parse duration selector")
});
static OVERLAY_DURATION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.ytd-thumbnail-overlay-time-status-renderer")
        .expect("Failed to parse overlay duration selector")
});

pub fn title(doc: &Html) -> Option<String> {
    meta_content(doc, &META_TITLE).or_else(|| meta_content(doc, &OG_TITLE))
}

pub fn channel(doc: &Html) -> Option<String> {
    doc.select(&AUTHOR_NAME)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

pub fn views(doc: &Html) -> Option<String> {
    // interactionCount is a bare integer; reformat it for display.
    if let Some(raw) = doc
        .select(&INTERACTION_COUNT)
        .next()
        .and_then(|el| el.value().attr("content"))
        && let Ok(count) = raw.trim().parse::<u64>()
    {
        return Some(format_thousands(count));
    }

    visible_text(doc, &VIEW_COUNT_TEXT).map(|text| {
        text.strip_suffix("views")
            .map(str::trim)
            .unwrap_or(&text)
            .to_string()
    })
}

pub fn duration(doc: &Html) -> Option<String> {
    visible_text(doc, &PLAYER_DURATION).or_else(|| visible_text(doc, &OVERLAY_DURATION))
}

pub fn thumbnail(doc: &Html) -> Option<String> {
    meta_content(doc, &OG_IMAGE)
}

fn meta_content(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn visible_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_formatting() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(1000000000), "1,000,000,000");
    }

    #[test]
    fn title_prefers_meta_name_over_og() {
        let doc = Html::parse_document(
            r#"<html><head>
                <meta name="title" content="From name">
                <meta property="og:title" content="From og">
            </head></html>"#,
        );
        assert_eq!(title(&doc).as_deref(), Some("From name"));
    }

    #[test]
    fn title_falls_back_to_og() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:title" content="From og"></head></html>"#,
        );
        assert_eq!(title(&doc).as_deref(), Some("From og"));
    }

    #[test]
    fn views_prefer_interaction_count() {
        let doc = Html::parse_document(
            r#"<html><body>
                <meta itemprop="interactionCount" content="1234567">
                <span class="view-count">1,000 views</span>
            </body></html>"#,
        );
        assert_eq!(views(&doc).as_deref(), Some("1,234,567"));
    }

    #[test]
    fn views_fall_back_to_visible_text() {
        let doc = Html::parse_document(
            r#"<html><body><span class="view-count">2,345,678 views</span></body></html>"#,
        );
        assert_eq!(views(&doc).as_deref(), Some("2,345,678"));
    }

    #[test]
    fn non_numeric_interaction_count_is_skipped() {
        let doc = Html::parse_document(
            r#"<html><body>
                <meta itemprop="interactionCount" content="lots">
                <div id="count">42 views</div>
            </body></html>"#,
        );
        assert_eq!(views(&doc).as_deref(), Some("42"));
    }

    #[test]
    fn duration_fallback_order() {
        let doc = Html::parse_document(
            r#"<html><body><span class="ytd-thumbnail-overlay-time-status-renderer">
                7:01
            </span></body></html>"#,
        );
        assert_eq!(duration(&doc).as_deref(), Some("7:01"));

        let doc = Html::parse_document(
            r#"<html><body>
                <span class="ytp-time-duration">12:34</span>
                <span class="ytd-thumbnail-overlay-time-status-renderer">7:01</span>
            </body></html>"#,
        );
        assert_eq!(duration(&doc).as_deref(), Some("12:34"));
    }

    #[test]
    fn empty_elements_do_not_match() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="title" content="  "></head>
            <body><span class="view-count">  </span></body></html>"#,
        );
        assert_eq!(title(&doc), None);
        assert_eq!(views(&doc), None);
    }
}
