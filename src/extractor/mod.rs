pub mod fields;
pub mod model;
pub mod tags;

#[cfg(test)]
mod tests;

pub use model::{MAX_TAGS, NOT_AVAILABLE, VideoMetadata};

use scraper::Html;

/// Extract a metadata record from fetched page markup.
///
/// The document is parsed once; each field then resolves independently
/// through its strategy chain and degrades to [`NOT_AVAILABLE`] (or an empty
/// tag list) when nothing matches. A page we understand nothing of is still
/// a success; extraction never fails the request.
pub fn extract(html: &str) -> VideoMetadata {
    let doc = Html::parse_document(html);
    let not_available = || NOT_AVAILABLE.to_string();

    VideoMetadata {
        title: fields::title(&doc).unwrap_or_else(not_available),
        channel: fields::channel(&doc).unwrap_or_else(not_available),
        views: fields::views(&doc).unwrap_or_else(not_available),
        duration: fields::duration(&doc).unwrap_or_else(not_available),
        thumbnail: fields::thumbnail(&doc).unwrap_or_else(not_available),
        tags: tags::tags(&doc),
    }
}
