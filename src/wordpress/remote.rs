use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// `{"rendered": "<p>...</p>"}` wrapper used by WordPress for every HTML field
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A post as returned by `GET {base}/posts`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RemotePost {
    pub id: u64,
    pub slug: String,
    /// UTC, without zone marker. E.g. `2024-03-04T10:15:30`
    #[serde(default)]
    pub date_gmt: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Rendered,
    /// Missing from listing responses, which ask for a reduced field set
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(rename = "_embedded", default, deserialize_with = "lenient")]
    pub embedded: Option<Embedded>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<Media>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Media {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub media_details: Option<MediaDetails>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MediaDetails {
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MediaSize {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl RemotePost {
    pub fn featured_media(&self) -> Option<&Media> {
        self.embedded.as_ref().and_then(|embedded| embedded.featured_media.first())
    }
}

/// Media metadata is best effort: anything with an unexpected shape becomes `None`
/// instead of failing the whole post.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use crate::test_data::{DETAIL_JSON, LIST_JSON};

    use super::*;

    #[test]
    fn test_decode_listing() {
        let posts: Vec<RemotePost> = serde_json::from_str(LIST_JSON).unwrap();
        assert_eq!(posts.len(), 3);

        let first = &posts[0];
        assert_eq!(first.id, 311);
        assert_eq!(first.slug, "community-rounds-explained");
        assert_eq!(first.date_gmt, "2024-03-04T10:15:30");
        assert_eq!(first.content, Rendered::default());

        let media = first.featured_media().unwrap();
        assert_eq!(media.alt_text.as_deref(), Some("Founders at a pitch night"));
        let sizes = &media.media_details.as_ref().unwrap().sizes;
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes["large"].width, Some(1024));

        assert!(posts[1].embedded.is_none());
        assert!(posts[2].featured_media().unwrap().media_details.is_none());
    }

    #[test]
    fn test_decode_detail() {
        let posts: Vec<RemotePost> = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].content.rendered.starts_with("<p>Most founders"));
    }

    #[test]
    fn test_malformed_media_is_dropped() {
        let json = r##"{
            "id": 7,
            "slug": "odd-media",
            "title": {"rendered": "Odd"},
            "_embedded": {"wp:featuredmedia": [{
                "source_url": "https://cdn.example.com/odd.jpg",
                "media_details": {"sizes": {"large": {"source_url": 12, "width": "wide"}}}
            }]}
        }"##;
        let post: RemotePost = serde_json::from_str(json).unwrap();
        let media = post.featured_media().unwrap();
        assert_eq!(media.source_url.as_deref(), Some("https://cdn.example.com/odd.jpg"));
        assert!(media.media_details.is_none());

        let json = r##"{"id": 8, "slug": "broken", "_embedded": "nope"}"##;
        let post: RemotePost = serde_json::from_str(json).unwrap();
        assert!(post.embedded.is_none());
        assert_eq!(post.title.rendered, "");
    }

    #[test]
    fn test_media_error_entry() {
        // Private media shows up as an error object inside the embed list
        let json = r##"{
            "id": 9,
            "slug": "private-media",
            "_embedded": {"wp:featuredmedia": [{"code": "rest_forbidden", "message": "Sorry", "data": {"status": 403}}]}
        }"##;
        let post: RemotePost = serde_json::from_str(json).unwrap();
        assert_eq!(post.featured_media(), Some(&Media::default()));
    }
}
