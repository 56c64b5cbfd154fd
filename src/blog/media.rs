use crate::text_utils::strip_tags;
use crate::wordpress::remote::{Media, MediaSize, RemotePost};

/// Layout reservation used when the upstream gives no dimensions
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 630;

/// Where the image will be shown. Each place prefers different WordPress sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageUse {
    /// Card thumbnail on the listing page
    Listing,
    /// Hero banner on the article page
    Detail,
}

impl ImageUse {
    pub fn size_preference(&self) -> &'static [&'static str] {
        match self {
            ImageUse::Listing => &["medium_large", "large", "medium", "full"],
            ImageUse::Detail => &["large", "medium_large", "full"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedImage {
    /// `None` means the page shows a placeholder background
    pub url: Option<String>,
    pub alt_text: String,
    pub width: u32,
    pub height: u32,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn pick_size<'a>(media: &'a Media, image_use: ImageUse) -> Option<(&'a MediaSize, &'a str)> {
    let sizes = &media.media_details.as_ref()?.sizes;
    image_use.size_preference().iter().find_map(|name| {
        let size = sizes.get(*name)?;
        non_empty(&size.source_url).map(|url| (size, url))
    })
}

pub fn select_image(post: &RemotePost, image_use: ImageUse) -> FeaturedImage {
    let media = post.featured_media();

    let alt_text = match media.and_then(|m| non_empty(&m.alt_text)) {
        Some(alt) => alt.to_string(),
        None => strip_tags(&post.title.rendered),
    };

    let Some(media) = media else {
        return FeaturedImage {
            url: None,
            alt_text,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        };
    };

    match pick_size(media, image_use) {
        Some((size, url)) => FeaturedImage {
            url: Some(url.to_string()),
            alt_text,
            width: size.width.unwrap_or(DEFAULT_WIDTH),
            height: size.height.unwrap_or(DEFAULT_HEIGHT),
        },
        None => FeaturedImage {
            url: non_empty(&media.source_url).map(str::to_string),
            alt_text,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        },
    }
}
