use crate::blog::media::{select_image, FeaturedImage, ImageUse};
use crate::text_utils::{display_date, strip_tags, truncate_excerpt, EllipsisRule, LISTING_EXCERPT_CHARS, META_DESCRIPTION_CHARS};
use crate::wordpress::remote::RemotePost;

/// Post ready to be rendered.
///
/// `title_html` and `content_html` are injected verbatim into pages, so the
/// WordPress site has to be a trusted source.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPost {
    pub id: u64,
    pub slug: String,
    pub published_at: String,
    pub title_html: String,
    pub content_html: String,
    pub plain_excerpt: String,
    pub featured_image: FeaturedImage,
}

impl DisplayPost {
    /// Card on the listing page. The excerpt is sized for the card.
    pub fn summary(post: &RemotePost, rule: EllipsisRule) -> DisplayPost {
        Self::build(post, ImageUse::Listing, LISTING_EXCERPT_CHARS, rule)
    }

    /// Article page. The excerpt is sized for the description meta tag.
    pub fn full(post: &RemotePost, rule: EllipsisRule) -> DisplayPost {
        Self::build(post, ImageUse::Detail, META_DESCRIPTION_CHARS, rule)
    }

    fn build(post: &RemotePost, image_use: ImageUse, excerpt_chars: usize, rule: EllipsisRule) -> DisplayPost {
        DisplayPost {
            id: post.id,
            slug: post.slug.clone(),
            published_at: display_date(&post.date_gmt),
            title_html: post.title.rendered.clone(),
            content_html: post.content.rendered.clone(),
            plain_excerpt: truncate_excerpt(&post.excerpt.rendered, excerpt_chars, rule),
            featured_image: select_image(post, image_use),
        }
    }

    pub fn plain_title(&self) -> String {
        strip_tags(&self.title_html)
    }

    pub fn link(&self) -> String {
        format!("/blog/{}/", self.slug)
    }
}

/// Document head data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn new(title: &str, site_name: &str, description: &str) -> PageMeta {
        let title = if title.is_empty() {
            site_name.to_string()
        } else {
            format!("{} | {}", title, site_name)
        };

        PageMeta {
            title,
            description: description.to_string(),
        }
    }

    pub fn for_post(post: &DisplayPost, site_name: &str) -> PageMeta {
        Self::new(&post.plain_title(), site_name, &post.plain_excerpt)
    }
}
