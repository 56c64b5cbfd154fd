use std::io;

use ramhorns::Template;

use crate::blog::display::{DisplayPost, PageMeta};
use crate::config::Site;
use crate::view::parse_template;

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    page_title: &'a str,
    page_description: &'a str,
    site_name: &'a str,
    scheduling_url: &'a str,
    id: u64,
    slug: &'a str,
    date: &'a str,
    post_title: &'a str,
    post_content: &'a str,
    has_image: bool,
    image_url: &'a str,
    image_alt: &'a str,
    image_width: u32,
    image_height: u32,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer<'_>> {
        let template = parse_template(view_tpl_src, "post view")?;
        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, site: &Site, meta: &PageMeta, post: &DisplayPost) -> String {
        let image = &post.featured_image;
        self.template.render(&ViewItem {
            page_title: meta.title.as_str(),
            page_description: meta.description.as_str(),
            site_name: site.name.as_str(),
            scheduling_url: site.scheduling_url.as_str(),
            id: post.id,
            slug: post.slug.as_str(),
            date: post.published_at.as_str(),
            post_title: post.title_html.as_str(),
            post_content: post.content_html.as_str(),
            has_image: image.url.is_some(),
            image_url: image.url.as_deref().unwrap_or_default(),
            image_alt: image.alt_text.as_str(),
            image_width: image.width,
            image_height: image.height,
        })
    }
}
