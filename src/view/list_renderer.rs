use std::io;

use ramhorns::Template;

use crate::blog::display::{DisplayPost, PageMeta};
use crate::config::Site;
use crate::view::parse_template;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    page_title: &'a str,
    page_description: &'a str,
    site_name: &'a str,
    scheduling_url: &'a str,
    post_list: Vec<PostCard<'a>>,
    has_posts: bool,
}

#[derive(ramhorns::Content)]
struct PostCard<'a> {
    link: String,
    date: &'a str,
    title: &'a str,
    excerpt: &'a str,
    has_image: bool,
    image_url: &'a str,
    image_alt: &'a str,
    image_width: u32,
    image_height: u32,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer<'_>> {
        let template = parse_template(list_tpl_src, "post list")?;
        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, site: &Site, meta: &PageMeta, posts: &[DisplayPost]) -> String {
        let mut post_list = vec![];
        for post in posts {
            let image = &post.featured_image;
            post_list.push(PostCard {
                link: post.link(),
                date: post.published_at.as_str(),
                title: post.title_html.as_str(),
                excerpt: post.plain_excerpt.as_str(),
                has_image: image.url.is_some(),
                image_url: image.url.as_deref().unwrap_or_default(),
                image_alt: image.alt_text.as_str(),
                image_width: image.width,
                image_height: image.height,
            });
        }

        self.template.render(&ListPage {
            page_title: meta.title.as_str(),
            page_description: meta.description.as_str(),
            site_name: site.name.as_str(),
            scheduling_url: site.scheduling_url.as_str(),
            has_posts: !post_list.is_empty(),
            post_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::blog::media::FeaturedImage;

    use super::*;

    fn site() -> Site {
        Site {
            name: "Launchpad".to_string(),
            description: "Raise capital from your community".to_string(),
            scheduling_url: "https://calendly.com/launchpad/intro".to_string(),
        }
    }

    fn post(slug: &str, url: Option<&str>) -> DisplayPost {
        DisplayPost {
            id: 1,
            slug: slug.to_string(),
            published_at: "March 4, 2024".to_string(),
            title_html: "Rounds <em>explained</em>".to_string(),
            content_html: "".to_string(),
            plain_excerpt: "Fish &amp; <chips>".to_string(),
            featured_image: FeaturedImage {
                url: url.map(str::to_string),
                alt_text: "Pitch night".to_string(),
                width: 768,
                height: 512,
            },
        }
    }

    #[test]
    fn render_list() {
        let template_src = r##"<title>{{page_title}}</title>
{{#post_list}}[{{link}}|{{date}}|{{{title}}}|{{excerpt}}|{{#has_image}}<img src="{{image_url}}" alt="{{image_alt}}" width="{{image_width}}" height="{{image_height}}">{{/has_image}}{{^has_image}}<div class="placeholder"></div>{{/has_image}}]{{/post_list}}{{^has_posts}}No posts yet{{/has_posts}}"##;
        let renderer = ListRenderer::new(template_src).unwrap();
        let meta = PageMeta::new("Blog", "Launchpad", "desc");
        let posts = vec![post("with-image", Some("https://cdn/x.jpg")), post("no-image", None)];

        let res = renderer.render(&site(), &meta, &posts);
        assert!(res.starts_with("<title>Blog | Launchpad</title>"));
        assert!(res.contains(r##"[/blog/with-image/|March 4, 2024|Rounds <em>explained</em>|Fish &amp;amp; &lt;chips&gt;|<img src="https://cdn/x.jpg" alt="Pitch night" width="768" height="512">]"##));
        assert!(res.contains(r##"[/blog/no-image/|March 4, 2024|Rounds <em>explained</em>|Fish &amp;amp; &lt;chips&gt;|<div class="placeholder"></div>]"##));
        assert!(!res.contains("No posts yet"));
    }

    #[test]
    fn render_empty_list() {
        let renderer = ListRenderer::new("{{#post_list}}x{{/post_list}}{{^has_posts}}No posts yet{{/has_posts}}").unwrap();
        let meta = PageMeta::new("Blog", "Launchpad", "desc");
        assert_eq!(renderer.render(&site(), &meta, &[]), "No posts yet");
    }
}
