use std::io;

use ramhorns::Template;

use crate::blog::display::PageMeta;
use crate::config::Site;
use crate::view::parse_template;

/// What to tell the visitor when there is nothing else to show
pub struct StatusMessage {
    pub heading: &'static str,
    pub message: &'static str,
    pub back_link: &'static str,
    pub back_label: &'static str,
}

pub const POST_NOT_FOUND: StatusMessage = StatusMessage {
    heading: "Post not found",
    message: "The article you are looking for does not exist or has been moved.",
    back_link: "/blog",
    back_label: "Back to the blog",
};

pub const PAGE_NOT_FOUND: StatusMessage = StatusMessage {
    heading: "Page not found",
    message: "The page you are looking for does not exist.",
    back_link: "/",
    back_label: "Back to the home page",
};

pub const BLOG_UNAVAILABLE: StatusMessage = StatusMessage {
    heading: "Something went wrong",
    message: "We could not load our latest articles right now. Please try again in a few minutes.",
    back_link: "/",
    back_label: "Back to the home page",
};

#[derive(ramhorns::Content)]
struct StatusPage<'a> {
    page_title: &'a str,
    page_description: &'a str,
    site_name: &'a str,
    scheduling_url: &'a str,
    heading: &'a str,
    message: &'a str,
    back_link: &'a str,
    back_label: &'a str,
}

pub struct StatusRenderer<'a> {
    pub template: Template<'a>,
}

impl StatusRenderer<'_> {
    pub fn new(status_tpl_src: &str) -> io::Result<StatusRenderer<'_>> {
        let template = parse_template(status_tpl_src, "status")?;
        Ok(StatusRenderer {
            template,
        })
    }

    pub fn render(&self, site: &Site, status: &StatusMessage) -> String {
        let meta = PageMeta::new(status.heading, &site.name, status.message);
        self.template.render(&StatusPage {
            page_title: meta.title.as_str(),
            page_description: meta.description.as_str(),
            site_name: site.name.as_str(),
            scheduling_url: site.scheduling_url.as_str(),
            heading: status.heading,
            message: status.message,
            back_link: status.back_link,
            back_label: status.back_label,
        })
    }
}
