use std::io;

use ramhorns::Template;

use crate::blog::display::PageMeta;
use crate::config::Site;
use crate::view::parse_template;

#[derive(ramhorns::Content)]
struct PageView<'a> {
    page_title: &'a str,
    page_description: &'a str,
    site_name: &'a str,
    site_description: &'a str,
    scheduling_url: &'a str,
    heading: &'a str,
    page_content: &'a str,
}

/// Landing page and static informational pages
pub struct PageRenderer<'a> {
    pub template: Template<'a>,
}

impl PageRenderer<'_> {
    pub fn new(page_tpl_src: &str) -> io::Result<PageRenderer<'_>> {
        let template = parse_template(page_tpl_src, "page")?;
        Ok(PageRenderer {
            template,
        })
    }

    pub fn render(&self, site: &Site, meta: &PageMeta, heading: &str, page_content: &str) -> String {
        self.template.render(&PageView {
            page_title: meta.title.as_str(),
            page_description: meta.description.as_str(),
            site_name: site.name.as_str(),
            site_description: site.description.as_str(),
            scheduling_url: site.scheduling_url.as_str(),
            heading,
            page_content,
        })
    }
}
