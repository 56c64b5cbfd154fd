use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use markdown::Options;

/// Informational page written in Markdown, e.g. `pages/about.md`
pub struct StaticPage {
    pub title: String,
    pub rendered: String,
}

/// Page names map straight to file names, so only a safe alphabet is accepted
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn load_page(pages_dir: &Path, name: &str) -> io::Result<StaticPage> {
    if !is_valid_name(name) {
        return Err(io::Error::new(ErrorKind::NotFound, format!("Invalid page name {}", name)));
    }

    let file_path = pages_dir.join(format!("{}.md", name));
    let md_text = fs::read_to_string(&file_path)?;
    parse_page(&md_text)
}

/// The first `# ` heading becomes the title, the rest is rendered as GFM
pub fn parse_page(md_text: &str) -> io::Result<StaticPage> {
    let md_text = remove_comments(md_text)?;

    let mut title: Option<String> = None;
    let mut body = String::new();
    for line in md_text.lines() {
        if title.is_none() {
            if let Some(heading) = line.strip_prefix("# ") {
                title = Some(heading.trim().to_string());
                continue;
            }
        }
        body.push_str(line);
        body.push('\n');
    }

    let rendered = match markdown::to_html_with_options(body.as_str(), &Options::gfm()) {
        Ok(x) => x,
        Err(e) => return Err(io::Error::new(ErrorKind::InvalidInput, e.reason.as_str())),
    };

    Ok(StaticPage {
        title: title.unwrap_or_default(),
        rendered,
    })
}

pub fn remove_comments(md_text: &str) -> io::Result<String> {
    let start_comment = "<!--";
    let end_comment = "-->";

    let mut res = String::new();
    let mut block = md_text;

    while let Some(start) = block.find(start_comment) {
        res.push_str(&block[0..start]);

        let next = &block[(start + start_comment.len())..];
        match next.find(end_comment) {
            Some(end) => block = &next[(end + end_comment.len())..],
            None => return Err(io::Error::new(ErrorKind::InvalidData, "Error finding end of comment")),
        }
    }
    res.push_str(block);

    Ok(res)
}
