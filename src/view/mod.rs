use std::io;
use std::io::ErrorKind;
use std::path::Path;

use ramhorns::Template;

pub mod list_renderer;
pub mod page_renderer;
pub mod post_renderer;
pub mod status_renderer;

pub fn read_template(tpl_dir: &Path, file_name: &str) -> io::Result<String> {
    let full_path = tpl_dir.join(file_name);
    match std::fs::read_to_string(&full_path) {
        Ok(src) => Ok(src),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error loading template {}: {}", full_path.display(), e))),
    }
}

fn parse_template<'a>(src: &'a str, name: &str) -> io::Result<Template<'a>> {
    match Template::new(src) {
        Ok(x) => Ok(x),
        Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing {} template: {}", name, e))),
    }
}
