use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

const CONFIG_SAMPLE: &str = r#"[site]
name = "Launchpad"
description = "Raise capital from the people who already love your product"
scheduling_url = "https://calendly.com/launchpad/intro"

# The posts endpoint is {api_base}/posts
[wordpress]
api_base = "https://public-api.wordpress.com/wp/v2/sites/launchpad.wordpress.com"
per_page = 9
timeout_secs = 30
connect_timeout_secs = 10

# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
template_dir = "res/template"
public_dir = "res/public"
pages_dir = "res/pages"

# excerpt_ellipsis decides when listing excerpts get a trailing ellipsis:
# "rendered" looks at the HTML length, "stripped" at the visible text length
[defaults]
cache_enabled = true
excerpt_ellipsis = "rendered"

[server]
address = "0.0.0.0"
port = 8001

# Remove this section to log to stdout only
[log]
level = "Info"
log_to_console = true
"#;

pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(file_path)?;
    file.write_all(CONFIG_SAMPLE.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        let config = wpfront::config::parse_config(CONFIG_SAMPLE).unwrap();
        assert_eq!(config.wordpress.per_page(), 9);
        assert!(config.log.is_some());
    }
}
