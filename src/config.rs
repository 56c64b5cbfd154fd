use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;

use crate::text_utils::EllipsisRule;

pub const DEFAULT_PER_PAGE: u32 = 9;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Clone, Debug)]
pub struct Site {
    pub name: String,
    pub description: String,
    /// Link used by every "book a call" button on the site
    pub scheduling_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WordPress {
    /// Origin of the REST API, without the trailing `/posts`
    pub api_base: String,
    pub per_page: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl WordPress {
    pub fn per_page(&self) -> u32 {
        match self.per_page {
            Some(0) | None => DEFAULT_PER_PAGE,
            Some(x) => x,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS))
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
    pub pages_dir: PathBuf,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Defaults {
    pub cache_enabled: bool,
    pub excerpt_ellipsis: Option<EllipsisRule>,
}

impl Defaults {
    pub fn ellipsis_rule(&self) -> EllipsisRule {
        self.excerpt_ellipsis.unwrap_or_default()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub site: Site,
    pub wordpress: WordPress,
    pub paths: Paths,
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    if !str_path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(dir) => PathBuf::from(str_path.replace("${exe_dir}", &dir.to_string_lossy())),
        None => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    let api_base = cfg.wordpress.api_base.trim().trim_end_matches('/').to_string();
    if api_base.is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidData, "wordpress.api_base cannot be empty"));
    }
    cfg.wordpress.api_base = api_base;

    cfg.paths = Paths {
        template_dir: parse_path(cfg.paths.template_dir),
        public_dir: parse_path(cfg.paths.public_dir),
        pages_dir: parse_path(cfg.paths.pages_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const CONFIG_DATA: &str = r##"
[site]
name = "Launchpad"
description = "Raise capital from your community"
scheduling_url = "https://calendly.com/launchpad/intro"

[wordpress]
api_base = "https://public-api.wordpress.com/wp/v2/sites/launchpad.wordpress.com/"

[paths]
template_dir = "res/template"
public_dir = "res/public"
pages_dir = "res/pages"

[defaults]
cache_enabled = true

[server]
address = "127.0.0.1"
port = 8001
"##;

    #[test]
    fn test_parse_config() {
        let cfg = parse_config(CONFIG_DATA).unwrap();
        assert_eq!(cfg.site.name, "Launchpad");
        assert_eq!(cfg.wordpress.api_base, "https://public-api.wordpress.com/wp/v2/sites/launchpad.wordpress.com");
        assert_eq!(cfg.wordpress.per_page(), 9);
        assert_eq!(cfg.wordpress.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.wordpress.connect_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.defaults.ellipsis_rule(), EllipsisRule::RenderedLength);
        assert_eq!(cfg.paths.pages_dir, PathBuf::from("res/pages"));
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_parse_optional_values() {
        let src = CONFIG_DATA
            .replace("[defaults]\n", "[defaults]\nexcerpt_ellipsis = \"stripped\"\n")
            .replace("[wordpress]\n", "[wordpress]\nper_page = 4\ntimeout_secs = 5\n");
        let cfg = parse_config(&src).unwrap();
        assert_eq!(cfg.defaults.ellipsis_rule(), EllipsisRule::StrippedLength);
        assert_eq!(cfg.wordpress.per_page(), 4);
        assert_eq!(cfg.wordpress.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_empty_api_base() {
        let src = CONFIG_DATA.replace(
            "\"https://public-api.wordpress.com/wp/v2/sites/launchpad.wordpress.com/\"",
            "\" \"");
        let err = parse_config(&src).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[site\nname=").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
