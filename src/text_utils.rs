use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// Listing cards show this many characters of the excerpt.
pub const LISTING_EXCERPT_CHARS: usize = 140;
/// `<meta name="description">` gets this many characters.
pub const META_DESCRIPTION_CHARS: usize = 160;

const ELLIPSIS: char = '…';

/// Decides when a truncated excerpt gets the trailing ellipsis.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EllipsisRule {
    /// Compare the length of the rendered HTML, markup included, with the limit.
    #[default]
    #[serde(rename = "rendered")]
    RenderedLength,
    /// Compare the length of the visible text with the limit.
    #[serde(rename = "stripped")]
    StrippedLength,
}

/// Removes every `<...>` tag and trims the result.
/// Entities are left as they are.
pub fn strip_tags(html: &str) -> String {
    lazy_static! {
        static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
    }

    TAG_REGEX.replace_all(html, "").trim().to_string()
}

pub fn truncate_excerpt(rendered: &str, max_chars: usize, rule: EllipsisRule) -> String {
    let stripped = strip_tags(rendered);

    let exceeded = match rule {
        EllipsisRule::RenderedLength => rendered.chars().count() > max_chars,
        EllipsisRule::StrippedLength => stripped.chars().count() > max_chars,
    };

    let mut excerpt: String = stripped.chars().take(max_chars).collect();
    if exceeded {
        excerpt.push(ELLIPSIS);
    }
    excerpt
}

/// Parses WordPress `date_gmt` values. They carry no zone marker but are always UTC.
pub fn parse_gmt_date(buf: &str) -> Result<DateTime<Utc>, String> {
    match NaiveDateTime::parse_from_str(buf.trim(), "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(date_time) => Ok(date_time.and_utc()),
        Err(e) => Err(format!("Unable to parse date time {}: {}", buf, e)),
    }
}

pub fn format_date(date_time: &DateTime<Utc>) -> String {
    date_time.format("%B %-d, %Y").to_string()
}

/// Human readable form of a `date_gmt` value, or the raw value if it can't be parsed.
pub fn display_date(date_gmt: &str) -> String {
    match parse_gmt_date(date_gmt) {
        Ok(date_time) => format_date(&date_time),
        Err(_) => date_gmt.to_string(),
    }
}
