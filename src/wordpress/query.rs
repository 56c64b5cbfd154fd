use crate::wordpress::FetchError;

/// Fields kept in listing responses
pub const LIST_FIELDS: &str = "id,slug,date_gmt,link,title,excerpt,_embedded";

/// First page of posts, newest first, with embedded media
pub fn list_url(api_base: &str, per_page: u32) -> String {
    format!("{}/posts?per_page={}&page=1&_embed&_fields={}", api_base, per_page, LIST_FIELDS)
}

/// Posts matching `slug` exactly, with embedded media
pub fn slug_url(api_base: &str, slug: &str) -> Result<String, FetchError> {
    let slug_query = serde_urlencoded::to_string([("slug", slug)])?;
    Ok(format!("{}/posts?{}&_embed", api_base, slug_query))
}
