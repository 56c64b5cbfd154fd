use chrono::Duration;
use spdlog::{debug, error, info, warn};

use crate::blog::display::DisplayPost;
use crate::config::Defaults;
use crate::content_cache::ContentCache;
use crate::text_utils::EllipsisRule;
use crate::wordpress::client::{PostSource, LIST_MAX_AGE_SECS, POST_MAX_AGE_SECS};
use crate::wordpress::remote::RemotePost;
use crate::wordpress::FetchError;

const LIST_KEY: &str = "list";

/// Result of looking a post up by slug.
/// Every failure on the way ends up as `NotFound`.
#[derive(Debug, PartialEq)]
pub enum PostLookup {
    Found(DisplayPost),
    NotFound,
}

pub struct Blog<S: PostSource> {
    source: S,
    ellipsis: EllipsisRule,
    list_cache: ContentCache<Vec<RemotePost>>,
    post_cache: ContentCache<RemotePost>,
}

impl<S: PostSource> Blog<S> {
    pub fn new(source: S, defaults: &Defaults) -> Self {
        let (list_cache, post_cache) = if defaults.cache_enabled {
            (ContentCache::new(), ContentCache::new())
        } else {
            (ContentCache::non_caching(), ContentCache::non_caching())
        };

        Blog {
            source,
            ellipsis: defaults.ellipsis_rule(),
            list_cache,
            post_cache,
        }
    }

    /// Cards for the listing page. Upstream failures are returned as they are,
    /// a listing has nothing sensible to show without data.
    pub async fn list_posts(&self) -> Result<Vec<DisplayPost>, FetchError> {
        let posts = match self.list_cache.get(LIST_KEY) {
            Some(posts) => {
                debug!("Serving post list from cache");
                posts
            }
            None => {
                let posts = self.source.fetch_posts().await.map_err(|e| {
                    error!("Error fetching post list: {}", e);
                    e
                })?;
                info!("Fetched {} posts", posts.len());
                self.list_cache.add(LIST_KEY, posts, Duration::seconds(LIST_MAX_AGE_SECS))
            }
        };

        Ok(posts.iter().map(|post| DisplayPost::summary(post, self.ellipsis)).collect())
    }

    /// Looks up a single post. Never fails: a missing post and a broken upstream
    /// both give `NotFound`.
    pub async fn find_post(&self, slug: &str) -> PostLookup {
        let slug = slug.trim();
        if slug.is_empty() {
            return PostLookup::NotFound;
        }

        match self.fetch_post(slug).await {
            Ok(Some(post)) => PostLookup::Found(DisplayPost::full(&post, self.ellipsis)),
            Ok(None) => {
                info!("No post with slug {}", slug);
                PostLookup::NotFound
            }
            Err(e) => {
                warn!("Error fetching post {}, answering not found. Desc={}", slug, e);
                PostLookup::NotFound
            }
        }
    }

    async fn fetch_post(&self, slug: &str) -> Result<Option<RemotePost>, FetchError> {
        let key = format!("slug-{}", slug);
        if let Some(post) = self.post_cache.get(&key) {
            debug!("Serving post {} from cache", slug);
            return Ok(Some(post.as_ref().clone()));
        }

        // Slugs are unique upstream. If that ever breaks, the first match wins.
        let posts = self.source.fetch_by_slug(slug).await?;
        let Some(post) = posts.into_iter().next() else {
            return Ok(None);
        };

        let post = self.post_cache.add(&key, post, Duration::seconds(POST_MAX_AGE_SECS));
        Ok(Some(post.as_ref().clone()))
    }
}
