use reqwest::header::ACCEPT;
use spdlog::{debug, info};

use crate::config::WordPress;
use crate::wordpress::query::{list_url, slug_url};
use crate::wordpress::remote::RemotePost;
use crate::wordpress::FetchError;

/// Listing responses may be served from cache for this long
pub const LIST_MAX_AGE_SECS: i64 = 60;
/// Single post responses may be served from cache for this long
pub const POST_MAX_AGE_SECS: i64 = 3600;

/// Where posts come from. The blog only needs the first page and lookups by slug.
#[allow(async_fn_in_trait)]
pub trait PostSource {
    /// First page of posts, newest first. Non-success answers are errors.
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>, FetchError>;

    /// Every post whose slug is exactly `slug`. Normally zero or one.
    async fn fetch_by_slug(&self, slug: &str) -> Result<Vec<RemotePost>, FetchError>;
}

pub struct WpClient {
    http: reqwest::Client,
    api_base: String,
    per_page: u32,
}

impl WpClient {
    pub fn new(config: &WordPress) -> reqwest::Result<WpClient> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .user_agent(format!("wpfront/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(WpClient {
            http,
            api_base: config.api_base.clone(),
            per_page: config.per_page(),
        })
    }

    async fn get_posts(&self, url: String) -> Result<Vec<RemotePost>, FetchError> {
        info!("Fetching {}", url);
        let response = match self.http.get(&url).header(ACCEPT, "application/json").send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_str::<Vec<RemotePost>>(&body)
            .map_err(|source| FetchError::Decode { url, source })
    }
}

impl PostSource for WpClient {
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>, FetchError> {
        self.get_posts(list_url(&self.api_base, self.per_page)).await
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<Vec<RemotePost>, FetchError> {
        let url = slug_url(&self.api_base, slug)?;
        self.get_posts(url).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use crate::blog::service::tests::defaults;
    use crate::blog::service::{Blog, PostLookup};
    use crate::test_data::LIST_JSON;

    use super::*;

    /// Answers a single request with `status` and `body`, handing back the request head
    fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status, body.len(), body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            let _ = tx.send(String::from_utf8_lossy(&head).to_string());
        });

        (format!("http://127.0.0.1:{}/wp/v2", port), rx)
    }

    fn client(api_base: &str) -> WpClient {
        WpClient::new(&WordPress {
            api_base: api_base.to_string(),
            per_page: None,
            timeout_secs: Some(5),
            connect_timeout_secs: Some(5),
        }).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_posts() {
        let (api_base, request) = serve_once("200 OK", LIST_JSON);

        let posts = client(&api_base).fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].slug, "community-rounds-explained");

        let request = request.recv().unwrap();
        assert!(request.starts_with("GET /wp/v2/posts?per_page=9&page=1&_embed&_fields="));
        assert!(request.to_lowercase().contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_fetch_posts_server_error() {
        let (api_base, request) = serve_once("500 Internal Server Error", "{}");

        let err = client(&api_base).fetch_posts().await.err().unwrap();
        match err {
            FetchError::Status { status, url } => {
                assert_eq!(status, 500);
                assert!(url.starts_with(&api_base));
            }
            other => panic!("Unexpected error {:?}", other),
        }
        assert!(request.recv().unwrap().starts_with("GET /wp/v2/posts?"));
    }

    #[tokio::test]
    async fn test_fetch_by_slug_empty_body() {
        let (api_base, request) = serve_once("200 OK", "");

        let err = client(&api_base).fetch_by_slug("our first year").await.err().unwrap();
        assert!(matches!(err, FetchError::Decode { .. }));
        assert!(request.recv().unwrap().starts_with("GET /wp/v2/posts?slug=our+first+year&_embed "));
    }

    #[tokio::test]
    async fn test_empty_body_is_not_found() {
        let (api_base, _request) = serve_once("200 OK", "");

        let blog = Blog::new(client(&api_base), &defaults(false));
        assert_eq!(blog.find_post("our-first-year").await, PostLookup::NotFound);
    }
}
