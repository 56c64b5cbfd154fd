use thiserror::Error;

pub mod client;
pub mod query;
pub mod remote;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("Could not decode posts from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not build query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}
