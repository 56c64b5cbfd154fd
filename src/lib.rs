pub mod config;
pub mod logger;
pub mod server;
pub mod wordpress;
pub mod blog;
mod content_cache;
pub mod text_utils;
mod pages;
mod view;
mod test_data;
