pub mod display;
pub mod media;
pub mod service;
