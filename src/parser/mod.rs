pub mod extractor;
pub mod models;
pub mod stream_selector;
