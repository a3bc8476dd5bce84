//! Open Graph link previews for the startups showcase.

pub mod cache;
pub mod extract;
pub mod fetcher;

pub use cache::PreviewCache;
pub use extract::extract_open_graph;
pub use fetcher::{PreviewError, PreviewFetcher, USER_AGENT};
