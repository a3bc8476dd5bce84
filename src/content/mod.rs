//! Legal pages (imprint, privacy policy) stored as Markdown with front matter.

pub mod document;
pub mod front_matter;
pub mod store;

pub use document::LegalDocument;
pub use front_matter::{split_front_matter, FrontMatter};
pub use store::{render_markdown, ContentStore, LegalContent};
