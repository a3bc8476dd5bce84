pub mod content;
pub mod link_preview;
pub mod page;

pub use content::{ContentListDto, LegalContentDto};
pub use link_preview::LinkPreview;
pub use page::{PageDto, StartupsPageDto};
