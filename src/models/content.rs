use serde::Serialize;

use crate::content::{FrontMatter, LegalContent, LegalDocument};

/// Response body for `GET /api/content/:name`.
#[derive(Debug, Clone, Serialize)]
pub struct LegalContentDto {
    pub source: String,
    pub html: String,
    pub frontmatter: FrontMatter,
}

impl From<&LegalContent> for LegalContentDto {
    fn from(content: &LegalContent) -> Self {
        LegalContentDto {
            source: content.source.clone(),
            html: content.html.clone(),
            frontmatter: content.front_matter.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentListDto {
    pub documents: Vec<LegalDocument>,
}
