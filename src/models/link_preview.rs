use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=225&width=400";
pub const NO_TITLE: &str = "No title found";
pub const NO_DESCRIPTION: &str = "No description found";
pub const FETCH_FAILED_TITLE: &str = "Could not fetch data";

/// Card data for one startup link, built from the target page's Open Graph
/// tags. Every field is always populated; missing data becomes a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPreview {
    pub title: String,
    pub description: String,
    pub image: String,
    /// The URL that was requested, not wherever it redirected to.
    pub live_url: String,
}

impl LinkPreview {
    /// What the card shows when the page could not be fetched at all.
    pub fn fallback(url: &str) -> Self {
        LinkPreview {
            title: FETCH_FAILED_TITLE.to_string(),
            description: format!("There was an error fetching the details for {url}."),
            image: PLACEHOLDER_IMAGE.to_string(),
            live_url: url.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.title == FETCH_FAILED_TITLE && self.image == PLACEHOLDER_IMAGE
    }
}

/// Placeholder image for a page without `og:image`. The title goes into the
/// query string percent-encoded.
pub fn placeholder_image(title: &str) -> String {
    format!("{PLACEHOLDER_IMAGE}&query={}", urlencoding::encode(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_names_the_url() {
        let preview = LinkPreview::fallback("https://example.com");
        assert_eq!(preview.title, "Could not fetch data");
        assert_eq!(
            preview.description,
            "There was an error fetching the details for https://example.com."
        );
        assert_eq!(preview.image, "/placeholder.svg?height=225&width=400");
        assert_eq!(preview.live_url, "https://example.com");
        assert!(preview.is_fallback());
    }

    #[test]
    fn placeholder_encodes_title() {
        assert_eq!(
            placeholder_image("Tom & Jerry?"),
            "/placeholder.svg?height=225&width=400&query=Tom%20%26%20Jerry%3F"
        );
    }

    #[test]
    fn serializes_live_url_in_camel_case() {
        let json = serde_json::to_value(LinkPreview::fallback("https://a.dev")).unwrap();
        assert_eq!(json["liveUrl"], "https://a.dev");
        assert!(json.get("live_url").is_none());
    }
}
