use scraper::{Html, Selector};

use crate::models::link_preview::{placeholder_image, NO_DESCRIPTION, NO_TITLE};
use crate::models::LinkPreview;

/// Parse Open Graph tags from `html` into a `LinkPreview` for `url`.
///
/// Each field degrades on its own: `og:title` falls back to `<title>` and
/// then a fixed string, `og:description` to a fixed string, and `og:image`
/// to a placeholder keyed by the title. Never fails, whatever the markup.
pub fn extract_open_graph(html: &str, url: &str) -> LinkPreview {
    let document = Html::parse_document(html);

    let title = get_meta_property(&document, "og:title")
        .or_else(|| get_title_tag(&document))
        .unwrap_or_else(|| NO_TITLE.to_string());

    let description = get_meta_property(&document, "og:description")
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let image =
        get_meta_property(&document, "og:image").unwrap_or_else(|| placeholder_image(&title));

    LinkPreview {
        title,
        description,
        image,
        live_url: url.to_string(),
    }
}

fn get_meta_property(doc: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn get_title_tag(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
