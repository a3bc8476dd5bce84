use axum::{extract::State, http::header, response::IntoResponse};
use chrono::{NaiveDate, Utc};

use crate::{i18n::Locale, state::AppState};

struct SitemapEntry {
    loc: String,
    priority: &'static str,
}

/// All public pages: the bare site root plus each locale's home and
/// startups pages.
fn entries(site_url: &str, locales: &[Locale]) -> Vec<SitemapEntry> {
    let mut entries = vec![SitemapEntry {
        loc: site_url.to_string(),
        priority: "0.8",
    }];

    for locale in locales {
        entries.push(SitemapEntry {
            loc: format!("{site_url}/{locale}"),
            priority: "1.0",
        });
        entries.push(SitemapEntry {
            loc: format!("{site_url}/{locale}/startups"),
            priority: "0.8",
        });
    }

    entries
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn render_sitemap(site_url: &str, locales: &[Locale], last_modified: NaiveDate) -> String {
    let lastmod = last_modified.format("%Y-%m-%d");
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries(site_url, locales) {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
             <changefreq>monthly</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            xml_escape(&entry.loc),
            entry.priority,
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_sitemap(
        &state.site_url,
        state.locales.locales(),
        Utc::now().date_naive(),
    );
    ([(header::CONTENT_TYPE, "application/xml")], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_root_and_two_pages_per_locale() {
        let xml = render_sitemap(
            "https://m4nuel.com",
            &[Locale::En, Locale::ZhCn],
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.contains("<loc>https://m4nuel.com</loc>"));
        assert!(xml.contains("<loc>https://m4nuel.com/zh-CN/startups</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
    }

    #[test]
    fn locale_home_pages_have_top_priority() {
        let list = entries("https://a.dev", &[Locale::De]);
        assert_eq!(list[1].loc, "https://a.dev/de");
        assert_eq!(list[1].priority, "1.0");
        assert_eq!(list[2].priority, "0.8");
    }

    #[test]
    fn escapes_locations() {
        let xml = render_sitemap(
            "https://a.dev/?a=1&b=2",
            &[],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert!(xml.contains("https://a.dev/?a=1&amp;b=2"));
    }
}
