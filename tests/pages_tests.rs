mod common;

use axum::http::{header, StatusCode};

#[tokio::test]
async fn health_check_reports_ok() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/api/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "ok");
    assert_eq!(res.json()["service"], "portfolio-server");
}

#[tokio::test]
async fn home_page_uses_locale_dictionary() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/de").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["dictionary"]["title"], "Gründer & Entwickler");
}

#[tokio::test]
async fn home_page_falls_back_to_english_dictionary() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/pt-BR").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["locale"], "pt-BR");
    assert_eq!(res.json()["dictionary"]["title"], "Founder & Engineer");
}

#[tokio::test]
async fn preferred_dictionary_follows_accept_language() {
    let app = common::create_test_app(vec![]);
    let res = common::get_with_language(app.router(), "/api/dictionary", "de-AT;q=0.9,en;q=0.5")
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["locale"], "de");

    let res = common::get(app.router(), "/api/dictionary").await;
    assert_eq!(res.json()["locale"], "en");
}

#[tokio::test]
async fn sitemap_lists_every_locale() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/sitemap.xml").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.headers.get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );
    let xml = res.text();
    // Site root plus home and startups for each of the ten locales.
    assert_eq!(xml.matches("<url>").count(), 21);
    assert!(xml.contains("<loc>https://portfolio.test/ar/startups</loc>"));
}

#[tokio::test]
async fn serves_static_assets() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/assets/logo.svg").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "<svg/>");
}
