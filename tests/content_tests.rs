mod common;

use axum::http::{header, StatusCode};

#[tokio::test]
async fn serves_allow_listed_document() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/api/content/imprint").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.headers.get(header::CACHE_CONTROL).unwrap(),
        "public, s-maxage=3600, stale-while-revalidate=86400"
    );

    let body = res.json();
    assert_eq!(body["frontmatter"]["title"], "Imprint");
    assert_eq!(body["frontmatter"]["updated"], "2025-01-15");
    assert!(body["source"].as_str().unwrap().starts_with("# Imprint"));
    assert!(body["html"].as_str().unwrap().contains("<h1>Imprint</h1>"));
}

#[tokio::test]
async fn allow_listed_but_missing_document_is_404() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/api/content/privacy-policy").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["error"], "Content not found");
}

#[tokio::test]
async fn unknown_names_are_rejected() {
    let app = common::create_test_app(vec![]);
    // A file that exists on disk but is not allow-listed.
    std::fs::write(app.dir.path().join("legal").join("secret.md"), "nope").unwrap();

    for name in ["secret", "..%2Flegal%2Fimprint", "IMPRINT", "imprint.md"] {
        let res = common::get(app.router(), &format!("/api/content/{name}")).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{name} was served");
    }
}

#[tokio::test]
async fn lists_available_documents() {
    let app = common::create_test_app(vec![]);
    let res = common::get(app.router(), "/api/content").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["documents"], serde_json::json!(["imprint"]));

    std::fs::write(
        app.dir.path().join("legal").join("privacy-policy.md"),
        "# Privacy",
    )
    .unwrap();
    let res = common::get(app.router(), "/api/content").await;
    assert_eq!(
        res.json()["documents"],
        serde_json::json!(["imprint", "privacy-policy"])
    );
}
