use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::ACCEPT_LANGUAGE, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::convert::Infallible;

use super::locale::{Locale, SupportedLocales};
use super::negotiate::negotiate_header;
use crate::state::AppState;

/// Path prefixes the locale layer never touches: API, static files and
/// crawler endpoints.
pub const EXCLUDED_PREFIXES: [&str; 6] = [
    "/api",
    "/assets",
    "/static",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDecision {
    PassThrough,
    Redirect(String),
}

/// `true` when `path` equals an excluded prefix or lives beneath it.
pub fn is_excluded_path(path: &str) -> bool {
    EXCLUDED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// The locale named by the first path segment, if it is one we serve.
pub fn locale_from_path(path: &str, supported: &SupportedLocales) -> Option<Locale> {
    let first = path.strip_prefix('/')?.split('/').next()?;
    supported.find_exact(first)
}

/// `path` without trailing slashes; the root stays `/`.
fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn with_query(mut target: String, query: Option<&str>) -> String {
    if let Some(query) = query {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// Decide whether `path` needs a locale prefix and, if so, where to send the
/// client. Trailing slashes are dropped so every redirect lands on a routed
/// path. Query strings are carried over untouched.
pub fn resolve(
    path: &str,
    query: Option<&str>,
    accept_language: Option<&str>,
    supported: &SupportedLocales,
) -> LocaleDecision {
    let trimmed = trim_trailing_slash(path);

    if locale_from_path(trimmed, supported).is_some() {
        return if trimmed == path {
            LocaleDecision::PassThrough
        } else {
            LocaleDecision::Redirect(with_query(trimmed.to_string(), query))
        };
    }

    let target = if trimmed == "/" {
        format!("/{}", supported.default_locale())
    } else {
        let locale = negotiate_header(accept_language, supported);
        let sep = if trimmed.starts_with('/') { "" } else { "/" };
        format!("/{locale}{sep}{trimmed}")
    };

    LocaleDecision::Redirect(with_query(target, query))
}

fn accept_language(headers: &HeaderMap) -> Option<&str> {
    headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok())
}

/// Router middleware: requests whose path lacks a supported locale prefix are
/// answered with a 307 to the localized path.
pub async fn redirect_missing_locale(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if is_excluded_path(path) {
        return next.run(req).await;
    }

    let decision = resolve(
        path,
        req.uri().query(),
        accept_language(req.headers()),
        &state.locales,
    );

    match decision {
        LocaleDecision::PassThrough => next.run(req).await,
        LocaleDecision::Redirect(target) => {
            tracing::debug!(from = %req.uri(), to = %target, "Redirecting to localized path");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// The best supported locale for the request's `Accept-Language` header,
/// for handlers that live outside the localized tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferredLocale(pub Locale);

#[async_trait]
impl FromRequestParts<AppState> for PreferredLocale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(PreferredLocale(negotiate_header(
            accept_language(&parts.headers),
            &state.locales,
        )))
    }
}
