//! Base URL extraction for download links
//!
//! Reads the scheme and host a request arrived on (including `X-Forwarded-Proto` and
//! `X-Forwarded-Host` from a fronting proxy) and resolves them through the configured
//! [`BaseUrlPolicy`](folio_core::BaseUrlPolicy).

use crate::state::PortfolioState;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts, HeaderMap};
use folio_core::RequestOrigin;
use std::convert::Infallible;

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Collect origin information from request parts.
pub fn request_origin(parts: &Parts) -> RequestOrigin {
    let host = header_str(&parts.headers, header::HOST.as_str())
        .or_else(|| parts.uri.authority().map(|a| a.to_string()));

    RequestOrigin {
        scheme: parts.uri.scheme_str().map(String::from),
        host,
        forwarded_proto: header_str(&parts.headers, "x-forwarded-proto"),
        forwarded_host: header_str(&parts.headers, "x-forwarded-host"),
    }
}

/// Base URL for materializing download links on this request. Never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBaseUrl(pub String);

impl<S> FromRequestParts<S> for RequestBaseUrl
where
    PortfolioState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let portfolio = PortfolioState::from_ref(state);
        let origin = request_origin(parts);
        Ok(RequestBaseUrl(portfolio.url_policy.resolve(&origin)))
    }
}
