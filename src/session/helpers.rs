//! Session cookie helpers.

use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use uuid::Uuid;

use crate::host::{HostHints, TELEGRAM_INIT_DATA_HEADER};

/// Name of the cookie carrying the shop session id.
pub const SESSION_COOKIE: &str = "shop_session";

/// Session id for the current request, and whether it was just minted.
#[derive(Debug, Clone)]
pub struct SessionKey {
    pub id: String,
    pub is_new: bool,
    pub hints: HostHints,
}

impl SessionKey {
    /// Reads the session cookie, minting a new id when it is missing.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let existing = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
            .map(|(_, value)| value.to_string());

        let hints = HostHints {
            init_data_header: headers.contains_key(TELEGRAM_INIT_DATA_HEADER),
            host_query: false,
        };

        match existing {
            Some(id) => Self {
                id,
                is_new: false,
                hints,
            },
            None => Self {
                id: Uuid::new_v4().simple().to_string(),
                is_new: true,
                hints,
            },
        }
    }

    /// Replaces the id with a freshly minted one, keeping the host hints.
    pub fn reissue(self) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            is_new: true,
            hints: self.hints,
        }
    }

    pub fn with_host_query(mut self, host_query: bool) -> Self {
        self.hints.host_query = host_query;
        self
    }

    /// `303 See Other` back to the storefront page.
    pub fn redirect_home(&self) -> Response {
        self.attach(Redirect::to("/").into_response())
    }

    /// Adds `Set-Cookie` for freshly minted sessions.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.is_new {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => tracing::warn!(error = %e, "Invalid session cookie value"),
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_reads_existing_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; shop_session=abc123; other=1"),
        );
        let key = SessionKey::from_headers(&headers);
        assert_eq!(key.id, "abc123");
        assert!(!key.is_new);
        assert!(!key.hints.init_data_header);

        let response = key.attach(().into_response());
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn test_mints_new_session() {
        let mut headers = HeaderMap::new();
        headers.insert(TELEGRAM_INIT_DATA_HEADER, HeaderValue::from_static("query_id=1"));
        let key = SessionKey::from_headers(&headers).with_host_query(true);
        assert!(key.is_new);
        assert_eq!(key.id.len(), 32);
        assert!(key.hints.init_data_header);
        assert!(key.hints.host_query);

        let response = key.attach(().into_response());
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with(&format!("shop_session={}", key.id)));
    }

    #[test]
    fn test_empty_cookie_value_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("shop_session="));
        assert!(SessionKey::from_headers(&headers).is_new);
    }

    #[test]
    fn test_redirect_home() {
        let key = SessionKey::from_headers(&HeaderMap::new());
        let response = key.redirect_home();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        assert!(response.headers().get(header::SET_COOKIE).is_some());
    }
}
