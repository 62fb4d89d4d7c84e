//! Session cookie adapter
//!
//! The session token travels in an HttpOnly cookie named `jwt` whose expiry
//! matches the token's own.

use ambassador_auth_core::IssuedToken;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use crate::error::ApiError;

/// Session cookie name
pub const SESSION_COOKIE: &str = "jwt";

/// Add the session cookie for a freshly issued token
pub fn attach(jar: CookieJar, issued: &IssuedToken) -> Result<CookieJar, ApiError> {
    let cookie = Cookie::build((SESSION_COOKIE, issued.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .expires(to_offset(issued.expires_at)?)
        .build();

    Ok(jar.add(cookie))
}

/// Replace the session cookie with an empty, already expired one
pub fn clear(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .expires(OffsetDateTime::now_utc() - time::Duration::hours(1))
        .build();

    jar.add(cookie)
}

/// Raw session token, if the request carries a non-empty session cookie
pub fn extract(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
}

fn to_offset(at: DateTime<Utc>) -> Result<OffsetDateTime, ApiError> {
    OffsetDateTime::from_unix_timestamp(at.timestamp())
        .map_err(|e| ApiError::Internal(format!("cookie expiry out of range: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn issued(token: &str) -> IssuedToken {
        IssuedToken {
            token: token.to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(24),
        }
    }

    fn jar_with(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_attach_sets_http_only_cookie() {
        let token = issued("header.payload.signature");
        let jar = attach(CookieJar::new(), &token).unwrap();

        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.value(), "header.payload.signature");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(
            cookie.expires_datetime().map(|t| t.unix_timestamp()),
            Some(token.expires_at.timestamp())
        );
    }

    #[test]
    fn test_clear_expires_in_the_past() {
        let jar = clear(jar_with("jwt=header.payload.signature"));

        let set_cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(set_cookie.value(), "");
        let expires = set_cookie.expires_datetime().unwrap();
        assert!(expires < OffsetDateTime::now_utc());
    }

    #[test]
    fn test_extract() {
        assert_eq!(extract(&jar_with("jwt=abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(extract(&jar_with("theme=dark; jwt=abc")), Some("abc"));
        assert_eq!(extract(&jar_with("theme=dark")), None);
        assert_eq!(extract(&jar_with("jwt=")), None);
        assert_eq!(extract(&CookieJar::new()), None);
    }
}
