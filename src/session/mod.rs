//! Session and flash cookies.
//!
//! The session cookie carries the signed token issued at login. Flash
//! cookies are one-shot: set on a redirect, read and cleared by the
//! next rendered page. Payloads are base64-encoded JSON so arbitrary
//! messages survive cookie value restrictions.

use std::collections::BTreeMap;

use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;
use actix_web::HttpRequest;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

pub const SESSION_COOKIE: &str = "repo_session";
pub const FLASH_ERRORS_COOKIE: &str = "flash_errors";
pub const FLASH_STATUS_COOKIE: &str = "flash_status";

/// Session cookie holding the signed auth token.
pub fn auth_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_owned())
        .path("/")
        .http_only(true)
        .finish()
}

/// Expired session cookie, set on logout.
pub fn forget_auth_cookie() -> Cookie<'static> {
    expired(SESSION_COOKIE)
}

/// Flash cookie carrying per-field validation errors.
pub fn errors_cookie(errors: &BTreeMap<String, Vec<String>>) -> Cookie<'static> {
    Cookie::build(FLASH_ERRORS_COOKIE, encode_errors(errors))
        .path("/")
        .http_only(true)
        .finish()
}

pub fn forget_errors_cookie() -> Cookie<'static> {
    expired(FLASH_ERRORS_COOKIE)
}

/// Flash cookie carrying a one-line status message.
pub fn status_cookie(message: &str) -> Cookie<'static> {
    Cookie::build(
        FLASH_STATUS_COOKIE,
        URL_SAFE_NO_PAD.encode(message.as_bytes()),
    )
    .path("/")
    .http_only(true)
    .finish()
}

pub fn forget_status_cookie() -> Cookie<'static> {
    expired(FLASH_STATUS_COOKIE)
}

/// Validation errors flashed by a previous redirect, empty when none.
pub fn flash_errors(req: &HttpRequest) -> BTreeMap<String, Vec<String>> {
    req.cookie(FLASH_ERRORS_COOKIE)
        .map(|cookie| decode_errors(cookie.value()))
        .unwrap_or_default()
}

/// Status message flashed by a previous redirect.
pub fn flash_status(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(FLASH_STATUS_COOKIE)?;
    let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
    String::from_utf8(bytes).ok()
}

pub fn encode_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    let json = serde_json::to_string(errors).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

pub fn decode_errors(value: &str) -> BTreeMap<String, Vec<String>> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn expired(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_round_trip() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "url".to_string(),
            vec!["The url field is required.".to_string()],
        );
        errors.insert(
            "description".to_string(),
            vec!["The description field is required.".to_string()],
        );

        let decoded = decode_errors(&encode_errors(&errors));
        assert_eq!(decoded, errors);
    }

    #[test]
    fn decode_errors_tolerates_garbage() {
        assert!(decode_errors("not base64 at all!").is_empty());
        assert!(decode_errors(&URL_SAFE_NO_PAD.encode(b"not json")).is_empty());
    }

    #[test]
    fn expired_cookies_have_zero_max_age() {
        let cookie = forget_auth_cookie();
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.name(), SESSION_COOKIE);
    }
}
