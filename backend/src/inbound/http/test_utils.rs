//! Shared fixtures for HTTP handler tests.

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;

/// Cookie session middleware for in-process test apps.
///
/// Uses a throwaway signing key and a non-`Secure` cookie named `session`
/// so `TestRequest` round-trips work over plain HTTP.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    let throwaway_key = Key::generate();
    SessionMiddleware::builder(CookieSessionStore::default(), throwaway_key)
        .cookie_name("session".into())
        .cookie_secure(false)
        .build()
}
