//! Backend entry-point: wires the invoice mutation service, credential
//! authenticator, and OpenAPI docs onto the HTTP server.

use std::env;
use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::{Authenticator, InvoiceActions};
use backend::inbound::http::invoices::{create_invoice, delete_invoice, update_invoice};
use backend::inbound::http::login::login;
use backend::inbound::http::state::HttpState;
use backend::outbound::cache::InProcessListingCache;
use backend::outbound::hashing::BcryptPasswordHasher;
use backend::outbound::persistence::{
    DbPool, DieselInvoiceRepository, DieselUserRepository, PoolConfig,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;

    let invoices = Arc::new(InvoiceActions::new(
        Arc::new(DieselInvoiceRepository::new(pool.clone())),
        Arc::new(InProcessListingCache::new()),
        Arc::new(DefaultClock),
    ));
    let login_service = Arc::new(Authenticator::new(
        Arc::new(DieselUserRepository::new(pool)),
        Arc::new(BcryptPasswordHasher::new()),
    ));
    let state = web::Data::new(HttpState::new(invoices, login_service));

    HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        let app = App::new()
            .app_data(state.clone())
            .wrap(session)
            .service(login)
            .service(create_invoice)
            .service(update_invoice)
            .service(delete_invoice);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}

/// Load the cookie signing key, falling back to an ephemeral key in dev.
fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}
