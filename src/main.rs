//! Contacting server binary.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use contacting::adapters::http::{build_router, ContactHandlers, CsrfSigner, SessionCookie};
use contacting::adapters::session::{InMemorySessionStore, RedisSessionStore};
use contacting::application::handlers::contact::{
    CreateContactHandler, DeleteContactHandler, GetContactHandler, ListContactsHandler,
    UpdateContactHandler,
};
use contacting::config::{AppConfig, SessionBackend};
use contacting::ports::SessionStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("contacting failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let store: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => Arc::new(InMemorySessionStore::new()),
        SessionBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .ok_or("redis backend selected without redis configuration")?;
            Arc::new(RedisSessionStore::connect(redis, config.session.ttl()).await?)
        }
    };

    let handlers = ContactHandlers::new(
        Arc::new(ListContactsHandler::new(store.clone())),
        Arc::new(GetContactHandler::new(store.clone())),
        Arc::new(CreateContactHandler::new(store.clone())),
        Arc::new(UpdateContactHandler::new(store.clone())),
        Arc::new(DeleteContactHandler::new(store)),
        Arc::new(CsrfSigner::new(config.session.csrf_key.clone())),
    );

    let app = build_router(
        handlers,
        SessionCookie::new(config.session.cookie_name.clone()),
    )
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, backend = ?config.session.backend, "contacting listening");
    axum::serve(listener, app).await?;

    Ok(())
}
