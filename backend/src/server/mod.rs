//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::future::Future;

use tracing::info;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::books;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;

/// Assemble the application: state, middleware, book routes and probes.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Routes are declared without a trailing slash; `/books/` and `/books`
    // both reach the same handler.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(Trace)
        .configure(books::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Bind the listener and mark the service ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, books } = config;
    let http_state = web::Data::new(HttpState::new(books));
    let server_health_state = health_state.clone();

    let server =
        HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
            .bind(bind_addr)?
            .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness probes once `shutdown` resolves, while actix drains
/// in-flight requests.
pub async fn mark_unhealthy_on(
    health_state: web::Data<HealthState>,
    shutdown: impl Future<Output = ()>,
) {
    shutdown.await;
    info!("shutdown requested; failing liveness probes");
    health_state.mark_unhealthy();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn liveness_flips_only_after_the_signal() {
        let state = web::Data::new(HealthState::new());
        let (tx, rx) = oneshot::channel::<()>();
        let watcher = tokio::spawn(mark_unhealthy_on(state.clone(), async {
            let _ = rx.await;
        }));

        tokio::task::yield_now().await;
        assert!(state.is_alive());

        tx.send(()).expect("watcher listening");
        watcher.await.expect("watcher finished");
        assert!(!state.is_alive());
    }
}
