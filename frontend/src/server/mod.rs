//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use frontend::Trace;
use frontend::inbound::http::configure_pages;
use frontend::inbound::http::health::{HealthState, live, ready};
use frontend::inbound::http::state::HttpState;
use frontend::outbound::rest::RestResourceClient;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(configure_pages)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The Resource Client is built once here and shared by every worker.
///
/// # Errors
/// Propagates [`std::io::Error`] when the API client cannot be built or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        api_base_url,
        request_timeout,
    } = config;

    let client = RestResourceClient::new(api_base_url, request_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to build API client: {e}")))?;
    info!(api = %client.base_url(), "guestbook API client ready");
    let http_state = web::Data::new(HttpState::from_client(client));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "frontend listening");
    Ok(server)
}
