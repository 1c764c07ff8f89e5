use std::sync::Arc;

use axum::{Router, routing::post};
use signoff_adapters::{
    DefaultUniqueIdGenerator, ReqwestLogoutTransport, UtcIssueInstantFormatter,
    config::SloSettings, http::routes::logout,
};
use signoff_application::{LogoutDispatcher, LogoutManager, LogoutMessageBuilder};
use signoff_core::{
    IssueInstantFormatter, LogoutTransport, ServiceRegistry, TicketRegistry, UniqueIdGenerator,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front door of the single logout engine
pub struct SloService {
    router: Router,
}

impl SloService {
    /// Create a new SloService around a configured logout manager
    pub fn new<R, S, T, G, C>(manager: LogoutManager<R, S, T, G, C>) -> Self
    where
        R: TicketRegistry + 'static,
        S: ServiceRegistry + 'static,
        T: LogoutTransport + 'static,
        G: UniqueIdGenerator + 'static,
        C: IssueInstantFormatter + 'static,
    {
        let router = Router::new()
            .route("/logout", post(logout::<R, S, T, G, C>))
            .with_state(Arc::new(manager));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the SloService into a router that can be nested into another application
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Single logout service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

/// Wires a logout manager with the default adapters described by `settings`.
///
/// # Returns
/// The manager, or the error raised while building the HTTP client
pub fn build_logout_manager<R, S>(
    ticket_registry: R,
    service_registry: S,
    settings: &SloSettings,
) -> Result<
    LogoutManager<R, S, ReqwestLogoutTransport, DefaultUniqueIdGenerator, UtcIssueInstantFormatter>,
    reqwest::Error,
>
where
    R: TicketRegistry,
    S: ServiceRegistry + 'static,
{
    let http_client = reqwest::Client::builder()
        .timeout(settings.http_client.timeout())
        .build()?;

    let message_builder = LogoutMessageBuilder::new(
        DefaultUniqueIdGenerator::new(
            settings.id_generator.random_length,
            settings.id_generator.suffix.clone(),
        ),
        UtcIssueInstantFormatter::new(),
    );

    let dispatcher = LogoutDispatcher::new(
        Some(ReqwestLogoutTransport::new(http_client)),
        message_builder,
    );

    Ok(LogoutManager::new(
        ticket_registry,
        service_registry,
        dispatcher,
        settings.logout_manager_config(),
    ))
}
