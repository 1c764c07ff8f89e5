use std::sync::Arc;

use signoff_core::{
    FrontChannelPayload, IssueInstantFormatter, LogoutPolicy, LogoutTransport, Service,
    ServiceRegistry, ServiceSessionBinding, TicketGrantingTicket, TicketRegistry,
    TicketRegistryError, UniqueIdGenerator,
};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::logout_dispatcher::LogoutDispatcher;

/// Error types for the single logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Ticket registry error: {0}")]
    TicketRegistryError(#[from] TicketRegistryError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutManagerConfig {
    /// Skip propagation to services. The ticket is still drained and expired.
    pub single_logout_disabled: bool,
}

/// A service that must be logged out through a browser redirect.
#[derive(Debug, Clone)]
pub struct FrontChannelLogout {
    binding: ServiceSessionBinding,
    payload: FrontChannelPayload,
}

impl FrontChannelLogout {
    pub fn service(&self) -> &Arc<Service> {
        self.binding.service()
    }

    pub fn binding(&self) -> &ServiceSessionBinding {
        &self.binding
    }

    /// Encoded `LogoutRequest` to carry in the redirect.
    pub fn payload(&self) -> &FrontChannelPayload {
        &self.payload
    }
}

/// The front channel logouts produced by one `perform_logout` call.
///
/// Consumed by iterating; it cannot be rewound.
#[derive(Debug)]
pub struct FrontChannelLogouts {
    inner: std::vec::IntoIter<FrontChannelLogout>,
}

impl FrontChannelLogouts {
    fn new(logouts: Vec<FrontChannelLogout>) -> Self {
        Self {
            inner: logouts.into_iter(),
        }
    }

    fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Iterator for FrontChannelLogouts {
    type Item = FrontChannelLogout;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FrontChannelLogouts {}

/// Single logout use case - propagates the end of a ticket granting ticket
/// to every service that received a service ticket under it.
pub struct LogoutManager<R, S, T, G, C> {
    ticket_registry: R,
    service_registry: Arc<S>,
    dispatcher: Arc<LogoutDispatcher<T, G, C>>,
    config: LogoutManagerConfig,
}

impl<R, S, T, G, C> LogoutManager<R, S, T, G, C>
where
    R: TicketRegistry,
    S: ServiceRegistry + 'static,
    T: LogoutTransport + 'static,
    G: UniqueIdGenerator + 'static,
    C: IssueInstantFormatter + 'static,
{
    pub fn new(
        ticket_registry: R,
        service_registry: S,
        dispatcher: LogoutDispatcher<T, G, C>,
        config: LogoutManagerConfig,
    ) -> Self {
        Self {
            ticket_registry,
            service_registry: Arc::new(service_registry),
            dispatcher: Arc::new(dispatcher),
            config,
        }
    }

    pub fn ticket_registry(&self) -> &R {
        &self.ticket_registry
    }

    /// Execute the single logout use case
    ///
    /// Drains and expires `ticket`, posts back channel logout requests
    /// concurrently and returns the services that need a front channel logout.
    ///
    /// Everything after the drain runs on detached tasks: dropping the
    /// returned future stops the wait, not the propagation.
    ///
    /// # Returns
    /// The front channel logouts, or LogoutError when the ticket could not be drained.
    /// Failing to reach a service is never an error.
    #[tracing::instrument(
        name = "LogoutManager::perform_logout",
        skip(self, ticket),
        fields(ticket_granting_ticket = %ticket.id())
    )]
    pub async fn perform_logout(
        &self,
        ticket: &TicketGrantingTicket,
    ) -> Result<FrontChannelLogouts, LogoutError> {
        let bindings = self.ticket_registry.drain_services(ticket).await?;

        if self.config.single_logout_disabled {
            tracing::debug!(
                services = bindings.len(),
                "Single logout disabled, not notifying services"
            );
            return Ok(FrontChannelLogouts::empty());
        }

        // Propagation runs detached from the caller: once the ticket is
        // drained, dropping this future must not strand any binding.
        let propagation = tokio::spawn(
            propagate(
                Arc::clone(&self.service_registry),
                Arc::clone(&self.dispatcher),
                bindings,
            )
            .in_current_span(),
        );

        match propagation.await {
            Ok(front_channel) => Ok(FrontChannelLogouts::new(front_channel)),
            Err(e) => {
                tracing::error!(error = %e, "Logout propagation task failed");
                Ok(FrontChannelLogouts::empty())
            }
        }
    }
}

/// Classifies every binding, posts back channel requests on their own tasks
/// and collects the front channel logouts.
async fn propagate<S, T, G, C>(
    service_registry: Arc<S>,
    dispatcher: Arc<LogoutDispatcher<T, G, C>>,
    bindings: Vec<ServiceSessionBinding>,
) -> Vec<FrontChannelLogout>
where
    S: ServiceRegistry,
    T: LogoutTransport + 'static,
    G: UniqueIdGenerator + 'static,
    C: IssueInstantFormatter + 'static,
{
    let mut front_channel = Vec::new();
    let mut back_channel: Vec<JoinHandle<(ServiceSessionBinding, bool)>> = Vec::new();

    for binding in bindings {
        let Some(web_app) = binding.service().as_web_application() else {
            continue;
        };
        if web_app.is_logged_out_already() {
            continue;
        }

        let policy = match service_registry.find_logout_policy(binding.service()).await {
            Ok(policy) => policy.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    service_id = web_app.id(),
                    error = %e,
                    "Could not resolve logout policy; skipping service"
                );
                continue;
            }
        };

        match policy {
            LogoutPolicy::None => {
                tracing::debug!(
                    service_id = web_app.id(),
                    "Logout propagation disabled for service"
                );
            }
            LogoutPolicy::FrontChannel => {
                match dispatcher
                    .message_builder()
                    .build_front_channel(binding.ticket_id())
                {
                    Ok(payload) => front_channel.push(FrontChannelLogout { binding, payload }),
                    Err(e) => {
                        tracing::warn!(
                            service_id = web_app.id(),
                            error = %e,
                            "Failed to build front channel logout request"
                        );
                    }
                }
            }
            LogoutPolicy::BackChannel => {
                let dispatcher = Arc::clone(&dispatcher);
                let send = async move {
                    let delivered = match binding.service().as_ref() {
                        Service::WebApplication(web_app) => {
                            dispatcher.dispatch(web_app, binding.ticket_id()).await
                        }
                        Service::Other { .. } => false,
                    };
                    (binding, delivered)
                };
                back_channel.push(tokio::spawn(send.in_current_span()));
            }
        }
    }

    for handle in back_channel {
        match handle.await {
            Ok((binding, true)) => {
                tracing::debug!(
                    service_id = binding.service().id(),
                    "Logout message delivered"
                );
            }
            Ok((binding, false)) => {
                // Delivery failures are already reported by the dispatcher.
                tracing::debug!(
                    service_id = binding.service().id(),
                    "Logout message not delivered; continuing processing"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Back channel logout task failed");
            }
        }
    }

    front_channel
}
