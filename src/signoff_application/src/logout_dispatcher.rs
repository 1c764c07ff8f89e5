use signoff_core::{IssueInstantFormatter, LogoutTransport, UniqueIdGenerator, WebApplicationService};

use crate::logout_message_builder::LogoutMessageBuilder;

/// Sends back-channel logout requests to web applications.
///
/// A service is flagged as logged out before anything goes on the wire, so
/// each service gets at most one attempt and failed deliveries are never retried.
pub struct LogoutDispatcher<T, G, C> {
    transport: Option<T>,
    message_builder: LogoutMessageBuilder<G, C>,
}

impl<T, G, C> LogoutDispatcher<T, G, C>
where
    T: LogoutTransport,
    G: UniqueIdGenerator,
    C: IssueInstantFormatter,
{
    pub fn new(transport: Option<T>, message_builder: LogoutMessageBuilder<G, C>) -> Self {
        Self {
            transport,
            message_builder,
        }
    }

    pub fn message_builder(&self) -> &LogoutMessageBuilder<G, C> {
        &self.message_builder
    }

    /// Posts a logout request for `session_ticket_id` to the service callback URL.
    ///
    /// Returns whether the service accepted it. Transport errors are logged
    /// and reported as `false`.
    #[tracing::instrument(
        name = "LogoutDispatcher::dispatch",
        skip(self, service),
        fields(service_id = %service.id())
    )]
    pub async fn dispatch(&self, service: &WebApplicationService, session_ticket_id: &str) -> bool {
        tracing::debug!("Sending logout request");

        if !service.mark_logged_out() {
            tracing::debug!("Service already notified, skipping");
            return false;
        }

        let Some(transport) = &self.transport else {
            tracing::debug!("No logout transport configured");
            return false;
        };

        let message = self.message_builder.build_back_channel(session_ticket_id);

        match transport
            .send_message(service.original_url(), message.as_xml(), true)
            .await
        {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(url = service.original_url(), "Logout request rejected by service");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, url = service.original_url(), "Logout transport failed");
                false
            }
        }
    }
}
