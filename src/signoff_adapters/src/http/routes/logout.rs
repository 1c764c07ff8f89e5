use std::sync::Arc;

use axum::{Json, extract::State};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use signoff_application::{FrontChannelLogout, LogoutManager};
use signoff_core::{
    IssueInstantFormatter, LogoutTransport, ServiceRegistry, TicketId, TicketRegistry,
    UniqueIdGenerator,
};

use super::error::SloApiError;

/// Query parameter of the SAML HTTP-redirect binding.
pub const SAML_REQUEST_PARAMETER: &str = "SAMLRequest";

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub ticket_granting_ticket: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub front_channel: Vec<FrontChannelRedirect>,
}

/// One browser redirect the caller still has to issue.
#[derive(Debug, Serialize, Deserialize)]
pub struct FrontChannelRedirect {
    pub service: String,
    pub session_index: String,
    pub logout_request: String,
    pub redirect_url: Option<String>,
}

impl From<FrontChannelLogout> for FrontChannelRedirect {
    fn from(logout: FrontChannelLogout) -> Self {
        let redirect_url = logout
            .service()
            .as_web_application()
            .and_then(|web_app| redirect_url(web_app.original_url(), logout.payload().as_str()));

        Self {
            service: logout.service().id().to_string(),
            session_index: logout.binding().ticket_id().to_string(),
            logout_request: logout.payload().to_string(),
            redirect_url,
        }
    }
}

fn redirect_url(service_url: &str, payload: &str) -> Option<String> {
    let mut url = Url::parse(service_url).ok()?;
    url.query_pairs_mut()
        .append_pair(SAML_REQUEST_PARAMETER, payload);
    Some(url.to_string())
}

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<R, S, T, G, C>(
    State(manager): State<Arc<LogoutManager<R, S, T, G, C>>>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, SloApiError>
where
    R: TicketRegistry + 'static,
    S: ServiceRegistry + 'static,
    T: LogoutTransport + 'static,
    G: UniqueIdGenerator + 'static,
    C: IssueInstantFormatter + 'static,
{
    if request.ticket_granting_ticket.trim().is_empty() {
        return Err(SloApiError::InvalidInput(
            "ticket_granting_ticket must not be empty".to_string(),
        ));
    }

    let ticket_id = TicketId::new(request.ticket_granting_ticket);
    let ticket = manager.ticket_registry().get_ticket(&ticket_id).await?;

    let front_channel = manager
        .perform_logout(&ticket)
        .await?
        .map(FrontChannelRedirect::from)
        .collect();

    Ok(Json(LogoutResponse { front_channel }))
}
