use reqwest::{Client, Url};
use signoff_core::{LogoutTransport, LogoutTransportError};

/// Form field back-channel receivers read the `LogoutRequest` from.
pub const LOGOUT_REQUEST_PARAMETER: &str = "logoutRequest";

#[derive(Debug, Clone)]
pub struct ReqwestLogoutTransport {
    http_client: Client,
}

impl ReqwestLogoutTransport {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl LogoutTransport for ReqwestLogoutTransport {
    #[tracing::instrument(name = "Sending logout request", skip(self, message))]
    async fn send_message(
        &self,
        url: &str,
        message: &str,
        wait_for_response: bool,
    ) -> Result<bool, LogoutTransportError> {
        let endpoint = Url::parse(url)
            .map_err(|e| LogoutTransportError::InvalidEndpoint(format!("{url}: {e}")))?;

        let request = self
            .http_client
            .post(endpoint)
            .form(&[(LOGOUT_REQUEST_PARAMETER, message)]);

        if !wait_for_response {
            tokio::spawn(async move {
                if let Err(e) = request.send().await {
                    tracing::debug!(error = %e, "Fire-and-forget logout request failed");
                }
            });
            return Ok(true);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LogoutTransportError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "Logout endpoint rejected the request");
        }
        Ok(status.is_success())
    }
}
