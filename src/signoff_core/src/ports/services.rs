use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoutTransportError {
    #[error("Invalid logout endpoint {0}")]
    InvalidEndpoint(String),
    #[error("Logout request failed: {0}")]
    RequestFailed(String),
}

/// Port trait for delivering back-channel logout messages
#[async_trait]
pub trait LogoutTransport: Send + Sync {
    /// Posts `message` to `url`.
    ///
    /// With `wait_for_response` the result reflects the endpoint's answer;
    /// otherwise the request is only queued and `Ok(true)` means "sent off".
    async fn send_message(
        &self,
        url: &str,
        message: &str,
        wait_for_response: bool,
    ) -> Result<bool, LogoutTransportError>;
}

/// Port trait for minting collision-resistant identifiers
pub trait UniqueIdGenerator: Send + Sync {
    fn new_id(&self, prefix: &str) -> String;
}

/// Port trait rendering "now" as a SAML `IssueInstant`
pub trait IssueInstantFormatter: Send + Sync {
    fn issue_instant(&self) -> String;
}
