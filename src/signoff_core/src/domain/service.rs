use std::sync::atomic::{AtomicBool, Ordering};

/// A destination application a service ticket was issued for.
///
/// Only [`Service::WebApplication`] can be reached by a logout message; every
/// other kind of service is skipped during single logout.
#[derive(Debug)]
pub enum Service {
    WebApplication(WebApplicationService),
    Other { id: String },
}

impl Service {
    pub fn web_application(id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self::WebApplication(WebApplicationService::new(id, original_url))
    }

    pub fn other(id: impl Into<String>) -> Self {
        Self::Other { id: id.into() }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::WebApplication(web_app) => web_app.id(),
            Self::Other { id } => id,
        }
    }

    /// Returns the web application when this service can receive logout messages.
    pub fn as_web_application(&self) -> Option<&WebApplicationService> {
        match self {
            Self::WebApplication(web_app) => Some(web_app),
            Self::Other { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct WebApplicationService {
    id: String,
    original_url: String,
    logged_out_already: AtomicBool,
}

impl WebApplicationService {
    pub fn new(id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original_url: original_url.into(),
            logged_out_already: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The callback URL back-channel logout messages are posted to.
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn is_logged_out_already(&self) -> bool {
        self.logged_out_already.load(Ordering::Acquire)
    }

    /// Flags the service as notified.
    ///
    /// Returns `true` only for the call that flipped the flag. The flag is
    /// never reset, so at most one caller per service instance ever sees `true`.
    pub fn mark_logged_out(&self) -> bool {
        !self.logged_out_already.swap(true, Ordering::AcqRel)
    }
}
