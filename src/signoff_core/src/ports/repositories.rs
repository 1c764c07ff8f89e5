use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    logout_policy::LogoutPolicy,
    service::Service,
    ticket_granting_ticket::{ServiceSessionBinding, TicketGrantingTicket, TicketId},
};

// TicketRegistry port trait and errors
#[derive(Debug, Error)]
pub enum TicketRegistryError {
    #[error("Ticket already exists")]
    TicketAlreadyExists,
    #[error("Ticket not found")]
    TicketNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for TicketRegistryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::TicketAlreadyExists, Self::TicketAlreadyExists)
                | (Self::TicketNotFound, Self::TicketNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait TicketRegistry: Send + Sync {
    async fn add_ticket(&self, ticket: Arc<TicketGrantingTicket>) -> Result<(), TicketRegistryError>;
    async fn get_ticket(
        &self,
        id: &TicketId,
    ) -> Result<Arc<TicketGrantingTicket>, TicketRegistryError>;
    /// Atomically removes every bound service from `ticket` and expires it.
    async fn drain_services(
        &self,
        ticket: &TicketGrantingTicket,
    ) -> Result<Vec<ServiceSessionBinding>, TicketRegistryError>;
}

// ServiceRegistry port trait and errors
#[derive(Debug, Error)]
pub enum ServiceRegistryError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait ServiceRegistry: Send + Sync {
    /// `Ok(None)` when the service is not registered.
    async fn find_logout_policy(
        &self,
        service: &Service,
    ) -> Result<Option<LogoutPolicy>, ServiceRegistryError>;
}
