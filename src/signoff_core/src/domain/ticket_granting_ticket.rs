use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use thiserror::Error;

use crate::domain::service::Service;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One service ticket issued under a ticket granting ticket.
#[derive(Debug, Clone)]
pub struct ServiceSessionBinding {
    ticket_id: String,
    service: Arc<Service>,
}

impl ServiceSessionBinding {
    pub fn new(ticket_id: impl Into<String>, service: Arc<Service>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            service,
        }
    }

    /// The service ticket id, sent to the service as the SAML `SessionIndex`.
    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn service(&self) -> &Arc<Service> {
        &self.service
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TicketError {
    #[error("Ticket granting ticket {0} is expired")]
    Expired(TicketId),
}

/// The user's primary single sign-on session.
///
/// The bound services live behind a lock owned by the ticket itself, so
/// concurrent logouts of the same ticket serialize on that ticket only.
#[derive(Debug)]
pub struct TicketGrantingTicket {
    id: TicketId,
    state: Mutex<GrantState>,
}

#[derive(Debug, Default)]
struct GrantState {
    services: Vec<ServiceSessionBinding>,
    expired: bool,
}

impl TicketGrantingTicket {
    pub fn new(id: TicketId) -> Self {
        Self {
            id,
            state: Mutex::new(GrantState::default()),
        }
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    /// Records a service ticket issued for `service` under this ticket.
    pub fn grant_service_ticket(
        &self,
        service_ticket_id: impl Into<String>,
        service: Arc<Service>,
    ) -> Result<ServiceSessionBinding, TicketError> {
        let mut state = self.lock();
        if state.expired {
            return Err(TicketError::Expired(self.id.clone()));
        }

        let binding = ServiceSessionBinding::new(service_ticket_id, service);
        state.services.push(binding.clone());
        Ok(binding)
    }

    pub fn services(&self) -> Vec<ServiceSessionBinding> {
        self.lock().services.clone()
    }

    pub fn is_expired(&self) -> bool {
        self.lock().expired
    }

    /// Takes every bound service and expires the ticket in one critical section.
    ///
    /// Nobody can observe a partially drained ticket, and once this returns no
    /// further service ticket can be granted.
    pub fn drain_services_and_expire(&self) -> Vec<ServiceSessionBinding> {
        let mut state = self.lock();
        state.expired = true;
        std::mem::take(&mut state.services)
    }

    fn lock(&self) -> MutexGuard<'_, GrantState> {
        // Every critical section leaves the state consistent, so a poisoned
        // lock is still safe to use.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
