use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use signoff_core::{
    ServiceSessionBinding, TicketGrantingTicket, TicketId, TicketRegistry, TicketRegistryError,
};

#[derive(Default, Clone)]
pub struct HashMapTicketRegistry {
    tickets: Arc<RwLock<HashMap<TicketId, Arc<TicketGrantingTicket>>>>,
}

impl HashMapTicketRegistry {
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn remove_ticket(
        &self,
        id: &TicketId,
    ) -> Result<Arc<TicketGrantingTicket>, TicketRegistryError> {
        self.tickets
            .write()
            .await
            .remove(id)
            .ok_or(TicketRegistryError::TicketNotFound)
    }

    /// Drops every expired ticket and returns how many were removed.
    pub async fn remove_expired(&self) -> usize {
        let mut tickets = self.tickets.write().await;
        let before = tickets.len();
        tickets.retain(|_, ticket| !ticket.is_expired());
        before - tickets.len()
    }
}

#[async_trait::async_trait]
impl TicketRegistry for HashMapTicketRegistry {
    async fn add_ticket(&self, ticket: Arc<TicketGrantingTicket>) -> Result<(), TicketRegistryError> {
        let mut tickets = self.tickets.write().await;
        if tickets.contains_key(ticket.id()) {
            return Err(TicketRegistryError::TicketAlreadyExists);
        }
        tickets.insert(ticket.id().clone(), ticket);
        Ok(())
    }

    async fn get_ticket(
        &self,
        id: &TicketId,
    ) -> Result<Arc<TicketGrantingTicket>, TicketRegistryError> {
        let tickets = self.tickets.read().await;
        tickets
            .get(id)
            .cloned()
            .ok_or(TicketRegistryError::TicketNotFound)
    }

    async fn drain_services(
        &self,
        ticket: &TicketGrantingTicket,
    ) -> Result<Vec<ServiceSessionBinding>, TicketRegistryError> {
        // Only the read lock on the map: the drain itself is guarded by the
        // ticket's own lock, so unrelated tickets never wait on each other.
        let tickets = self.tickets.read().await;
        let owned = tickets
            .get(ticket.id())
            .ok_or(TicketRegistryError::TicketNotFound)?;

        if !std::ptr::eq(Arc::as_ptr(owned), ticket) {
            return Err(TicketRegistryError::UnexpectedError(format!(
                "ticket {} is not the registered instance",
                ticket.id()
            )));
        }

        Ok(ticket.drain_services_and_expire())
    }
}
