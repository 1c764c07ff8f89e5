//! Hand-written port doubles shared by the unit tests.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use signoff_core::{
    IssueInstantFormatter, LogoutPolicy, LogoutTransport, LogoutTransportError, Service,
    ServiceRegistry, ServiceRegistryError, ServiceSessionBinding, TicketGrantingTicket,
    TicketRegistry, TicketRegistryError, TicketId, UniqueIdGenerator,
};
use tokio::sync::RwLock;

use crate::logout_message_builder::LogoutMessageBuilder;

pub const ISSUE_INSTANT: &str = "2026-10-19T12:15:23.123Z";

#[derive(Default)]
pub struct SequentialIdGenerator(AtomicU64);

impl UniqueIdGenerator for SequentialIdGenerator {
    fn new_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub struct FixedInstant;

impl IssueInstantFormatter for FixedInstant {
    fn issue_instant(&self) -> String {
        ISSUE_INSTANT.to_string()
    }
}

pub fn message_builder() -> LogoutMessageBuilder<SequentialIdGenerator, FixedInstant> {
    LogoutMessageBuilder::new(SequentialIdGenerator::default(), FixedInstant)
}

#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Delivered,
    Rejected,
    Error,
    Panic,
}

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub url: String,
    pub message: String,
    pub wait_for_response: bool,
}

#[derive(Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<RwLock<Vec<SentMessage>>>,
    outcomes: HashMap<String, Outcome>,
    delays: HashMap<String, Duration>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, url: &str, outcome: Outcome) -> Self {
        self.outcomes.insert(url.to_string(), outcome);
        self
    }

    /// Sleeps before answering for `url`. The call is only recorded once the
    /// delay has elapsed.
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub async fn calls(&self) -> Vec<SentMessage> {
        self.calls.read().await.clone()
    }

    pub async fn calls_to(&self, url: &str) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|call| call.url == url)
            .count()
    }
}

#[async_trait::async_trait]
impl LogoutTransport for RecordingTransport {
    async fn send_message(
        &self,
        url: &str,
        message: &str,
        wait_for_response: bool,
    ) -> Result<bool, LogoutTransportError> {
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        let outcome = self.outcomes.get(url).copied().unwrap_or(Outcome::Delivered);
        if let Outcome::Panic = outcome {
            panic!("transport crashed while sending to {url}");
        }

        self.calls.write().await.push(SentMessage {
            url: url.to_string(),
            message: message.to_string(),
            wait_for_response,
        });

        match outcome {
            Outcome::Delivered => Ok(true),
            Outcome::Rejected => Ok(false),
            Outcome::Error => Err(LogoutTransportError::RequestFailed(
                "connection refused".to_string(),
            )),
            Outcome::Panic => unreachable!(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockServiceRegistry {
    policies: HashMap<String, LogoutPolicy>,
    failing: Vec<String>,
}

impl MockServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, service_id: &str, policy: LogoutPolicy) -> Self {
        self.policies.insert(service_id.to_string(), policy);
        self
    }

    pub fn failing_for(mut self, service_id: &str) -> Self {
        self.failing.push(service_id.to_string());
        self
    }
}

#[async_trait::async_trait]
impl ServiceRegistry for MockServiceRegistry {
    async fn find_logout_policy(
        &self,
        service: &Service,
    ) -> Result<Option<LogoutPolicy>, ServiceRegistryError> {
        if self.failing.iter().any(|id| id == service.id()) {
            return Err(ServiceRegistryError::UnexpectedError(
                "registry offline".to_string(),
            ));
        }
        Ok(self.policies.get(service.id()).copied())
    }
}

#[derive(Clone, Default)]
pub struct MockTicketRegistry {
    tickets: Arc<RwLock<HashMap<TicketId, Arc<TicketGrantingTicket>>>>,
}

impl MockTicketRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TicketRegistry for MockTicketRegistry {
    async fn add_ticket(&self, ticket: Arc<TicketGrantingTicket>) -> Result<(), TicketRegistryError> {
        self.tickets
            .write()
            .await
            .insert(ticket.id().clone(), ticket);
        Ok(())
    }

    async fn get_ticket(
        &self,
        id: &TicketId,
    ) -> Result<Arc<TicketGrantingTicket>, TicketRegistryError> {
        self.tickets
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(TicketRegistryError::TicketNotFound)
    }

    async fn drain_services(
        &self,
        ticket: &TicketGrantingTicket,
    ) -> Result<Vec<ServiceSessionBinding>, TicketRegistryError> {
        if !self.tickets.read().await.contains_key(ticket.id()) {
            return Err(TicketRegistryError::TicketNotFound);
        }
        Ok(ticket.drain_services_and_expire())
    }
}
