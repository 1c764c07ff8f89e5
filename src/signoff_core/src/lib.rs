pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    logout_message::{FrontChannelPayload, LogoutMessage},
    logout_policy::LogoutPolicy,
    service::{Service, WebApplicationService},
    ticket_granting_ticket::{ServiceSessionBinding, TicketError, TicketGrantingTicket, TicketId},
};

pub use ports::{
    repositories::{ServiceRegistry, ServiceRegistryError, TicketRegistry, TicketRegistryError},
    services::{IssueInstantFormatter, LogoutTransport, LogoutTransportError, UniqueIdGenerator},
};
