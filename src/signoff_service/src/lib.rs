mod slo_service;
mod tracing;

pub use slo_service::{SloService, build_logout_manager};
pub use crate::tracing::init_tracing;

// Re-export commonly used types
pub use signoff_core::{LogoutTransport, ServiceRegistry, TicketRegistry};
