//! # Signoff - Single Logout Engine
//!
//! This is a facade crate that re-exports all public APIs from the single logout components.
//! Use this crate to get access to all single logout functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! signoff = { path = "../signoff" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `TicketGrantingTicket`, `Service`, `LogoutMessage`, etc.
//! - **Port traits**: `TicketRegistry`, `ServiceRegistry`, `LogoutTransport`, etc.
//! - **Use cases**: `LogoutManager`, backed by `LogoutDispatcher` and `LogoutMessageBuilder`
//! - **Adapters**: `HashMapTicketRegistry`, `ReqwestLogoutTransport`, etc.
//! - **Service**: `SloService` - HTTP entry point for single logout

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use signoff_core::*;
}

// Re-export most commonly used core types at the root level
pub use signoff_core::{
    FrontChannelPayload, LogoutMessage, LogoutPolicy, Service, ServiceSessionBinding,
    TicketError, TicketGrantingTicket, TicketId, WebApplicationService,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Registry and capability trait definitions
pub mod ports {
    pub use signoff_core::{
        IssueInstantFormatter, LogoutTransport, LogoutTransportError, ServiceRegistry,
        ServiceRegistryError, TicketRegistry, TicketRegistryError, UniqueIdGenerator,
    };
}

// Re-export port traits at root level
pub use ports::{
    IssueInstantFormatter, LogoutTransport, LogoutTransportError, ServiceRegistry,
    ServiceRegistryError, TicketRegistry, TicketRegistryError, UniqueIdGenerator,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use signoff_application::*;
}

// Re-export use cases at root level
pub use signoff_application::{
    FrontChannelLogout, FrontChannelLogouts, LogoutDispatcher, LogoutError, LogoutManager,
    LogoutManagerConfig, LogoutMessageBuilder, decode_front_channel,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP transport and routes
    pub mod http {
        pub use signoff_adapters::http::*;
    }

    /// In-memory registries
    pub mod persistence {
        pub use signoff_adapters::persistence::*;
    }

    /// Id and timestamp generators
    pub mod generators {
        pub use signoff_adapters::generators::*;
    }

    /// Configuration
    pub mod config {
        pub use signoff_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use signoff_adapters::{
    DefaultUniqueIdGenerator, HashMapServiceRegistry, HashMapTicketRegistry,
    ReqwestLogoutTransport, UtcIssueInstantFormatter,
};

// ============================================================================
// Single Logout Service (Main Entry Point)
// ============================================================================

/// Main single logout service
pub use signoff_service::{SloService, build_logout_manager, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;
