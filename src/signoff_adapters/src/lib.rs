pub mod config;
pub mod generators;
pub mod http;
pub mod persistence;

pub use generators::{DefaultUniqueIdGenerator, UtcIssueInstantFormatter};
pub use http::ReqwestLogoutTransport;
pub use persistence::{HashMapServiceRegistry, HashMapTicketRegistry};
