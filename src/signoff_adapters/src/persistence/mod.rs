pub mod hashmap_service_registry;
pub mod hashmap_ticket_registry;

pub use hashmap_service_registry::HashMapServiceRegistry;
pub use hashmap_ticket_registry::HashMapTicketRegistry;
