pub mod logout_message;
pub mod logout_policy;
pub mod service;
pub mod ticket_granting_ticket;
