pub mod reqwest_logout_transport;
pub mod routes;

pub use reqwest_logout_transport::ReqwestLogoutTransport;
