use std::sync::Arc;

use serde::Serialize;
use signoff_adapters::{
    HashMapServiceRegistry, HashMapTicketRegistry,
    config::{SloSettings, test},
};
use signoff_core::{Service, TicketGrantingTicket, TicketId, TicketRegistry};
use signoff_service::{SloService, build_logout_manager};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub ticket_registry: HashMapTicketRegistry,
    pub service_registry: HashMapServiceRegistry,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_single_logout_disabled(false).await
    }

    pub async fn with_single_logout_disabled(disabled: bool) -> Self {
        let settings: SloSettings = SloSettings::builder("test")
            .unwrap()
            .set_override("single_logout.disabled", disabled)
            .unwrap()
            .set_override(
                "http_client.timeout_in_millis",
                test::http_client::TIMEOUT.as_millis() as u64,
            )
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let ticket_registry = HashMapTicketRegistry::new();
        let service_registry = HashMapServiceRegistry::new();
        let manager = build_logout_manager(
            ticket_registry.clone(),
            service_registry.clone(),
            &settings,
        )
        .unwrap();

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(SloService::new(manager).run_standalone(listener));

        Self {
            address,
            http_client: reqwest::Client::new(),
            ticket_registry,
            service_registry,
        }
    }

    pub async fn register_ticket(&self, id: &str) -> Arc<TicketGrantingTicket> {
        let ticket = Arc::new(TicketGrantingTicket::new(TicketId::new(id)));
        self.ticket_registry
            .add_ticket(Arc::clone(&ticket))
            .await
            .unwrap();
        ticket
    }

    pub async fn post_logout<B: Serialize>(&self, body: &B) -> reqwest::Response {
        self.http_client
            .post(format!("{}/logout", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn web_app(id: &str, url: impl Into<String>) -> Arc<Service> {
    Arc::new(Service::web_application(id, url))
}
