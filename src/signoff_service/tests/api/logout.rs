use std::sync::Arc;

use signoff_adapters::http::routes::{ErrorResponse, LogoutResponse};
use signoff_application::decode_front_channel;
use signoff_core::{FrontChannelPayload, LogoutPolicy};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

use crate::helpers::{TestApp, web_app};

#[tokio::test]
async fn should_return_200_with_front_channel_logouts() {
    let app = TestApp::new().await;
    let back_channel_service = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(body_string_contains(
            "%3Csamlp%3ASessionIndex%3EST-1%3C%2Fsamlp%3ASessionIndex%3E",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&back_channel_service)
        .await;

    app.service_registry
        .register("s1", LogoutPolicy::BackChannel)
        .await;
    app.service_registry
        .register("s2", LogoutPolicy::FrontChannel)
        .await;

    let ticket = app.register_ticket("TGT-1").await;
    let s1 = web_app("s1", format!("{}/logout", back_channel_service.uri()));
    ticket.grant_service_ticket("ST-1", Arc::clone(&s1)).unwrap();
    ticket
        .grant_service_ticket("ST-2", web_app("s2", "https://s2.example.com/slo"))
        .unwrap();

    let response = app
        .post_logout(&serde_json::json!({ "ticket_granting_ticket": "TGT-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response
        .json::<LogoutResponse>()
        .await
        .expect("Could not deserialize response body to LogoutResponse");

    assert_eq!(body.front_channel.len(), 1);
    let redirect = &body.front_channel[0];
    assert_eq!(redirect.service, "s2");
    assert_eq!(redirect.session_index, "ST-2");
    assert!(
        redirect
            .redirect_url
            .as_deref()
            .is_some_and(|url| url.starts_with("https://s2.example.com/slo?SAMLRequest="))
    );

    let xml =
        decode_front_channel(&FrontChannelPayload::new(redirect.logout_request.clone())).unwrap();
    assert!(xml.contains("<samlp:SessionIndex>ST-2</samlp:SessionIndex>"));

    assert!(ticket.is_expired());
    assert!(ticket.services().is_empty());
    assert!(s1.as_web_application().unwrap().is_logged_out_already());
}

#[tokio::test]
async fn should_return_200_when_back_channel_service_is_down() {
    let app = TestApp::new().await;
    let failing_service = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&failing_service)
        .await;

    let ticket = app.register_ticket("TGT-1").await;
    ticket
        .grant_service_ticket("ST-1", web_app("s1", failing_service.uri()))
        .unwrap();
    ticket
        .grant_service_ticket("ST-2", web_app("s2", "http://127.0.0.1:1/logout"))
        .unwrap();

    let response = app
        .post_logout(&serde_json::json!({ "ticket_granting_ticket": "TGT-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.json::<LogoutResponse>().await.unwrap();
    assert!(body.front_channel.is_empty());
    assert!(ticket.is_expired());
}

#[tokio::test]
async fn should_not_notify_services_when_single_logout_is_disabled() {
    let app = TestApp::with_single_logout_disabled(true).await;
    let service = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&service)
        .await;
    app.service_registry
        .register("s2", LogoutPolicy::FrontChannel)
        .await;

    let ticket = app.register_ticket("TGT-1").await;
    ticket
        .grant_service_ticket("ST-1", web_app("s1", service.uri()))
        .unwrap();
    ticket
        .grant_service_ticket("ST-2", web_app("s2", "https://s2.example.com/slo"))
        .unwrap();

    let response = app
        .post_logout(&serde_json::json!({ "ticket_granting_ticket": "TGT-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.json::<LogoutResponse>().await.unwrap();
    assert!(body.front_channel.is_empty());
    assert!(ticket.is_expired());
    assert!(ticket.services().is_empty());
}

#[tokio::test]
async fn should_return_404_for_unknown_ticket() {
    let app = TestApp::new().await;

    let response = app
        .post_logout(&serde_json::json!({ "ticket_granting_ticket": "TGT-404" }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "Ticket granting ticket not found");
}

#[tokio::test]
async fn should_return_400_for_empty_ticket_id() {
    let app = TestApp::new().await;

    let response = app
        .post_logout(&serde_json::json!({ "ticket_granting_ticket": "  " }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_422_for_malformed_input() {
    let app = TestApp::new().await;

    let response = app
        .post_logout(&serde_json::json!({ "ticket": "TGT-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
