//! Integration tests for the order lifecycle service.
//!
//! The reputation service is simulated with a mock transport; flags are
//! stored in an in-memory `SQLite` database.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use url::Url;

use uvb_client::classify::reasons;
use uvb_client::{Credentials, FlagLevel, ReputationClient, ResponseSchema, Transport};
use uvb_core::{
    Error, EventResult, FlagRepository, Order, OrderEvent, OrderFlag, OrderService, Settings,
    ShippingAddress,
};

/// Mock transport replying with a fixed body, or failing when `None`.
#[derive(Clone)]
struct MockTransport {
    reply: Option<String>,
    sent: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockTransport {
    fn replying(body: &str) -> Self {
        Self {
            reply: Some(body.to_string()),
            sent: Arc::default(),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: None,
            sent: Arc::default(),
        }
    }

    fn sent(&self) -> Vec<(String, Value)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn post_json(
        &self,
        url: Url,
        _authorization: String,
        body: Vec<u8>,
    ) -> uvb_client::Result<Vec<u8>> {
        self.sent
            .lock()
            .unwrap()
            .push((url.path().to_string(), serde_json::from_slice(&body).unwrap()));
        self.reply
            .as_ref()
            .map(|body| body.as_bytes().to_vec())
            .ok_or(uvb_client::Error::Status(503))
    }
}

fn settings(schema: ResponseSchema) -> Settings {
    Settings {
        public_key: "pub".into(),
        private_key: "priv".into(),
        response_schema: schema,
        ..Settings::default()
    }
}

async fn service(transport: &MockTransport, settings: &Settings) -> OrderService<MockTransport> {
    let client = ReputationClient::with_transport(
        Credentials::new("pub", "priv"),
        settings.client_config(),
        transport.clone(),
    );
    let flags = FlagRepository::in_memory().await.unwrap();
    OrderService::with_client(client, settings, flags)
}

fn order() -> Order {
    Order::new("1042", "buyer@example.com").with_shipping(ShippingAddress {
        country: "HU".into(),
        postcode: "1111".into(),
        phone: String::new(),
        address_1: "Fő utca 1.".into(),
        address_2: String::new(),
    })
}

#[tokio::test]
async fn test_created_order_stores_reason() {
    let transport = MockTransport::replying(
        r#"{"result": {"reputation": -0.2, "reason": "Temporary e-mail was used.", "blocked": true}}"#,
    );
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    let result = service.handle(OrderEvent::Created, &order()).await.unwrap();
    assert_eq!(result, EventResult::Flagged(Some(FlagLevel::Error)));

    let flag = service.flags().get("1042").await.unwrap().unwrap();
    assert_eq!(flag.value, reasons::TEMP_EMAIL);

    let display = service.flag_display("1042").await.unwrap().unwrap();
    assert_eq!(display.level, FlagLevel::Error);
    assert_eq!(display.label, reasons::TEMP_EMAIL);

    let sent = transport.sent();
    assert_eq!(sent[0].0, "/api/v2/request");
    assert_eq!(
        sent[0].1,
        json!({ "email": "buyer@example.com", "threshold": 0.5 })
    );
}

#[tokio::test]
async fn test_created_order_rate_scheme() {
    let cases = [
        (0.44, Some(FlagLevel::Error), Some("Figyelem!")),
        (0.49, Some(FlagLevel::Warning), Some("Bizonytalan eredmény.")),
        (0.51, None, None),
    ];

    for (rate, level, label) in cases {
        let body = format!(r#"{{"message": {{"totalRate": {rate}}}}}"#);
        let transport = MockTransport::replying(&body);
        let service = service(&transport, &settings(ResponseSchema::Rate)).await;

        let flagged = service.flag_order(&order()).await.unwrap();
        assert_eq!(flagged, level);

        let display = service.flag_display("1042").await.unwrap();
        assert_eq!(display.map(|d| d.label), label.map(str::to_string));
    }
}

#[tokio::test]
async fn test_outage_leaves_order_unflagged() {
    let transport = MockTransport::unreachable();
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    let result = service.handle(OrderEvent::Created, &order()).await.unwrap();
    assert_eq!(result, EventResult::Flagged(None));
    assert!(service.flag_display("1042").await.unwrap().is_none());
    assert_eq!(service.flags().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_flagging_disabled_makes_no_request() {
    let transport = MockTransport::replying("{}");
    let settings = Settings {
        flag_orders: false,
        ..settings(ResponseSchema::Reason)
    };
    let service = service(&transport, &settings).await;

    assert_eq!(service.flag_order(&order()).await.unwrap(), None);
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_completed_order_reports_delivery() {
    let transport = MockTransport::replying(r#"{"status": "ok"}"#);
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    let result = service.handle(OrderEvent::Completed, &order()).await.unwrap();
    assert_eq!(result, EventResult::Reported(Some(json!({ "status": "ok" }))));

    let sent = transport.sent();
    assert_eq!(sent[0].0, "/api/v2/signal");
    assert_eq!(
        sent[0].1,
        json!({
            "email": "buyer@example.com",
            "outcome": 1,
            "orderId": "1042",
            "countryCode": "HU",
            "postalCode": "1111",
            "addressLine": "Fő utca 1."
        })
    );
}

#[tokio::test]
async fn test_not_received_order_reports_refusal() {
    let transport = MockTransport::replying("{}");
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    service
        .handle(OrderEvent::NotReceived, &order())
        .await
        .unwrap();

    assert_eq!(transport.sent()[0].1["outcome"], json!(-1));
}

#[tokio::test]
async fn test_signal_outage_is_not_an_error() {
    let transport = MockTransport::unreachable();
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    let result = service.handle(OrderEvent::Completed, &order()).await.unwrap();
    assert_eq!(result, EventResult::Reported(None));
}

#[tokio::test]
async fn test_missing_email_is_loud() {
    let transport = MockTransport::replying("{}");
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    let err = service
        .handle(OrderEvent::Created, &Order::new("1", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Client(_)));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_checkout_screening() {
    let below = MockTransport::replying(
        r#"{"result": {"reputation": 0.1, "reason": "Signals found, checks passed.", "blocked": false}}"#,
    );
    let service_below = service(&below, &settings(ResponseSchema::Reason)).await;
    assert!(service_below.is_email_flagged("buyer@example.com").await.unwrap());

    let above = MockTransport::replying(
        r#"{"result": {"reputation": 0.9, "reason": "Signals found, checks passed.", "blocked": false}}"#,
    );
    let service_above = service(&above, &settings(ResponseSchema::Reason)).await;
    assert!(!service_above.is_email_flagged("buyer@example.com").await.unwrap());

    let down = MockTransport::unreachable();
    let service_down = service(&down, &settings(ResponseSchema::Reason)).await;
    assert!(!service_down.is_email_flagged("buyer@example.com").await.unwrap());
}

#[tokio::test]
async fn test_existing_flag_display() {
    let transport = MockTransport::replying("{}");
    let service = service(&transport, &settings(ResponseSchema::Reason)).await;

    service
        .flags()
        .set(&OrderFlag::new("9", reasons::NOT_FOUND))
        .await
        .unwrap();

    let display = service.flag_display("9").await.unwrap().unwrap();
    assert_eq!(display.level, FlagLevel::Notice);
}

#[tokio::test]
async fn test_service_from_settings() {
    let flags = FlagRepository::in_memory().await.unwrap();
    assert!(OrderService::new(&settings(ResponseSchema::Reason), flags).is_ok());

    let flags = FlagRepository::in_memory().await.unwrap();
    let invalid = Settings {
        reputation_threshold: 2.0,
        ..settings(ResponseSchema::Reason)
    };
    assert!(matches!(
        OrderService::new(&invalid, flags),
        Err(Error::Config(_))
    ));
}

#[tokio::test]
async fn test_service_debug_hides_private_key() {
    let settings = Settings {
        private_key: "very-secret".into(),
        ..settings(ResponseSchema::Reason)
    };
    let flags = FlagRepository::in_memory().await.unwrap();
    let service = OrderService::new(&settings, flags).unwrap();

    let debug = format!("{service:?}");
    assert!(debug.contains("OrderService"));
    assert!(!debug.contains("very-secret"));
}
