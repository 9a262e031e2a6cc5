//! In-process API tests driving the full router with `oneshot`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chama_server::api::build_app;
use chama_server::reminders::NotifyError;
use chama_server::{Config, Notifier, ServerState};
use chrono::{Days, NaiveDate};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::models::RenderedReminder;
use tower::ServiceExt;

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<RenderedReminder>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, reminder: &RenderedReminder) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(reminder.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

struct TestApp {
    router: Router,
    state: ServerState,
    notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    async fn new() -> Self {
        let config = Config::from_env();
        let notifier = Arc::new(RecordingNotifier::default());
        let state = ServerState::with_notifier(&config, notifier.clone()).await;
        let router = build_app(&state).with_state(state.clone());
        Self {
            router,
            state,
            notifier,
        }
    }

    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn raw_post(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn add_member(&self, name: &str, phone: &str, amount: u64, due: NaiveDate) -> u64 {
        let (status, body) = self
            .request(
                "POST",
                "/api/members",
                Some(json!({
                    "name": name,
                    "phoneNumber": phone,
                    "monthlyContribution": amount,
                    "dueDate": due.to_string(),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_u64().unwrap()
    }

    async fn member_count(&self) -> usize {
        let (_, body) = self.request("GET", "/api/members", None).await;
        body["data"].as_array().unwrap().len()
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let (status, body) = app.request("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["service"], "chama-server");
}

#[tokio::test]
async fn test_create_list_toggle_stats() {
    let app = TestApp::new().await;
    let today = app.state.today();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    let next_week = today.checked_add_days(Days::new(7)).unwrap();

    let grace = app
        .add_member("Grace Wanjiku", "+254722123456", 1000, next_week)
        .await;
    let john = app
        .add_member("John Kamau", "0733456789", 2000, yesterday)
        .await;

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/members/{grace}/payment"),
            Some(json!({ "paid": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["hasPaid"], true);
    assert_eq!(body["data"]["status"], "paid");
    assert!(body["data"]["lastPaymentDate"].is_string());

    let (_, body) = app.request("GET", &format!("/api/members/{john}"), None).await;
    assert_eq!(body["data"]["status"], "overdue");

    let (status, body) = app.request("GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["totalMembers"], 2);
    assert_eq!(stats["paidMembers"], 1);
    assert_eq!(stats["pendingMembers"], 1);
    assert_eq!(stats["collectionRate"], 50);
    assert_eq!(stats["totalExpected"], 3000);
    assert_eq!(stats["totalCollected"], 1000);
    assert_eq!(stats["breakdown"]["overdue"], 1);
    assert_eq!(stats["breakdown"]["pending"], 0);

    let (_, body) = app.request("GET", "/api/members/unpaid", None).await;
    assert_eq!(body["data"], json!([john]));

    let (_, body) = app.request("GET", "/api/members?status=paid", None).await;
    let paid = body["data"].as_array().unwrap();
    assert_eq!(paid.len(), 1);
    assert_eq!(paid[0]["id"], grace);
}

#[tokio::test]
async fn test_empty_stats() {
    let app = TestApp::new().await;
    let (_, body) = app.request("GET", "/api/stats", None).await;
    assert_eq!(body["data"]["totalMembers"], 0);
    assert_eq!(body["data"]["collectionRate"], 0);
}

#[tokio::test]
async fn test_invalid_create_leaves_list_empty() {
    let app = TestApp::new().await;
    let due = app.state.today().to_string();

    let cases = [
        (
            json!({ "name": "Peter", "phoneNumber": "0812345678", "monthlyContribution": 1000, "dueDate": due }),
            1002,
        ),
        (
            json!({ "name": "Peter", "phoneNumber": "0712345678", "monthlyContribution": 75, "dueDate": due }),
            1003,
        ),
        (
            json!({ "name": "Peter", "phoneNumber": "0712345678", "monthlyContribution": 1025, "dueDate": due }),
            1003,
        ),
        (
            json!({ "name": "Peter", "phoneNumber": "0712345678", "monthlyContribution": 18_446_744_073_709_551_600u64, "dueDate": due }),
            1003,
        ),
        (
            json!({ "name": "   ", "phoneNumber": "0712345678", "monthlyContribution": 1000, "dueDate": due }),
            1004,
        ),
        (
            json!({ "name": "Peter", "phoneNumber": "0712345678", "monthlyContribution": 1000 }),
            7,
        ),
    ];

    for (payload, code) in cases {
        let (status, body) = app.request("POST", "/api/members", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body["code"], code, "{body}");
    }

    // Negative amount and malformed date fail deserialization
    let (status, _) = app
        .request(
            "POST",
            "/api/members",
            Some(json!({ "name": "Peter", "phoneNumber": "0712345678", "monthlyContribution": -5, "dueDate": due })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(
            "POST",
            "/api/members",
            Some(json!({ "name": "Peter", "phoneNumber": "0712345678", "monthlyContribution": 1000, "dueDate": "31/02/2026" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.raw_post("/api/members", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    assert_eq!(app.member_count().await, 0);
}

#[tokio::test]
async fn test_missing_field_is_named() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(
            "POST",
            "/api/members",
            Some(json!({ "name": "Peter", "monthlyContribution": 1000, "dueDate": "2026-11-01" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert!(body["message"].as_str().unwrap().contains("phoneNumber"));
}

#[tokio::test]
async fn test_unknown_member_is_404() {
    let app = TestApp::new().await;

    let (status, body) = app.request("GET", "/api/members/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);

    let (status, _) = app
        .request("PATCH", "/api/members/99/payment", Some(json!({ "paid": true })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request("GET", "/api/members/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_status_filter() {
    let app = TestApp::new().await;
    let (status, body) = app.request("GET", "/api/members?status=late", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_templates() {
    let app = TestApp::new().await;

    let (status, body) = app.request("GET", "/api/reminders/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"][0]["language"], "en");

    let (_, body) = app
        .request("GET", "/api/reminders/templates?language=sw", None)
        .await;
    assert_eq!(body["data"][0]["name"], "Ukumbusho wa Hisani");

    let (status, body) = app
        .request("GET", "/api/reminders/templates/urgent", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "urgent");

    let (status, body) = app
        .request("GET", "/api/reminders/templates/shouty", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2003);
}

#[tokio::test]
async fn test_preview_does_not_dispatch() {
    let app = TestApp::new().await;
    let due = NaiveDate::from_ymd_opt(2026, 10, 28).unwrap();
    let id = app.add_member("Mary Akinyi", "0711987654", 1500, due).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/reminders/preview",
            Some(json!({ "memberIds": [id], "template": "gentle" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["queued"], 0);
    let message = body["data"]["reminders"][0]["message"].as_str().unwrap();
    assert!(message.contains("Mary Akinyi"));
    assert!(message.contains("KES 1,500"));
    assert!(message.contains("28 Oct 2026"));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(app.notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_reaches_notifier() {
    let app = TestApp::new().await;
    let due = app.state.today();
    let a = app.add_member("Grace", "0722123456", 1000, due).await;
    let b = app.add_member("John", "0733456789", 2000, due).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/reminders",
            Some(json!({ "memberIds": [a, b, 77], "message": "Hi {name}, KES {amount} please" })),
        )
        .await;
    assert_eq!(status, StatusCode::ACCEPTED, "{body}");
    assert_eq!(body["data"]["queued"], 2);
    assert_eq!(body["data"]["skipped"], json!([77]));

    let delivered = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if app.notifier.sent.lock().unwrap().len() == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(delivered.is_ok(), "reminders were not delivered");

    let sent = app.notifier.sent.lock().unwrap();
    assert_eq!(sent[0].message, "Hi Grace, KES 1,000 please");
    assert_eq!(sent[1].message, "Hi John, KES 2,000 please");
}

#[tokio::test]
async fn test_send_errors() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/reminders",
            Some(json!({ "memberIds": [], "template": "gentle" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2002);

    let (status, body) = app
        .request(
            "POST",
            "/api/reminders",
            Some(json!({ "memberIds": [1], "message": "   " })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2001);

    let (status, body) = app
        .request(
            "POST",
            "/api/reminders",
            Some(json!({ "memberIds": [5], "template": "gentle" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
