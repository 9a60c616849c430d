use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chatbot backend for testing the HTTP client
pub struct ChatMockServer {
    server: MockServer,
}

impl ChatMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a healthy `/health` endpoint
    pub async fn mock_health_ok(&self) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "data_loaded": {"subjects": 120, "professors": 48}
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock `/health` answering with the given status
    pub async fn mock_health_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful `/api/chat` reply for a specific message
    pub async fn mock_chat_reply(&self, message: &str, reply: Value) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({ "message": message })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply))
            .mount(&self.server)
            .await;
    }

    /// Mock `/api/chat` failing with a status and optional JSON body
    pub async fn mock_chat_status(&self, status: u16, body: Option<Value>) {
        let mut template = ResponseTemplate::new(status);
        if let Some(body) = body {
            template = template.set_body_json(body);
        }
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Mock `/api/chat` returning a non-JSON success body
    pub async fn mock_chat_raw(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock `/api/chat` that answers only after `delay`
    pub async fn mock_chat_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "too late"}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every `/api/chat` request received so far
    pub async fn chat_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/api/chat")
            .filter_map(|request| request.body_json::<Value>().ok())
            .collect()
    }
}

/// A local URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
