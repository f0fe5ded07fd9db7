use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;

use crate::models::LoginPayload;

/// Public echo service; it returns the request it was sent and
/// authenticates nothing.
pub const LOGIN_ENDPOINT: &str = "https://httpbin.org/post";

// Response-only CORS headers and a forbidden request header. Browsers drop
// or ignore them on an outgoing request.
const INERT_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Origin, X-Requested-With, Content-Type, Accept",
    ),
    ("Origin", "http://localhost:3000/"),
];

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("login request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("login response was not JSON: {0}")]
    Parse(#[source] reqwest::Error),
}

pub struct LoginClient {
    http_client: Client,
    endpoint: String,
}

impl Default for LoginClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginClient {
    pub fn new() -> Self {
        Self::with_endpoint(LOGIN_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the payload and parses the response body as JSON.
    ///
    /// The status code is not inspected; only transport failures and a
    /// body that is not JSON are errors.
    pub async fn send(&self, payload: &LoginPayload) -> Result<Value, SubmitError> {
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in INERT_HEADERS {
            request = request.header(name, value);
        }
        let response = request
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Network)?;
        response.json::<Value>().await.map_err(SubmitError::Parse)
    }

    /// Fire-and-forget submission used by the login form. The parsed body
    /// is dropped and failures only reach the log.
    pub async fn submit(&self, payload: &LoginPayload) {
        match self.send(payload).await {
            Ok(_) => log::debug!("login response received from {}", self.endpoint),
            Err(err) => log::error!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginFields;
    use claims::{assert_matches, assert_ok};
    use log::{Level, LevelFilter};
    use serde_json::json;
    use std::cell::RefCell;
    use std::future::Future;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    struct ThreeKeyBodyMatcher;

    impl wiremock::Match for ThreeKeyBodyMatcher {
        fn matches(&self, request: &Request) -> bool {
            let result: Result<Value, _> = serde_json::from_slice(&request.body);
            match result {
                Ok(Value::Object(body)) => {
                    body.len() == 3
                        && body.contains_key("username")
                        && body.contains_key("email")
                        && body.contains_key("password")
                }
                _ => false,
            }
        }
    }

    thread_local! {
        static ERRORS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    // Keeps error records from this crate on the thread that emitted them,
    // so parallel tests on current-thread runtimes do not see each other.
    struct ErrorCapture;

    impl log::Log for ErrorCapture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() == Level::Error && metadata.target().starts_with("blog_front")
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                ERRORS.with(|errors| errors.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static ERROR_CAPTURE: ErrorCapture = ErrorCapture;

    async fn capture_errors(submission: impl Future<Output = ()>) -> Vec<String> {
        if log::set_logger(&ERROR_CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        ERRORS.with(|errors| errors.borrow_mut().clear());
        submission.await;
        ERRORS.with(|errors| errors.take())
    }

    fn payload() -> LoginPayload {
        LoginFields::unbound().payload()
    }

    // Bind an ephemeral port and release it so connections are refused.
    fn closed_port_uri() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/post")
    }

    #[test]
    fn default_client_targets_the_echo_endpoint() {
        assert_eq!(LoginClient::new().endpoint(), "https://httpbin.org/post");
    }

    #[tokio::test]
    async fn send_posts_json_with_three_keys() {
        let mock_server = MockServer::start().await;
        let client = LoginClient::with_endpoint(format!("{}/post", mock_server.uri()));

        Mock::given(method("POST"))
            .and(path("/post"))
            .and(header("Content-Type", "application/json"))
            .and(header("Access-Control-Allow-Origin", "*"))
            .and(ThreeKeyBodyMatcher)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "json": {} })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let _ = client.send(&payload()).await;
    }

    #[tokio::test]
    async fn untouched_form_sends_empty_strings() {
        let mock_server = MockServer::start().await;
        let client = LoginClient::with_endpoint(mock_server.uri());

        Mock::given(body_json(
            json!({ "username": "", "email": "", "password": "" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

        assert_ok!(client.send(&payload()).await);
    }

    #[tokio::test]
    async fn status_code_is_not_an_error() {
        let mock_server = MockServer::start().await;
        let client = LoginClient::with_endpoint(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client.send(&payload()).await.unwrap();
        assert_eq!(body, json!({ "error": "boom" }));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let mock_server = MockServer::start().await;
        let client = LoginClient::with_endpoint(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client.send(&payload()).await;
        assert_matches!(outcome, Err(SubmitError::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let client = LoginClient::with_endpoint(closed_port_uri());

        let outcome = client.send(&payload()).await;
        assert_matches!(outcome, Err(SubmitError::Network(_)));
    }

    #[tokio::test]
    async fn submit_logs_network_failure_once() {
        let records = capture_errors(
            LoginClient::with_endpoint(closed_port_uri()).submit(&payload()),
        )
        .await;

        assert_eq!(records.len(), 1);
        assert!(records[0].contains("login request failed"), "{records:?}");
    }

    #[tokio::test]
    async fn submit_logs_parse_failure_once() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LoginClient::with_endpoint(mock_server.uri());
        let records = capture_errors(client.submit(&payload())).await;

        assert_eq!(records.len(), 1);
        assert!(records[0].contains("was not JSON"), "{records:?}");
    }

    #[tokio::test]
    async fn submit_discards_successful_response() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "json": {} })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LoginClient::with_endpoint(mock_server.uri());
        let records = capture_errors(client.submit(&payload())).await;

        assert!(records.is_empty(), "{records:?}");
    }
}
