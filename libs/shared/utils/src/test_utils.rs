use std::io::Write;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use axum::body::Body;
use axum::response::Response;
use http::{header, Method, Request};
use serde_json::Value;
use tempfile::NamedTempFile;

use shared_config::AppConfig;

pub struct TestConfig {
    pub host: IpAddr,
    pub port: u16,
    pub chatbot_rules_path: Option<PathBuf>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            chatbot_rules_path: None,
        }
    }
}

impl TestConfig {
    pub fn with_rules_file(path: impl Into<PathBuf>) -> Self {
        Self {
            chatbot_rules_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: self.host,
            port: self.port,
            chatbot_rules_path: self.chatbot_rules_path.clone(),
        }
    }
}

/// Writes `contents` to a fresh temp file. The file is removed when the handle drops.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    raw_request(method, uri, body.to_string())
}

pub fn raw_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn read_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&body).expect("response body is JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_creation() {
        let app_config = TestConfig::default().to_app_config();

        assert_eq!(app_config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(app_config.port, 0);
        assert!(app_config.chatbot_rules_path.is_none());
    }

    #[test]
    fn test_config_with_rules_file() {
        let file = write_temp_file("{\"rules\": []}");
        let config = TestConfig::with_rules_file(file.path()).to_app_config();

        assert_eq!(config.chatbot_rules_path.as_deref(), Some(file.path()));
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "{\"rules\": []}");
    }

    #[test]
    fn test_json_request_sets_content_type() {
        let request = json_request(Method::POST, "/api/chat", &json!({"message": "hi"}));

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri(), "/api/chat");
        assert_eq!(
            request.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
