//! HTTP client for posting the onboarding form
//!
//! Sends the form values as a JSON body and hands back the status code and
//! decoded body. Only a 2xx answer counts as a response; any other status is
//! a failed request.

use crate::state::OnboardValues;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::traits::Submitter;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

/// Errors that can occur while submitting
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {endpoint} failed with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// What the endpoint answered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Submitter that POSTs JSON over HTTP
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, values: &OnboardValues) -> Result<SubmitResponse, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(values)
            .send()
            .await
            .map_err(|source| SubmitError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let status = status.as_u16();
        let bytes = response.bytes().await.map_err(SubmitError::Decode)?;
        // Non-JSON bodies are kept as text so they can still be logged
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });

        Ok(SubmitResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection, capture the raw request and answer with `reply`
    async fn one_shot_server(reply: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= split + 4 + length {
                        break;
                    }
                }
            }
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}/api/users"), handle)
    }

    fn values() -> OnboardValues {
        OnboardValues {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            tos: false,
        }
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(HttpSubmitter::default().endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(DEFAULT_ENDPOINT, "https://reqres.in/api/users");
    }

    #[tokio::test]
    async fn test_posts_values_as_json() {
        let (url, server) = one_shot_server(
            "HTTP/1.1 201 Created\r\nContent-Type: application/json\r\nContent-Length: 13\r\nConnection: close\r\n\r\n{\"id\":\"123\"}\n",
        )
        .await;

        let response = HttpSubmitter::new(url).submit(&values()).await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body, serde_json::json!({"id": "123"}));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/users "));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({"name": "Jo", "email": "a@b.com", "password": "x", "TOS": false})
        );
    }

    #[tokio::test]
    async fn test_server_error_status_is_a_failure() {
        let (url, server) = one_shot_server(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\noops",
        )
        .await;

        let err = HttpSubmitter::new(url).submit(&values()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Status { status: 500, .. }));
        assert!(err.to_string().contains("status 500"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_error_status_is_a_failure() {
        let (url, server) = one_shot_server(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = HttpSubmitter::new(url).submit(&values()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Status { status: 404, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpSubmitter::new(format!("http://{addr}/"))
            .submit(&values())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Request { .. }));
        assert!(err.to_string().contains(&addr.to_string()));
    }
}
