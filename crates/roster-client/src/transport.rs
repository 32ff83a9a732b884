use std::time::Instant;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;

/// JSON over some verb-based transport. Every method yields the decoded body
/// on 2xx and fails otherwise.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn get(&self, path: &str) -> Result<Value, ClientError>;
    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError>;
    async fn put(&self, path: &str, body: Value) -> Result<Value, ClientError>;
    async fn delete(&self, path: &str) -> Result<Value, ClientError>;
}

/// Reads a collection and decodes it into typed records.
pub async fn get_list<T, X>(transport: &X, path: &str) -> Result<Vec<T>, ClientError>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
{
    let body = transport.get(path).await?;
    serde_json::from_value(body).map_err(|err| ClientError::Decode {
        path: path.to_string(),
        message: err.to_string(),
    })
}

pub struct HttpTransport {
    client: reqwest::Client,
    addr: String,
    allow_insecure: bool,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, addr: &str, allow_insecure: bool) -> Self {
        Self {
            client,
            addr: addr.trim_end_matches('/').to_string(),
            allow_insecure,
        }
    }

    #[must_use]
    pub fn addr(&self) -> &str {
        &self.addr
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value, ClientError> {
        if self.addr.starts_with("http://") && !self.allow_insecure {
            return Err(ClientError::InsecureAddress {
                addr: self.addr.clone(),
            });
        }
        let url = format!("{}{}", self.addr, path);
        let builder = self.client.request(method.clone(), &url);
        let builder = if let Some(payload) = payload {
            builder.json(&payload)
        } else {
            builder
        };
        debug!(method = %method, url = %url, "http request");
        let start = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        debug!(
            method = %method,
            url = %url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                method: method.to_string(),
                path: path.to_string(),
                status,
                body,
            });
        }
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| {
            let snippet: String = body.chars().take(512).collect();
            ClientError::Decode {
                path: path.to_string(),
                message: format!("{err} (status {status}) body: {snippet}"),
            }
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.send(Method::DELETE, path, None).await
    }
}
