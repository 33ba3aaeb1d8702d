//! LibreLinkUp source using the LibreView HTTP API.
//!
//! Fetches the connection graph for one patient, which carries the latest
//! glucose measurement under `data.connection.glucoseMeasurement`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use glucose_tracker::LibreViewClient;
//!
//! # tokio_test::block_on(async {
//! let client = LibreViewClient::builder("patient-id", "token").build().unwrap();
//! let body = client.fetch_graph().await.unwrap();
//! println!("{}", body["data"]["connection"]["glucoseMeasurement"]);
//! # });
//! ```

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use super::{FetchError, ReadingSource};

/// Production LibreView API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.libreview.io";

/// Client identification expected by the LibreLinkUp API.
const PRODUCT: &str = "llu.ios";
const VERSION: &str = "4.7.0";

/// Async client for the LibreLinkUp connection graph endpoint.
#[derive(Debug, Clone)]
pub struct LibreViewClient {
    client: Client,
    base_url: String,
    patient_id: String,
    token: String,
}

impl LibreViewClient {
    /// Create a new builder for the given patient and bearer token.
    pub fn builder(
        patient_id: impl Into<String>,
        token: impl Into<String>,
    ) -> LibreViewClientBuilder {
        LibreViewClientBuilder {
            patient_id: patient_id.into(),
            token: token.into(),
            base_url: None,
            client: None,
        }
    }

    /// Full URL of the graph endpoint for this patient.
    pub fn graph_url(&self) -> String {
        format!(
            "{}/llu/connections/{}/graph",
            self.base_url.trim_end_matches('/'),
            self.patient_id
        )
    }

    /// Fetch the connection graph.
    ///
    /// Only a `200 OK` with a JSON body counts as success.
    pub async fn fetch_graph(&self) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(self.graph_url())
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .header("product", PRODUCT)
            .header("version", VERSION)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(body)
    }
}

/// Builder for LibreViewClient.
#[derive(Debug)]
pub struct LibreViewClientBuilder {
    patient_id: String,
    token: String,
    base_url: Option<String>,
    client: Option<Client>,
}

impl LibreViewClientBuilder {
    /// Set the API base URL (default: [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a preconfigured HTTP client (proxy, timeouts, TLS settings).
    pub fn http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<LibreViewClient, FetchError> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(LibreViewClient {
            client,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            patient_id: self.patient_id,
            token: self.token,
        })
    }
}

/// A blocking [`ReadingSource`] backed by [`LibreViewClient`].
///
/// Each fetch runs the request to completion on a private current-thread
/// runtime, blocking the caller for the duration of the request.
#[derive(Debug)]
pub struct LibreViewSource {
    client: LibreViewClient,
    runtime: Runtime,
    description: String,
    last_error: Option<String>,
}

impl LibreViewSource {
    /// Create a source for the production API.
    pub fn new(patient_id: &str, token: &str) -> Result<Self> {
        let client = LibreViewClient::builder(patient_id, token).build()?;
        Self::with_client(client)
    }

    /// Create a source around an already configured client.
    pub fn with_client(client: LibreViewClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let description = format!("libreview: {}", client.graph_url());
        Ok(Self {
            client,
            runtime,
            description,
            last_error: None,
        })
    }
}

impl ReadingSource for LibreViewSource {
    fn fetch(&mut self) -> Option<Value> {
        match self.runtime.block_on(self.client.fetch_graph()) {
            Ok(body) => {
                debug!("Fetched graph from {}", self.client.graph_url());
                self.last_error = None;
                Some(body)
            }
            Err(FetchError::Status(status)) => {
                warn!("Error: {}", status.as_u16());
                self.last_error = Some(format!("HTTP {}", status.as_u16()));
                None
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Client pointed at a local test server, bypassing any system proxy.
    fn local_client(addr: std::net::SocketAddr) -> LibreViewClient {
        LibreViewClient::builder("p", "t")
            .base_url(format!("http://{}", addr))
            .http_client(Client::builder().no_proxy().build().unwrap())
            .build()
            .unwrap()
    }

    /// Accept one connection, answer it with a canned response and return
    /// the raw request text.
    async fn serve_once(listener: TcpListener, status: &str, body: &str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    }

    #[test]
    fn test_builder_defaults() {
        let client = LibreViewClient::builder("abc-123", "secret").build().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            client.graph_url(),
            "https://api.libreview.io/llu/connections/abc-123/graph"
        );
    }

    #[test]
    fn test_builder_custom_base_url() {
        let client = LibreViewClient::builder("p1", "t")
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.graph_url(), "http://127.0.0.1:8080/llu/connections/p1/graph");
    }

    #[tokio::test]
    async fn test_fetch_graph_sends_headers_and_parses_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(
            listener,
            "200 OK",
            r#"{"data":{"connection":{"glucoseMeasurement":{"Value":6.5,"Timestamp":"T1","TrendArrow":3}}}}"#,
        ));

        let client = LibreViewClient::builder("p-1", "tok")
            .base_url(format!("http://{}", addr))
            .http_client(Client::builder().no_proxy().build().unwrap())
            .build()
            .unwrap();
        let body = client.fetch_graph().await.unwrap();
        assert_eq!(body["data"]["connection"]["glucoseMeasurement"]["Value"], 6.5);

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /llu/connections/p-1/graph http/1.1"));
        assert!(request.contains("authorization: bearer tok"));
        assert!(request.contains("content-type: application/json"));
        assert!(request.contains("product: llu.ios"));
        assert!(request.contains("version: 4.7.0"));
    }

    #[tokio::test]
    async fn test_fetch_graph_rejects_non_json_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "200 OK", "not json"));

        let client = local_client(addr);
        let result = client.fetch_graph().await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
        server.await.unwrap();
    }

    #[test]
    fn test_source_returns_none_on_404() {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        std_listener.set_nonblocking(true).unwrap();
        let addr = std_listener.local_addr().unwrap();

        let client = local_client(addr);
        let mut source = LibreViewSource::with_client(client).unwrap();

        // Runs on the source's runtime while fetch() blocks on it.
        source.runtime.spawn(async move {
            let listener = TcpListener::from_std(std_listener).unwrap();
            serve_once(listener, "404 Not Found", "").await
        });

        assert!(source.fetch().is_none());
        assert_eq!(source.error(), Some("HTTP 404"));
    }

    #[test]
    fn test_source_returns_none_when_unreachable() {
        // Bind then drop to get a port with nothing listening.
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

        let client = local_client(addr);
        let mut source = LibreViewSource::with_client(client).unwrap();

        assert!(source.fetch().is_none());
        assert!(source.error().is_some());
        assert!(source.description().starts_with("libreview: http://127.0.0.1:"));
    }
}
