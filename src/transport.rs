//! HTTP POST collaborator seam.
//!
//! The client core never talks to the network directly; it goes through
//! [`HttpTransport`], so tests can substitute a mock and applications can
//! bring their own client. [`ReqwestTransport`] is the default
//! implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::Result;

/// Raw response from the transport. The status code is reported but the
/// client core does not branch on it: gateway failures arrive as
/// `return_code`/`return_msg` fields in the XML body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Blocking-equivalent HTTP POST primitive: one request, full body, no
/// retries. Implementations must be safe to call concurrently.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse>;
}

/// Default transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the underlying client with the given timeout budget. The
    /// timeouts are advisory configuration handed to reqwest, not enforced
    /// here.
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()
            .expect("reqwest client construction");
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
