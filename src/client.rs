//! Gateway client: merges credentials into request parameters, signs,
//! serializes, performs the HTTP exchange, and decodes the response.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::account::Account;
use crate::core::Result;
use crate::params::Params;
use crate::sign::{sign, SignType};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::xml::{compact, from_xml, to_xml};

/// `return_code`/`result_code` value the gateway uses for success. A domain
/// convention of the remote API; this client never interprets it, callers
/// inspect the returned map themselves.
pub const SUCCESS: &str = "SUCCESS";

const BODY_TYPE: &str = "application/xml; charset=utf-8";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(1000);

/// The two supported round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateOrder,
    QueryOrder,
}

/// Endpoint URL set, injected into the client so tests can point both
/// operations at a mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub create_order: String,
    pub query_order: String,
    pub sandbox_create_order: String,
    pub sandbox_query_order: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            create_order: "https://api.mch.weixin.qq.com/pay/unifiedorder".to_string(),
            query_order: "https://api.mch.weixin.qq.com/pay/orderquery".to_string(),
            sandbox_create_order: "https://api.mch.weixin.qq.com/sandboxnew/pay/unifiedorder"
                .to_string(),
            sandbox_query_order: "https://api.mch.weixin.qq.com/sandboxnew/pay/orderquery"
                .to_string(),
        }
    }
}

impl Endpoints {
    pub fn resolve(&self, operation: Operation, sandbox: bool) -> &str {
        match (operation, sandbox) {
            (Operation::CreateOrder, false) => &self.create_order,
            (Operation::CreateOrder, true) => &self.sandbox_create_order,
            (Operation::QueryOrder, false) => &self.query_order,
            (Operation::QueryOrder, true) => &self.sandbox_query_order,
        }
    }
}

/// Gateway client for one merchant account.
///
/// Holds no mutable per-call state, so one instance may be shared across
/// tasks; each call issues exactly one POST and awaits the full body. No
/// retries on any failure.
pub struct Client {
    account: Account,
    sign_type: SignType,
    endpoints: Endpoints,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Defaults to MD5 signing, the fixed WeChat endpoint set, and a reqwest
    /// transport with a 2000 ms connect / 1000 ms read timeout budget. No
    /// network side effects at construction.
    pub fn new(account: Account) -> Self {
        Self {
            account,
            sign_type: SignType::Md5,
            endpoints: Endpoints::default(),
            transport: Arc::new(ReqwestTransport::new(
                DEFAULT_CONNECT_TIMEOUT,
                DEFAULT_READ_TIMEOUT,
            )),
        }
    }

    pub fn with_sign_type(mut self, sign_type: SignType) -> Self {
        self.sign_type = sign_type;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Creates a payment order (the v2 "unified order" call).
    pub async fn create_order(&self, params: Params) -> Result<Params> {
        self.execute(Operation::CreateOrder, params).await
    }

    /// Queries an existing order.
    pub async fn query_order(&self, params: Params) -> Result<Params> {
        self.execute(Operation::QueryOrder, params).await
    }

    /// Shared request path for both operations.
    ///
    /// Merges `appid`, `mch_id`, a fresh nonce, and `sign_type` into the
    /// caller's parameters, computes `sign` last so it covers everything
    /// merged before it, posts the XML body, and decodes the response map.
    /// Transport failures propagate immediately; the HTTP status code is not
    /// branched on, since gateway failures arrive as fields in the body.
    pub async fn execute(&self, operation: Operation, mut params: Params) -> Result<Params> {
        let url = self.endpoints.resolve(operation, self.account.is_sandbox());

        params
            .set_string("appid", self.account.app_id())
            .set_string("mch_id", self.account.mch_id())
            .set_string("nonce_str", nonce_str())
            .set_string("sign_type", self.sign_type.as_str());
        let signature = sign(&params, self.account.api_key(), self.sign_type);
        params.set_string("sign", signature);

        let body = to_xml(&params);
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .transport
            .post(url, BODY_TYPE, body.into_bytes())
            .await?;
        tracing::debug!(
            "gateway responded with status {} ({} bytes)",
            response.status,
            response.body.len()
        );

        let doc = String::from_utf8_lossy(&response.body);
        Ok(from_xml(&compact(&doc)))
    }
}

/// Nonce derived from the current UTC timestamp at nanosecond resolution.
///
/// Uniqueness relies on clock granularity, not randomness: two calls landing
/// on the same nanosecond tick would collide. Kept as-is for compatibility
/// with the existing integration.
fn nonce_str() -> String {
    Utc::now().timestamp_nanos_opt().unwrap_or_default().to_string()
}
