/// Merchant credentials for the v2 API.
///
/// Immutable after construction; a [`Client`](crate::Client) owns exactly one
/// account for its lifetime.
#[derive(Debug, Clone)]
pub struct Account {
    app_id: String,
    mch_id: String,
    api_key: String,
    cert_data: Option<Vec<u8>>,
    sandbox: bool,
}

impl Account {
    pub fn new(
        app_id: impl Into<String>,
        mch_id: impl Into<String>,
        api_key: impl Into<String>,
        sandbox: bool,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            mch_id: mch_id.into(),
            api_key: api_key.into(),
            cert_data: None,
            sandbox,
        }
    }

    /// Attaches the API client certificate. Not used by the create-order and
    /// query-order operations, but carried for callers that need it.
    pub fn with_cert_data(mut self, cert_data: Vec<u8>) -> Self {
        self.cert_data = Some(cert_data);
        self
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn mch_id(&self) -> &str {
        &self.mch_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn cert_data(&self) -> Option<&[u8]> {
        self.cert_data.as_deref()
    }

    /// True when the account targets the sandbox endpoint set.
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }
}
