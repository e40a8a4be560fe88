//! Server-to-server client for the WeChat Pay v2 XML API.
//!
//! Builds signed XML requests, posts them over HTTPS, and parses signed XML
//! responses. The interoperability-critical pieces — canonical signing order,
//! the empty-field skip rule, CDATA-wrapped XML marshalling, and the blunt
//! whitespace strip applied to responses — reproduce the remote protocol
//! exactly and must not be "improved".
//!
//! ```no_run
//! use wxpay::{Account, Client, Params};
//!
//! # async fn run() -> wxpay::Result<()> {
//! let client = Client::new(Account::new("wx123", "10000", "secretkey", true));
//!
//! let mut params = Params::new();
//! params
//!     .set_string("body", "test")
//!     .set_string("out_trade_no", "ORDER1")
//!     .set_int("total_fee", 100);
//!
//! let response = client.create_order(params).await?;
//! if response.get_string("return_code") == wxpay::SUCCESS {
//!     // inspect result_code, prepay_id, ...
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod client;
pub mod core;
pub mod params;
pub mod sign;
pub mod transport;
pub mod xml;

// Re-export commonly used types
pub use account::Account;
pub use client::{Client, Endpoints, Operation, SUCCESS};
pub use crate::core::{Error, Result};
pub use params::Params;
pub use sign::{sign, SignType};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
