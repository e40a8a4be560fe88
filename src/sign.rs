//! Canonical request signing for the v2 API.

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;

use crate::params::Params;

type HmacSha256 = Hmac<Sha256>;

/// Field carrying the signature itself; always excluded from the buffer.
const SIGN_KEY: &str = "sign";

/// Signature algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignType {
    Md5,
    HmacSha256,
}

impl SignType {
    /// Wire identifier sent as the `sign_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignType::Md5 => "MD5",
            SignType::HmacSha256 => "HMAC-SHA256",
        }
    }
}

/// Computes the canonical signature over `params`.
///
/// The buffer is `key=value&` pairs in byte-wise ascending key order,
/// excluding the `sign` field and every empty-valued field (the protocol
/// omits them rather than emitting `key=&`), terminated by `key=<api_key>`
/// with no trailing `&`. The digest is hex-encoded uppercase: 32 chars for
/// MD5, 64 for HMAC-SHA256. All of this is fixed by the remote protocol and
/// must not drift.
pub fn sign(params: &Params, api_key: &str, sign_type: SignType) -> String {
    let mut buf = String::new();
    for (key, value) in params.iter() {
        if key == SIGN_KEY || value.is_empty() {
            continue;
        }
        buf.push_str(key);
        buf.push('=');
        buf.push_str(value);
        buf.push('&');
    }
    buf.push_str("key=");
    buf.push_str(api_key);

    match sign_type {
        SignType::Md5 => hex::encode_upper(Md5::digest(buf.as_bytes())),
        SignType::HmacSha256 => {
            let mut mac =
                HmacSha256::new_from_slice(api_key.as_bytes()).expect("HMAC accepts any key");
            mac.update(buf.as_bytes());
            hex::encode_upper(mac.finalize().into_bytes())
        }
    }
}
