use std::collections::BTreeMap;

/// Request/response field collection for the v2 XML API.
///
/// Every value is a string; the remote protocol is loosely typed and the
/// integer accessors convert at the boundary. Keys iterate in byte-wise
/// ascending order, which is also the canonical signing order.
///
/// Setters mutate in place and return `&mut Self` so call sites can chain:
///
/// ```
/// use wxpay::Params;
///
/// let mut params = Params::new();
/// params
///     .set_string("body", "test")
///     .set_string("out_trade_no", "ORDER1")
///     .set_int("total_fee", 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    fields: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the value for `key`, or the empty string if absent.
    pub fn get_string(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        self.fields.insert(key.into(), value.to_string());
        self
    }

    /// Returns the value for `key` parsed as an integer.
    ///
    /// Absent or malformed values read as 0, matching the remote API's loose
    /// typing rather than raising an error.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get_string(key).parse().unwrap_or(0)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterates entries in byte-wise ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
