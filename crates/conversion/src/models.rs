//! Value types shared by the conversion client and its callers.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary quantity. Always a decimal, never a binary float.
pub type Amount = Decimal;

/// A currency identified by its code.
///
/// Codes are opaque, case-sensitive tokens. Nothing here checks them against
/// an ISO list; an unknown code is reported by the external service instead.
/// Identity is the code alone, the description does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    code: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Currency {
    /// Creates a currency from a raw code without a description.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    /// Creates a currency with a human-readable description.
    pub fn with_description(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: Some(description.into()),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// One source/target/amount triple sent to the external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub source: Currency,
    pub target: Currency,
    pub amount: Amount,
}

impl ConversionRequest {
    pub fn new(source: Currency, target: Currency, amount: Amount) -> Self {
        Self {
            source,
            target,
            amount,
        }
    }

    /// Query parameters in the order the external API documents them.
    ///
    /// The amount is normalized so `100.00` is sent as `100`.
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("amount", self.amount.normalize().to_string()),
            ("from", self.source.code().to_string()),
            ("to", self.target.code().to_string()),
        ]
    }
}

/// Raw response body of a successful conversion call.
///
/// The content is not a structured contract; it is displayed as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPayload(Vec<u8>);

impl ConversionPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Payload decoded as UTF-8, replacing invalid sequences.
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<Vec<u8>> for ConversionPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for ConversionPayload {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

// Serialized as text: the payload exists to be shown to a user.
impl Serialize for ConversionPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_text_lossy())
    }
}
