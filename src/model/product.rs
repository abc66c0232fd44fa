//! The product record and its loosely typed inputs.
//!
//! [`Product`] implements [`CollectionEntity`](crate::framework::CollectionEntity) (see
//! `product_store::entity`), so it can live in a [`CollectionStore`](crate::framework::CollectionStore).
//! Two looser shapes feed into it:
//! - [`ProductDraft`], the creation payload, with form-style numeric inputs
//! - [`StoredProduct`], one element of a persisted snapshot

use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt::Display;
use std::str::FromStr;

/// Largest id a product can carry. Keeps `max + 1` far away from `u64` overflow.
pub const MAX_PRODUCT_ID: u64 = i64::MAX as u64;

/// Type-safe identifier for Products. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid product id: '{0}'")]
pub struct ParseProductIdError(pub String);

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    /// Accepts plain decimal digits in `1..=MAX_PRODUCT_ID`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseProductIdError(s.to_string()));
        }
        match s.parse::<u64>() {
            Ok(id) if (1..=MAX_PRODUCT_ID).contains(&id) => Ok(Self(id)),
            _ => Err(ParseProductIdError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the store)
    /// * `name` - Product name
    /// * `category` - Product category
    /// * `price` - Unit price
    /// * `quantity` - Units in stock
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }
}

/// A loosely typed numeric field, as it arrives from a form or a snapshot.
///
/// Holds any JSON value; [`to_number`](Self::to_number) applies [`coerce_number`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericInput(pub Value);

impl NumericInput {
    pub fn missing() -> Self {
        Self(Value::Null)
    }

    pub fn to_number(&self) -> f64 {
        coerce_number(&self.0)
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        Self(Value::from(n))
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self {
        Self(Value::from(n))
    }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self {
        Self(Value::from(n))
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        Self(Value::from(s))
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        Self(Value::from(s))
    }
}

impl From<Value> for NumericInput {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

/// Payload for creating a new product. Carries no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub price: NumericInput,
    #[serde(default)]
    pub quantity: NumericInput,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<NumericInput>,
        quantity: impl Into<NumericInput>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

/// One element of a persisted product snapshot.
///
/// `id` must be an integer; everything else is tolerated. Missing or `null` labels become
/// empty strings and the numeric fields go through [`coerce_number`]. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredProduct {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub quantity: Value,
}

/// Converts a loosely typed value into a finite number, defaulting to `0`.
///
/// - numbers pass through
/// - text is trimmed; empty text is `0`; decimal, exponent and `0x`/`0o`/`0b` forms parse
/// - `true` is `1`, `false` and `null` are `0`
/// - a one-element array is read through its element as text, so `[5]` and `["3"]` parse
///   but `[true]` is `0`; empty and longer arrays are `0`
/// - anything unparseable, non-finite, and objects are `0`
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        other => coerce_as_text(other),
    };
    if n.is_finite() && n != 0.0 {
        n
    } else {
        0.0
    }
}

/// Numbers, text and single-element arrays. Booleans here stand for the words `true`/`false`.
fn coerce_as_text(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_text(s),
        Value::Array(items) => match items.as_slice() {
            [single] => coerce_as_text(single),
            _ => 0.0,
        },
        Value::Bool(_) | Value::Null | Value::Object(_) => 0.0,
    }
}

fn parse_numeric_text(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return 0.0;
        }
        return u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(0.0);
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings; only digits count here.
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(0.0)
}
