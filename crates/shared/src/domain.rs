use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned product identifier.
///
/// Backends disagree on whether ids are numbers or strings, so both shapes are
/// accepted on the wire and kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = match RawScalar::deserialize(deserializer)? {
            RawScalar::Int(v) => v.to_string(),
            RawScalar::Float(v) => v.to_string(),
            RawScalar::Text(v) => v,
        };
        Ok(Self(id))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Decimal columns are frequently serialized as strings (`"9.50"`). Anything
/// unreadable becomes NaN so one bad row does not sink the whole listing.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(v) => v,
        RawPrice::Text(v) => v.trim().parse::<f64>().unwrap_or(f64::NAN),
        RawPrice::Other(_) => f64::NAN,
    })
}

fn unpriced() -> f64 {
    f64::NAN
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nome: String,
    #[serde(default = "unpriced", deserialize_with = "deserialize_price")]
    pub preco: f64,
    #[serde(default)]
    pub descricao: Option<String>,
}
