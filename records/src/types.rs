//! Record DTOs mirroring the server's JSON serializers.
//!
//! DESIGN
//! ======
//! Values the UI only displays or echoes back (amounts, dates, timestamps) are
//! kept as the exact text the server sent, so rendering never reformats them
//! and edit forms round-trip them unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Label used when the server reports a total without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Monetary amount in the textual form the server sent.
///
/// Decimal fields arrive as JSON strings (`"12.50"`); plain numbers are
/// accepted as well and kept in their JSON rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(Self(raw)),
            Value::Number(number) => Ok(Self(number.to_string())),
            other => Err(D::Error::custom(format!("expected amount as string or number, got {other}"))),
        }
    }
}

/// A single expense as returned by the list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier (UUID string). Never generated client-side.
    pub id: String,
    pub amount: Amount,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    /// Category reference as sent by the server.
    #[serde(default)]
    pub category: Option<String>,
    /// Human-readable category label, when the serializer includes it.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Calendar date as `YYYY-MM-DD`.
    pub expense_date: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    /// Receipt URL; carried through but never rendered.
    #[serde(default)]
    pub receipt: Option<String>,
}

impl Expense {
    /// Label shown in the category column: the name when present, else the raw reference.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.category.as_deref())
            .unwrap_or_default()
    }
}

/// A budget income record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub id: Option<String>,
    pub budget_amount: Amount,
    /// Creation timestamp exactly as the server rendered it.
    pub created_at: String,
}

impl Income {
    /// Text of one income list entry: `"<budget_amount> - <created_at>"`.
    #[must_use]
    pub fn list_entry(&self) -> String {
        format!("{} - {}", self.budget_amount, self.created_at)
    }
}

/// Income endpoint body; the server may answer with one record or a list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IncomeListing {
    Many(Vec<Income>),
    One(Income),
}

impl From<IncomeListing> for Vec<Income> {
    fn from(listing: IncomeListing) -> Self {
        match listing {
            IncomeListing::Many(items) => items,
            IncomeListing::One(item) => vec![item],
        }
    }
}

/// Chart-style aggregate returned by the summary endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    #[serde(deserialize_with = "deserialize_labels")]
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSummary {
    /// Label/total pairs; extra labels or values without a partner are dropped.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.rows().map(|(_, value)| value).sum()
    }
}

/// Flat key/value body built from a form's fields.
///
/// Keys keep their first-insertion position; setting an existing key replaces
/// its value, so a repeated field ends up with the last value written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render as a single-level JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (key, value) in iter {
            payload.set(key, value);
        }
        payload
    }
}

impl Serialize for FormPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Option<String>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|label| label.unwrap_or_else(|| UNCATEGORIZED_LABEL.to_owned()))
        .collect())
}
