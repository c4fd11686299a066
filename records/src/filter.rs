//! Expense list filter criteria and query-string construction.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering by amount supported by the list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{other}' (expected 'asc' or 'desc')")),
        }
    }
}

/// Optional list criteria, held as the raw text of their input controls.
///
/// No validation happens here; the server decides what a year or month means.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub year: String,
    pub month: String,
    pub category_name: String,
    pub sort: Option<SortOrder>,
}

impl ExpenseFilter {
    /// Non-empty criteria in wire order: year, month, category_name, sort.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        for (key, value) in [
            ("year", self.year.as_str()),
            ("month", self.month.as_str()),
            ("category_name", self.category_name.as_str()),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                params.push((key, value.to_owned()));
            }
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str().to_owned()));
        }
        params
    }

    /// Query suffix for the list endpoint.
    ///
    /// Always starts with `?` and terminates every pair with `&`, so an empty
    /// filter yields `"?"` and a full one ends in a dangling `&`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = String::from("?");
        for (key, value) in self.params() {
            query.push_str(key);
            query.push('=');
            query.push_str(&urlencoding::encode(&value));
            query.push('&');
        }
        query
    }

    /// Year to use for the monthly summary, if one is set.
    #[must_use]
    pub fn summary_year(&self) -> Option<&str> {
        Some(self.year.trim()).filter(|year| !year.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }
}
