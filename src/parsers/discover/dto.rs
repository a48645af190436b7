use std::collections::HashMap;

use super::types::DiscoverDate;
use crate::errors::RecordError;

pub const POST_DATE: &str = "Post Date";
pub const DESCRIPTION: &str = "Description";
pub const AMOUNT: &str = "Amount";

/// One row of a Discover export, keyed by header name.
///
/// Discover adds and reorders columns between export versions, so rows are
/// kept as a plain map instead of a fixed struct. Only `Post Date` is
/// mandatory; every other lookup falls back to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord(HashMap<String, String>);

impl SourceRecord {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn field_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    pub fn required(&self, field: &'static str) -> Result<&str, RecordError> {
        self.get(field).ok_or(RecordError::MissingField(field))
    }

    pub fn post_date(&self) -> Result<DiscoverDate, RecordError> {
        self.required(POST_DATE).map(DiscoverDate::from)
    }

    pub fn description(&self) -> &str {
        self.field_or_empty(DESCRIPTION)
    }

    pub fn amount(&self) -> &str {
        self.field_or_empty(AMOUNT)
    }
}

impl<K, V> FromIterator<(K, V)> for SourceRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
