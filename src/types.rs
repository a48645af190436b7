use serde::Serialize;

use crate::errors::RecordError;
use crate::parsers::prelude::*;

/// Column order HomeBank expects in a CSV import
pub const HOMEBANK_COLUMNS: [&str; 8] = [
    "date", "payment", "info", "payee", "memo", "amount", "category", "tags",
];

/// One row of a HomeBank CSV import.
///
/// Field order matches [`HOMEBANK_COLUMNS`] and is what serde emits.
/// `payment`, `info`, `payee`, `category` and `tags` are left blank for the
/// user to fill in from HomeBank after importing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeBankRecord {
    pub date: String,
    pub payment: String,
    pub info: String,
    pub payee: String,
    pub memo: String,
    pub amount: String,
    pub category: String,
    pub tags: String,
}

impl TryFrom<SourceRecord> for HomeBankRecord {
    type Error = RecordError;

    fn try_from(row: SourceRecord) -> Result<Self, Self::Error> {
        HomeBankRecord::try_from(&row)
    }
}

impl TryFrom<&SourceRecord> for HomeBankRecord {
    type Error = RecordError;

    fn try_from(row: &SourceRecord) -> Result<Self, Self::Error> {
        Ok(HomeBankRecord {
            date: row.post_date()?.to_homebank()?,
            memo: row.description().to_string(),
            amount: row.amount().to_string(),
            ..Default::default()
        })
    }
}
