pub mod dto;
pub mod parser;
pub mod types;

pub mod prelude {
    pub use super::dto::{AMOUNT, DESCRIPTION, POST_DATE, SourceRecord};
    pub use super::parser::DiscoverReader;
    pub use super::types::{DISCOVER_DATE_FORMAT, DiscoverDate, HOMEBANK_DATE_FORMAT};
}
