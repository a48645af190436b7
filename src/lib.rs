//! Convert Discover credit card activity exports into HomeBank CSV imports.
//!
//! ```rust,ignore
//! use discover_homebank::ConverterBuilder;
//!
//! let output = ConverterBuilder::new()
//!     .input("Discover-AllAvailable-20230215.csv")
//!     .convert()?;
//! ```

mod builder;
mod config;
mod locator;
mod runner;
mod types;

pub mod errors;
pub mod parsers;
pub mod writers;

pub use builder::{ConverterBuilder, OUTPUT_PREFIX, convert_records, output_path_for};
pub use config::{Config, FailurePolicy};
pub use errors::{ConvertError, RecordError};
pub use locator::{DISCOVER_FILE_PATTERN, DiscoverLocator, InputSource};
pub use parsers::prelude::*;
pub use runner::{RunReport, convert_file, run};
pub use types::{HOMEBANK_COLUMNS, HomeBankRecord};
pub use writers::HomeBankWriter;
