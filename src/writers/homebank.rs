use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::errors::ConvertError;
use crate::types::{HOMEBANK_COLUMNS, HomeBankRecord};

pub const DELIMITER: u8 = b';';
pub const QUOTE: u8 = b'|';

/// Writes HomeBank CSV imports.
pub struct HomeBankWriter;

impl HomeBankWriter {
    /// Writes the header and `records`. The header is always written, even
    /// when there are no records.
    pub fn write<W: Write>(output: W, records: &[HomeBankRecord]) -> Result<(), csv::Error> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(output);

        writer.write_record(HOMEBANK_COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Creates or truncates `path` and writes the import into it.
    pub fn write_path(path: &Path, records: &[HomeBankRecord]) -> Result<(), ConvertError> {
        let write_error = |source| ConvertError::WriteOutput {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::create(path)
            .map_err(|e| write_error(csv::Error::from(e)))?;
        Self::write(file, records).map_err(write_error)
    }
}
