use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use super::dto::SourceRecord;
use crate::errors::ConvertError;

pub const DELIMITER: u8 = b',';
pub const QUOTE: u8 = b'|';

/// Reads Discover activity exports into [`SourceRecord`]s.
pub struct DiscoverReader;

impl DiscoverReader {
    pub fn read_path(path: &Path) -> Result<Vec<SourceRecord>, ConvertError> {
        let file = File::open(path).map_err(|source| ConvertError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(file, path)
    }

    /// Parses every record of `input`. `path` is only used for error context.
    pub fn read<R: Read>(input: R, path: &Path) -> Result<Vec<SourceRecord>, ConvertError> {
        let csv_error = |source| ConvertError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers().map_err(csv_error)?.clone();
        if headers.iter().all(str::is_empty) {
            return Err(ConvertError::MissingHeader {
                path: path.to_path_buf(),
            });
        }
        debug!("{}: columns {:?}", path.display(), headers);

        // Short rows lack the trailing keys, extra cells have no header and
        // are dropped
        reader
            .records()
            .map(|result| {
                result
                    .map(|record| headers.iter().zip(record.iter()).collect::<SourceRecord>())
                    .map_err(csv_error)
            })
            .collect()
    }
}
