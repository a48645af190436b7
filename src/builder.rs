use std::path::{Path, PathBuf};

use log::info;

use crate::{
    errors::ConvertError, parsers::prelude::*, types::HomeBankRecord, writers::HomeBankWriter,
};

/// Prepended to the input's file name to name the HomeBank import
pub const OUTPUT_PREFIX: &str = "HomeBank_";

/// Where the import for `input` goes: `HomeBank_<file name>` inside
/// `output_dir`, or relative to the working directory when there is none.
///
/// Only the file name of `input` is kept, so `./Discover-A-B.csv` and
/// `exports/Discover-A-B.csv` both give `HomeBank_Discover-A-B.csv`.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf, ConvertError> {
    let name = input
        .file_name()
        .ok_or_else(|| ConvertError::InvalidInputPath {
            path: input.to_path_buf(),
        })?;

    let mut file_name = std::ffi::OsString::from(OUTPUT_PREFIX);
    file_name.push(name);

    Ok(match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    })
}

/// Maps every row, failing on the first row that cannot be converted.
pub fn convert_records(
    path: &Path,
    records: &[SourceRecord],
) -> Result<Vec<HomeBankRecord>, ConvertError> {
    records
        .iter()
        .enumerate()
        .map(|(index, row)| {
            HomeBankRecord::try_from(row).map_err(|source| ConvertError::Record {
                path: path.to_path_buf(),
                row: index + 1,
                source,
            })
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct ConverterBuilder {
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_path(&self) -> Result<PathBuf, ConvertError> {
        let input = self.input.as_deref().ok_or(ConvertError::MissingInput)?;
        output_path_for(input, self.output_dir.as_deref())
    }

    /// Converts the input file and returns the path of the written import.
    ///
    /// Every row is converted before the output is opened, so a bad row
    /// leaves no output file behind.
    pub fn convert(self) -> Result<PathBuf, ConvertError> {
        let output = self.output_path()?;
        let input = self.input.ok_or(ConvertError::MissingInput)?;

        info!("Reading input file {}", input.display());
        let rows = DiscoverReader::read_path(&input)?;
        let records = convert_records(&input, &rows)?;

        info!("Writing output file {} ({} rows)", output.display(), records.len());
        HomeBankWriter::write_path(&output, &records)?;

        Ok(output)
    }
}
