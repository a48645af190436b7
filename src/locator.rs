//! Resolves which files a run should convert.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;

use crate::errors::ConvertError;

/// File names Discover gives its activity exports, e.g.
/// `Discover-AllAvailable-20230215.csv` or `Discover-Statement-(1).csv`.
pub const DISCOVER_FILE_PATTERN: &str = r"^Discover-[a-zA-Z0-9]*-[a-zA-Z0-9()]*\.csv$";

/// Where a run takes its input files from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Exactly this file, existence is checked when it is converted
    File(PathBuf),
    /// Every Discover export directly inside this directory
    Directory(PathBuf),
}

impl InputSource {
    /// Discovery in the current working directory
    pub fn current_dir() -> Self {
        InputSource::Directory(PathBuf::from("."))
    }
}

pub struct DiscoverLocator {
    pattern: Regex,
}

impl DiscoverLocator {
    pub fn new() -> Result<Self, ConvertError> {
        Ok(Self {
            pattern: Regex::new(DISCOVER_FILE_PATTERN)?,
        })
    }

    pub fn is_match(&self, filename: &str) -> bool {
        self.pattern.is_match(filename)
    }

    pub fn locate(&self, source: &InputSource) -> Result<Vec<PathBuf>, ConvertError> {
        match source {
            InputSource::File(path) => Ok(vec![path.clone()]),
            InputSource::Directory(dir) => self.scan(dir),
        }
    }

    /// Lists matching files directly inside `dir`, sorted by name.
    /// Subdirectories are never entered, even when their name matches.
    pub fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
        let read_error = |source| ConvertError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        };

        let mut found = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            let path = entry.path();

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("skipping non UTF-8 entry {}", path.display());
                continue;
            };
            if !self.is_match(&name) {
                continue;
            }
            if !path.is_file() {
                debug!("skipping {}: not a file", path.display());
                continue;
            }

            found.push(path);
        }

        found.sort();
        Ok(found)
    }
}
