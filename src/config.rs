use std::path::PathBuf;

use crate::{
    errors::ConvertError,
    locator::{DiscoverLocator, InputSource},
};

/// What to do with the remaining files once one of them fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Convert every file and report all failures at the end
    #[default]
    Continue,
    /// Stop at the first failure
    FailFast,
}

/// Everything a run needs, resolved up front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    /// `None` writes imports relative to the working directory
    pub output_dir: Option<PathBuf>,
    pub policy: FailurePolicy,
}

impl Config {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    /// Resolves `source` into the list of files to convert.
    pub fn from_source(
        source: &InputSource,
        output_dir: Option<PathBuf>,
        policy: FailurePolicy,
    ) -> Result<Self, ConvertError> {
        let inputs = DiscoverLocator::new()?.locate(source)?;
        Ok(Self {
            inputs,
            output_dir,
            policy,
        })
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}
