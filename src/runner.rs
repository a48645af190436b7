use std::path::PathBuf;

use log::{info, warn};

use crate::{
    builder::ConverterBuilder,
    config::{Config, FailurePolicy},
    errors::ConvertError,
};

/// Outcome of converting every file in a [`Config`]
#[derive(Debug, Default)]
pub struct RunReport {
    /// (input, output) for every file that converted
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<(PathBuf, ConvertError)>,
    /// Inputs never attempted because an earlier file failed under
    /// [`FailurePolicy::FailFast`]
    pub skipped: Vec<PathBuf>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn convert_file(config: &Config, input: PathBuf) -> Result<PathBuf, ConvertError> {
    let mut builder = ConverterBuilder::new().input(input);
    if let Some(dir) = &config.output_dir {
        builder = builder.output_dir(dir);
    }
    builder.convert()
}

/// Converts each input in order. Failures never stop the run unless the
/// config asks for [`FailurePolicy::FailFast`].
pub fn run(config: &Config) -> RunReport {
    let mut report = RunReport::default();

    if config.inputs.is_empty() {
        info!("No Discover CSV files to convert");
        return report;
    }

    let mut inputs = config.inputs.iter();
    for input in inputs.by_ref() {
        match convert_file(config, input.clone()) {
            Ok(output) => report.converted.push((input.clone(), output)),
            Err(err) => {
                warn!("{err}");
                report.failures.push((input.clone(), err));
                if config.policy == FailurePolicy::FailFast {
                    break;
                }
            }
        }
    }
    report.skipped.extend(inputs.cloned());

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const GOOD: &str = "Post Date,Description,Amount\n02/15/2023,GROCERY STORE,-45.67\n";
    const BAD: &str = "Post Date,Description,Amount\n13/01/2023,BAD,1.00\n";

    fn setup(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let inputs = files
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (dir, inputs)
    }

    fn output(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("HomeBank_{name}"))
    }

    #[test]
    fn test_run_with_no_inputs() {
        let report = run(&Config::default());

        assert!(report.is_success());
        assert!(report.converted.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_continue_after_failure() {
        let (dir, inputs) = setup(&[
            ("Discover-A-1.csv", GOOD),
            ("Discover-B-2.csv", BAD),
            ("Discover-C-3.csv", GOOD),
        ]);
        let config = Config::new(inputs.clone()).output_dir(dir.path());

        let report = run(&config);

        assert!(!report.is_success());
        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, inputs[1]);
        assert!(matches!(report.failures[0].1, ConvertError::Record { row: 1, .. }));
        assert!(report.skipped.is_empty());

        assert!(output(dir.path(), "Discover-A-1.csv").exists());
        assert!(!output(dir.path(), "Discover-B-2.csv").exists());
        assert!(output(dir.path(), "Discover-C-3.csv").exists());
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let (dir, inputs) = setup(&[
            ("Discover-A-1.csv", GOOD),
            ("Discover-B-2.csv", BAD),
            ("Discover-C-3.csv", GOOD),
        ]);
        let config = Config::new(inputs.clone())
            .output_dir(dir.path())
            .policy(FailurePolicy::FailFast);

        let report = run(&config);

        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.skipped, vec![inputs[2].clone()]);
        assert!(!output(dir.path(), "Discover-C-3.csv").exists());
    }

    #[test]
    fn test_missing_explicit_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(vec![dir.path().join("Discover-X-1.csv")]).output_dir(dir.path());

        let report = run(&config);

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0].1, ConvertError::ReadInput { .. }));
    }
}
