//! Colored terminal report sink with an optional plain-text log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use crate::compare::{ComparisonResult, DiffTag};
use crate::error::CompareError;
use crate::ports::ReportSink;

/// Prints to stdout with ANSI colors and appends plain-text blocks to
/// the configured log file.
pub struct ConsoleReport {
    log_path: Option<PathBuf>,
}

impl ConsoleReport {
    /// Builds a sink that appends to `log_path` when one is given.
    #[must_use]
    pub fn new(log_path: Option<PathBuf>) -> Self {
        Self { log_path }
    }
}

impl ReportSink for ConsoleReport {
    fn banner(&self, text: &str) {
        println!("{text}");
    }

    fn heading(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn info(&self, message: &str) {
        println!("{}", message.blue());
    }

    fn warn(&self, message: &str) {
        println!("{}", message.red());
    }

    fn emit(&self, result: &ComparisonResult) {
        println!("{}", result.headline().blue());
        if let Some(signature) = &result.signature {
            println!("{}", format!("  {signature}").blue());
        }
        for entry in &result.entries {
            let rendered = format!("{}: {} {}", entry.line, entry.tag.marker(), entry.text);
            match entry.tag {
                DiffTag::Removed => println!("{}", rendered.red()),
                DiffTag::Added => println!("{}", rendered.green()),
                DiffTag::Unchanged => println!("{rendered}"),
            }
        }
    }

    fn log(&self, result: &ComparisonResult) -> Result<(), CompareError> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };
        // Opened and closed per call; there is no persistent handle.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CompareError::Io { path: path.clone(), source })?;
        writeln!(file, "{}\n", result.render_plain())
            .map_err(|source| CompareError::Io { path: path.clone(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::ConsoleReport;
    use crate::compare::{ComparisonResult, DiffEntry, DiffTag, SearchMode};
    use crate::ports::ReportSink;
    use std::path::PathBuf;

    fn sample_result() -> ComparisonResult {
        ComparisonResult {
            file: PathBuf::from("com/app/Billing.smali"),
            keyword: "isPro".to_string(),
            mode: SearchMode::MethodName,
            signature: Some(".method public isPro()Z".to_string()),
            entries: vec![DiffEntry {
                tag: DiffTag::Added,
                line: 5,
                text: "const/4 v0, 0x1".to_string(),
            }],
        }
    }

    #[test]
    fn log_appends_one_block_per_result() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("differences.txt");
        let report = ConsoleReport::new(Some(log_path.clone()));

        report.log(&sample_result()).unwrap();
        report.log(&sample_result()).unwrap();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(contents.matches("inside method 'isPro'").count(), 2);
        assert!(contents.contains("5: + const/4 v0, 0x1"));
    }

    #[test]
    fn log_without_a_path_is_a_no_op() {
        let report = ConsoleReport::new(None);
        assert!(report.log(&sample_result()).is_ok());
    }
}
