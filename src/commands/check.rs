use crate::cli::ReportFormat;
use crate::error::{ConfigLspError, Result};
use crate::validation::{Finding, Severity, validate_text};
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Findings for one file on disk
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }
}

/// Validate a single file
pub fn check_file(path: &Path) -> Result<FileReport> {
    let content = fs::read_to_string(path).map_err(|e| {
        ConfigLspError::DocumentLoadError(format!("{}: {}", path.display(), e))
    })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        findings: validate_text(&content),
    })
}

/// Validate files and print a report. Returns `true` when any error was found.
pub fn execute_check(files: &[PathBuf], format: ReportFormat) -> Result<bool> {
    let reports = files
        .iter()
        .map(|path| check_file(path))
        .collect::<Result<Vec<_>>>()?;

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        ReportFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
        ReportFormat::Text => print_text(&reports),
    }

    Ok(reports.iter().any(FileReport::has_errors))
}

fn print_text(reports: &[FileReport]) {
    let mut errors = 0;
    let mut warnings = 0;

    for report in reports {
        if report.findings.is_empty() {
            println!("{} {}", "✓".green(), report.path.display());
            continue;
        }

        for finding in &report.findings {
            let severity = match finding.severity {
                Severity::Error => {
                    errors += 1;
                    finding.severity.to_string().red().bold()
                }
                Severity::Warning => {
                    warnings += 1;
                    finding.severity.to_string().yellow()
                }
            };
            println!(
                "{}:{}: {}: {}",
                report.path.display(),
                finding.line + 1,
                severity,
                finding.message
            );
        }
    }

    println!();
    let summary = format!(
        "{} file(s) checked, {} error(s), {} warning(s)",
        reports.len(),
        errors,
        warnings
    );
    if errors > 0 {
        println!("{}", summary.red().bold());
    } else {
        println!("{}", summary.green().bold());
    }
}
