//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use bhasha_bulk::UrlCheckReport;
use bhasha_correct::LanguageDetection;
use bhasha_domain::{
    BulkCheckResult, BulkDetails, BulkStatus, CorrectionResult, ExtractedDocument,
};
use bhasha_policy::{FactCheckReport, PolicyReport};
use colored::*;
use tabled::{builder::Builder, settings::Style};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    fn green(&self, s: &str) -> String {
        if self.color_enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color_enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    fn red(&self, s: &str) -> String {
        if self.color_enabled {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.color_enabled {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// Format a correction result.
    pub fn correction(&self, result: &CorrectionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Text => {
                let mut out = String::new();
                out.push_str(&result.corrected_text);
                out.push('\n');
                if result.corrections.is_empty() {
                    out.push_str(&self.green("No errors found."));
                } else {
                    out.push_str(&self.bold(&format!(
                        "{} correction(s):",
                        result.corrections.len()
                    )));
                    for item in &result.corrections {
                        out.push_str(&format!(
                            "\n  {} -> {}  ({})",
                            self.red(&item.original),
                            self.green(&item.corrected),
                            item.description
                        ));
                    }
                }
                Ok(out)
            }
        }
    }

    /// Format a language-detection outcome.
    pub fn detection(&self, detection: &LanguageDetection) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "detectedLanguage": detection.language,
                "isConfident": detection.confident,
            }))?),
            OutputFormat::Text => Ok(format!(
                "{} (confident: {})",
                self.bold(detection.language.display_name()),
                detection.confident
            )),
        }
    }

    /// Format translated or summarized text.
    pub fn text(&self, label: &str, content: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ label: content }),
            )?),
            OutputFormat::Text => Ok(content.to_string()),
        }
    }

    /// Format an extracted document.
    pub fn document(&self, document: &ExtractedDocument) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "sourceUrl": document.source_url,
                "text": document.text,
            }))?),
            OutputFormat::Text => Ok(document.text.clone()),
        }
    }

    /// Format a single-URL check report.
    pub fn url_check(&self, report: &UrlCheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "url": report.url,
                "detectedLanguage": report.detection.language,
                "isConfident": report.detection.confident,
                "correctedText": report.result.corrected_text,
                "corrections": report.result.corrections,
                "englishErrors": report.english_errors,
            }))?),
            OutputFormat::Text => {
                let mut out = format!(
                    "Detected language: {} (confident: {})\n",
                    self.bold(report.detection.language.display_name()),
                    report.detection.confident
                );
                out.push_str(&self.correction(&report.result)?);
                if !report.english_errors.is_empty() {
                    out.push_str(&self.bold(&format!(
                        "\n{} English spelling error(s):",
                        report.english_errors.len()
                    )));
                    for error in &report.english_errors {
                        out.push_str(&format!(
                            "\n  {} -> {}",
                            self.red(&error.word),
                            self.green(&error.suggestion)
                        ));
                    }
                }
                Ok(out)
            }
        }
    }

    /// Format bulk-check results as a table.
    pub fn bulk(&self, results: &[BulkCheckResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
            OutputFormat::Text => {
                let mut builder = Builder::default();
                builder.push_record(["URL", "Status", "Details"]);
                for result in results {
                    builder.push_record([
                        result.url.clone(),
                        self.status(result.status),
                        details_cell(&result.details),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::sharp());
                Ok(table.to_string())
            }
        }
    }

    fn status(&self, status: BulkStatus) -> String {
        let label = status.as_str();
        match status {
            BulkStatus::Ok => self.green(label),
            BulkStatus::ErrorsFound => self.yellow(label),
            BulkStatus::FetchError => self.red(label),
        }
    }

    /// Format a policy report.
    pub fn policy(&self, report: &PolicyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => {
                if let Some(message) = &report.no_violation_message {
                    return Ok(self.green(message));
                }
                let mut out = String::new();
                if !report.violations.is_empty() {
                    out.push_str(&self.bold(&format!(
                        "{} violation(s):",
                        report.violations.len()
                    )));
                    for v in &report.violations {
                        out.push_str(&format!(
                            "\n  [{}] \"{}\"\n    {}\n    Suggestion: {}",
                            self.red(&v.policy_category),
                            v.content,
                            v.explanation,
                            v.suggestion
                        ));
                    }
                }
                for concern in &report.visual_concerns {
                    out.push_str(&format!("\n  {} {}", self.yellow("Visual:"), concern));
                }
                Ok(out)
            }
        }
    }

    /// Format a fact-check report.
    pub fn fact(&self, report: &FactCheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => {
                let verdict = format!("{:?}", report.verdict).to_lowercase();
                let verdict = match report.verdict {
                    bhasha_policy::Verdict::Accurate => self.green(&verdict),
                    bhasha_policy::Verdict::Unverifiable => self.yellow(&verdict),
                    _ => self.red(&verdict),
                };
                let mut out = format!(
                    "Verdict: {} (confidence: {:?})\n{}",
                    verdict, report.confidence, report.explanation
                );
                if !report.sources.is_empty() {
                    out.push_str(&self.bold("\nSources:"));
                    for source in &report.sources {
                        out.push_str(&format!("\n  {} <{}>", source.title, source.link));
                    }
                }
                Ok(out)
            }
        }
    }
}

fn details_cell(details: &BulkDetails) -> String {
    match details {
        BulkDetails::Message(message) => message.clone(),
        BulkDetails::Corrections(items) => items
            .iter()
            .map(|item| format!("{} -> {}", item.original, item.corrected))
            .collect::<Vec<_>>()
            .join("; "),
    }
}
