//! Core data structures for the analysis pipeline

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Summary substituted for files with three or fewer lines.
pub const TOO_SHORT_SUMMARY: &str = "File too short - skipping summary";

/// Summary substituted for files whose content is entirely whitespace.
pub const EMPTY_FILE_SUMMARY: &str = "Empty file";

/// Summary substituted when comment stripping leaves a single line.
pub const SINGLE_LINE_SUMMARY: &str = "Single line file - skipping summary";

/// Summary substituted when the summarization backend fails.
pub const ERROR_SUMMARY: &str = "Error generating summary";

/// Repository-level notice emitted when no file produced a usable summary.
pub const NO_VALID_FILES_NOTICE: &str = "<p>No valid code files found to summarize.</p>";

/// True for any fixed sentinel that stands in for model output.
///
/// Sentinel summaries are excluded from repository-level aggregation.
pub fn is_sentinel_summary(summary: &str) -> bool {
    matches!(
        summary,
        TOO_SHORT_SUMMARY | EMPTY_FILE_SUMMARY | SINGLE_LINE_SUMMARY | ERROR_SUMMARY
    )
}

/// Display language tag, detected from the file suffix only.
///
/// Detection is deliberately independent of the MIME text/non-text
/// decision; an unknown suffix maps to [`Language::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    #[serde(rename = "C++")]
    Cpp,
    C,
    Go,
    Ruby,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    Markdown,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "XML")]
    Xml,
    #[serde(rename = "YAML")]
    Yaml,
    Unknown,
}

impl Language {
    /// Detect language from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("py") => Language::Python,
            Some("js") | Some("jsx") => Language::JavaScript,
            Some("ts") | Some("tsx") => Language::TypeScript,
            Some("java") => Language::Java,
            Some("cpp") | Some("cc") | Some("cxx") => Language::Cpp,
            Some("c") => Language::C,
            Some("go") => Language::Go,
            Some("rb") => Language::Ruby,
            Some("html") | Some("htm") => Language::Html,
            Some("css") => Language::Css,
            Some("md") => Language::Markdown,
            Some("json") => Language::Json,
            Some("xml") => Language::Xml,
            Some("yaml") | Some("yml") => Language::Yaml,
            _ => Language::Unknown,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Markdown => "Markdown",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Yaml => "YAML",
            Language::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// One analyzed file.
///
/// Invariant: `summary` and `error` are mutually exclusive. A record with
/// neither describes a file that was classified but not summarized (binary,
/// or lines-of-code at or below the eligibility threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the repository root.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Detected MIME type string.
    #[serde(rename = "type")]
    pub mime: String,
    /// Whether the content sniffed as a textual media type.
    pub is_text: bool,
    /// Extension-derived language tag.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<Language>,
    /// Non-blank, non-comment-leading line count.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub loc: Option<u32>,
    /// Model-derived summary, or a sentinel string.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<String>,
    /// Per-file failure message; never set together with `summary`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl FileRecord {
    /// A freshly classified record with no terminal state yet.
    pub fn classified(path: PathBuf, size: u64, mime: String, is_text: bool) -> Self {
        Self {
            path,
            size,
            mime,
            is_text,
            language: None,
            loc: None,
            summary: None,
            error: None,
        }
    }

    /// A record for a file whose processing failed.
    pub fn failed(path: PathBuf, error: String) -> Self {
        Self {
            path,
            size: 0,
            mime: String::new(),
            is_text: false,
            language: None,
            loc: None,
            summary: None,
            error: Some(error),
        }
    }

    /// Set the summary, clearing any error to preserve exclusivity.
    pub fn set_summary(&mut self, summary: String) {
        self.error = None;
        self.summary = Some(summary);
    }

    /// Set the error, clearing any summary to preserve exclusivity.
    pub fn set_error(&mut self, error: String) {
        self.summary = None;
        self.error = Some(error);
    }
}

/// Synthetic record holding the final aggregated repository narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Display-ready HTML narrative.
    pub html: String,
    /// How many per-file summaries contributed to the narrative.
    pub contributing_files: usize,
}

/// The complete output of one analysis run. Unit of caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-file records, in enumeration order.
    pub records: Vec<FileRecord>,
    /// Rolled-up repository summary.
    pub repository: RepositorySummary,
    /// Total number of files analyzed.
    pub total_files: usize,
}
