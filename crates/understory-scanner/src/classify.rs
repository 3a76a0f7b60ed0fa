//! Content classification: MIME sniffing, language tagging, LOC counting

use std::path::Path;

use understory_core::{FileRecord, Language, TOO_SHORT_SUMMARY};

/// How many leading bytes are sniffed for the text/binary decision.
const SNIFF_LEN: usize = 8192;

/// Files with this many lines or fewer get the "too short" sentinel.
const SHORT_FILE_LINES: usize = 3;

/// Only files above this LOC threshold are summarized.
const SUMMARY_LOC_THRESHOLD: u32 = 5;

/// Line prefixes treated as comment leaders when counting LOC.
///
/// A shared, naive set across languages. Block comments are undercounted
/// only on their leading line; downstream eligibility thresholds depend on
/// exactly this behavior.
const COMMENT_LEADERS: &[&str] = &["#", "//", "/*", "*", "*/"];

/// A classified file: the record plus, for summarization-eligible files,
/// the text content to feed the chunker.
#[derive(Debug)]
pub struct Classified {
    pub record: FileRecord,
    pub content: Option<String>,
}

impl Classified {
    fn record_only(record: FileRecord) -> Self {
        Self {
            record,
            content: None,
        }
    }
}

/// Sniff a MIME type string from content plus extension.
///
/// A NUL byte in the head marks the file binary. Otherwise the extension
/// supplies the type string when it maps to a textual media type, with
/// `text/plain` as the fallback — source files with exotic extensions
/// still sniff as text, the way a libmagic-style scan would report them.
pub fn sniff_mime(path: &Path, head: &[u8]) -> String {
    if head.contains(&0) {
        return "application/octet-stream".to_string();
    }
    match mime_guess::from_path(path).first_raw() {
        Some(m) if is_text_mime(m) => m.to_string(),
        _ => "text/plain".to_string(),
    }
}

fn is_text_mime(mime: &str) -> bool {
    mime.starts_with("text/") || mime == "application/json" || mime == "application/xml"
}

/// Count lines of code: non-blank lines that do not start with a comment
/// leader.
pub fn count_loc(content: &str) -> u32 {
    content
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !COMMENT_LEADERS
                    .iter()
                    .any(|leader| trimmed.starts_with(leader))
        })
        .count() as u32
}

/// Classify one candidate file under `root`.
///
/// Produces a [`FileRecord`] for every path; per-file I/O failures land in
/// the record's `error` field rather than aborting the batch. The returned
/// content is present only when the file is eligible for summarization
/// (text, more than three lines, LOC above the threshold).
pub fn classify(root: &Path, rel_path: &Path) -> Classified {
    let abs = root.join(rel_path);

    let size = match std::fs::metadata(&abs) {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::warn!("cannot stat {}: {}", rel_path.display(), e);
            return Classified::record_only(FileRecord::failed(
                rel_path.to_path_buf(),
                e.to_string(),
            ));
        }
    };

    let bytes = match std::fs::read(&abs) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("cannot read {}: {}", rel_path.display(), e);
            return Classified::record_only(FileRecord::failed(
                rel_path.to_path_buf(),
                e.to_string(),
            ));
        }
    };

    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let mime = sniff_mime(rel_path, head);
    let is_text = is_text_mime(&mime);

    let mut record = FileRecord::classified(rel_path.to_path_buf(), size, mime, is_text);
    // Suffix-based, independent of the MIME decision.
    record.language = Some(Language::from_path(rel_path));

    if !is_text {
        return Classified::record_only(record);
    }

    let content = String::from_utf8_lossy(&bytes).into_owned();
    let line_count = content.split('\n').count();

    if line_count <= SHORT_FILE_LINES {
        record.set_summary(TOO_SHORT_SUMMARY.to_string());
        return Classified::record_only(record);
    }

    let loc = count_loc(&content);
    record.loc = Some(loc);

    if loc > SUMMARY_LOC_THRESHOLD {
        Classified {
            record,
            content: Some(content),
        }
    } else {
        // LOC in (3, 5]: recorded, but no summary of any kind.
        Classified::record_only(record)
    }
}
