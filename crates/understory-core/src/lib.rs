//! Understory Core — analysis records, sentinel strings, and the result cache

pub mod cache;
pub mod model;


pub use cache::{CacheError, ResultCache, fingerprint};
pub use model::{
    AnalysisResult, EMPTY_FILE_SUMMARY, ERROR_SUMMARY, FileRecord, Language, NO_VALID_FILES_NOTICE,
    RepositorySummary, SINGLE_LINE_SUMMARY, TOO_SHORT_SUMMARY, is_sentinel_summary,
};
