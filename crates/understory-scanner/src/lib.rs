//! File enumeration, skip policy, and content classification

pub mod classify;
pub mod walk;


pub use classify::{Classified, classify, count_loc, sniff_mime};
pub use walk::{MAX_FILE_SIZE, ScanError, enumerate, should_skip};
