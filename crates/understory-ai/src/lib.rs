//! Summarization layer for Understory
//!
//! This crate owns everything between raw file text and summary strings:
//! comment-stripping preprocessing, token-bounded chunking, the provider
//! seam for the summarization backend, and composition of per-file
//! summaries into the repository-level narrative.

pub mod chunk;
pub mod compose;
pub mod providers;
pub mod summarize;


pub use chunk::{HeuristicTokens, TokenEstimate, chunk, preprocess};
pub use compose::{compose_repository, format_as_html};
pub use providers::create_provider;
pub use summarize::{OutputBounds, Summarize, summarize_file};
