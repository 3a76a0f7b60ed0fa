//! Pipeline orchestration: cache, acquisition, scanning, summarization

pub mod config;
pub mod orchestrator;
pub mod progress;


pub use config::PipelineConfig;
pub use orchestrator::{Pipeline, PipelineError};
pub use progress::{NoProgress, Progress, Stage};
