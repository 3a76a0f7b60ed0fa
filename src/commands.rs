//! CLI command implementations

use std::path::PathBuf;

use understory_acquire::GitAcquirer;
use understory_ai::create_provider;
use understory_core::{AnalysisResult, ResultCache};
use understory_pipeline::{Pipeline, PipelineConfig, Progress, Stage};

/// Progress observer that logs milestone percentages.
struct LogProgress;

impl Progress for LogProgress {
    fn milestone(&self, stage: Stage, percent: u8) {
        let label = match stage {
            Stage::Acquired => "repository acquired",
            Stage::Scanned => "scan complete",
            Stage::Analyzed => "analysis complete",
            Stage::Complete => "done",
        };
        tracing::info!("[{percent:>3}%] {label}");
    }
}

pub async fn analyze(
    url: &str,
    provider_name: &str,
    api_key: Option<String>,
    cache_dir: PathBuf,
) -> anyhow::Result<()> {
    let provider = create_provider(provider_name, api_key)?;
    let pipeline = Pipeline::new(PipelineConfig::new(cache_dir), GitAcquirer::new(), provider);

    let result = pipeline.analyze(url, &LogProgress).await?;
    print_result(&result);
    Ok(())
}

pub fn clear(cache_dir: PathBuf) -> anyhow::Result<()> {
    tracing::info!("clearing cache at {}", cache_dir.display());
    ResultCache::new(cache_dir).clear()?;
    tracing::info!("cache cleared");
    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("\nAnalyzed {} files", result.total_files);
    println!("\nRepository Analysis Results:");
    println!("{}", "=".repeat(80));

    for record in &result.records {
        println!("\nFile: {}", record.path.display());
        println!("Type: {}", record.mime);
        println!("Size: {} bytes", record.size);

        if let Some(language) = record.language {
            println!("Language: {language}");
        }
        if let Some(loc) = record.loc {
            println!("Lines of Code: {loc}");
        }
        if let Some(summary) = &record.summary {
            println!("\nSummary:");
            println!("{}", "-".repeat(40));
            println!("{summary}");
            println!("{}", "-".repeat(40));
        }
        if let Some(error) = &record.error {
            println!("Error: {error}");
        }
    }

    println!("\nOverall Repository Summary:");
    println!("{}", "=".repeat(80));
    println!("{}", result.repository.html);
}
