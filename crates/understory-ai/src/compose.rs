//! Repository-level summary composition and HTML formatting

use understory_core::{FileRecord, NO_VALID_FILES_NOTICE, RepositorySummary, is_sentinel_summary};

use crate::summarize::{OutputBounds, Summarize};

/// Substrings given `<strong>` emphasis in the final narrative.
const EMPHASIZED_TERMS: &[&str] = &[
    "Project",
    "Features",
    "Technologies",
    "Architecture",
    "Components",
];

/// Roll per-file summaries up into the repository narrative.
///
/// Collects every non-error, non-empty, non-sentinel file summary in
/// record order and feeds the joined text through exactly one
/// summarization call with the long output bound. With nothing usable the
/// fixed notice is returned verbatim, without contacting the backend.
pub async fn compose_repository(
    provider: &dyn Summarize,
    records: &[FileRecord],
    bounds: OutputBounds,
) -> RepositorySummary {
    let usable: Vec<&str> = records
        .iter()
        .filter(|r| r.error.is_none())
        .filter_map(|r| r.summary.as_deref())
        .filter(|s| !s.is_empty() && !is_sentinel_summary(s))
        .collect();

    if usable.is_empty() {
        return RepositorySummary {
            html: NO_VALID_FILES_NOTICE.to_string(),
            contributing_files: 0,
        };
    }

    let combined = usable.join("\n\n");
    tracing::info!(
        "generating repository summary from {} file summaries",
        usable.len()
    );

    let narrative = match provider.summarize(&combined, bounds).await {
        Ok(narrative) => narrative,
        Err(e) => {
            tracing::warn!("repository summarization failed: {}", e);
            return RepositorySummary {
                html: format!("<p>Error generating repository summary: {e}</p>"),
                contributing_files: 0,
            };
        }
    };

    RepositorySummary {
        html: format_as_html(&narrative),
        contributing_files: usable.len(),
    }
}

/// Shape the narrative into display-ready structure.
///
/// The first paragraph becomes the heading; later paragraphs become body
/// text with fixed keyword emphasis applied wherever the terms appear as
/// literal substrings.
pub fn format_as_html(text: &str) -> String {
    let mut formatted = Vec::new();
    for (i, paragraph) in text.split("\n\n").enumerate() {
        if i == 0 {
            formatted.push(format!("<h1>{paragraph}</h1>"));
        } else {
            let mut body = paragraph.to_string();
            for term in EMPHASIZED_TERMS {
                body = body.replace(term, &format!("<strong>{term}</strong>"));
            }
            formatted.push(format!("<p>{body}</p>"));
        }
    }

    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px;">
    <style>
        h1 {{ color: #2c3e50; margin-bottom: 20px; }}
        p {{ color: #34495e; margin-bottom: 15px; }}
        strong {{ color: #2980b9; }}
    </style>
    {}
</div>"#,
        formatted.join("")
    )
}
