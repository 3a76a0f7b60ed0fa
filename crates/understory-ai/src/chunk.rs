//! Comment stripping and token-bounded chunking

use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("static pattern"));
static HASH_COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)#.*$").expect("static pattern"));
static SLASH_COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("static pattern"));
static BLOCK_COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("static pattern"));

/// Per-word token count estimate for the summarization backend.
///
/// Words are encoded in isolation, so cross-word merges are ignored; the
/// estimate is an approximation by design, and chunk boundaries depend on
/// it being applied consistently.
pub trait TokenEstimate: Send + Sync {
    fn estimate(&self, word: &str) -> usize;
}

/// Default estimator: roughly four characters per token, minimum one.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTokens;

impl TokenEstimate for HeuristicTokens {
    fn estimate(&self, word: &str) -> usize {
        word.len().div_ceil(4).max(1)
    }
}

/// Strip comments and squeeze whitespace before chunking.
///
/// Collapses runs of blank lines, removes `#` and `//` line comments and
/// `/* ... */` block comments, then drops lines left empty. The comment
/// patterns are shared across languages, string literals included; the
/// chunker tolerates the resulting noise.
pub fn preprocess(code: &str) -> String {
    let code = BLANK_RUNS.replace_all(code, "\n");
    let code = HASH_COMMENTS.replace_all(&code, "");
    let code = SLASH_COMMENTS.replace_all(&code, "");
    let code = BLOCK_COMMENTS.replace_all(&code, "");
    code.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text into chunks that fit the backend's input budget.
///
/// Greedy word-by-word packing: walk whitespace-delimited words in order
/// and close the current chunk the moment the next word would exceed
/// `max_tokens`. Chunks are never reordered and words are never split, so
/// concatenating the chunks' words reproduces the input word sequence.
pub fn chunk(text: &str, max_tokens: usize, estimator: &dyn TokenEstimate) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_tokens = 0usize;

    for word in text.split_whitespace() {
        let word_tokens = estimator.estimate(word);
        if current_tokens + word_tokens > max_tokens && !current.is_empty() {
            chunks.push(current.join(" "));
            current = vec![word];
            current_tokens = word_tokens;
        } else {
            current.push(word);
            current_tokens += word_tokens;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
