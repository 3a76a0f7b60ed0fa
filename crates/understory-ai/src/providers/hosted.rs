//! Hosted chat-completion backend

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::summarize::{OutputBounds, Summarize};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str =
    "You are a code documentation expert. Provide concise, factual summaries of source code.";

pub struct HostedProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl HostedProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key
                .unwrap_or_else(|| std::env::var("UNDERSTORY_API_KEY").unwrap_or_default()),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait::async_trait]
impl Summarize for HostedProvider {
    async fn summarize(&self, text: &str, bounds: OutputBounds) -> Result<String> {
        let prompt = format!(
            r#"Analyze and summarize the following code. Focus on:
1. Main functionality
2. Key components/classes
3. Important methods/functions
4. Overall purpose

Code:
{text}

Provide a summary between {} and {} tokens long."#,
            bounds.min_tokens, bounds.max_tokens
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.1,
            max_tokens: bounds.max_tokens,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to summarization backend")?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Summarization API error: {}", error_text);
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .context("Summarization response had no choices")?;

        Ok(content)
    }

    fn name(&self) -> &str {
        "Hosted"
    }
}
