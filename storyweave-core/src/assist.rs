//! AI writing assistance for the story editor.
//!
//! Three text-in/text-out operations backed by the Gemini API: title
//! suggestion, grammar correction, and prose enhancement. Service failures
//! are logged and replaced with safe fallbacks; no raw API error ever
//! reaches the caller.

use gemini::Gemini;
use thiserror::Error;
use tracing::{debug, warn};

/// Fallback title when generation fails.
pub const FALLBACK_TITLE: &str = "Untitled Story";

/// Title shown when no API key is configured at all.
pub const UNAVAILABLE_TITLE: &str = "AI Unavailable (Check API Key)";

/// Errors from the assist subsystem.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Gemini API error: {0}")]
    Api(#[from] gemini::Error),

    #[error("No API key configured")]
    NoApiKey,
}

/// The three assist operations the editor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOp {
    /// Suggest a title from the story content. Applies to the title field.
    Title,
    /// Correct grammar and spelling. Applies to the content field.
    Grammar,
    /// Enhance prose while keeping the plot. Applies to the content field.
    Enhance,
}

impl AssistOp {
    pub fn name(&self) -> &'static str {
        match self {
            AssistOp::Title => "title",
            AssistOp::Grammar => "grammar",
            AssistOp::Enhance => "enhance",
        }
    }
}

/// Configuration for the writing assistant.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Model override; `None` uses the client default.
    pub model: Option<String>,

    /// How many characters of the story feed the title prompt.
    pub title_prefix_chars: usize,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            model: None,
            title_prefix_chars: 500,
        }
    }
}

/// The AI writing assistant.
pub struct WritingAssistant {
    client: Option<Gemini>,
    config: AssistConfig,
}

impl WritingAssistant {
    /// Create an assistant backed by the given client.
    pub fn new(client: Gemini) -> Self {
        Self {
            client: Some(client),
            config: AssistConfig::default(),
        }
    }

    /// Create an assistant from the GEMINI_API_KEY environment variable.
    ///
    /// A missing key does not fail construction: the assistant comes up
    /// unconfigured and every operation returns its fallback.
    pub fn from_env() -> Self {
        let client = match Gemini::from_env() {
            Ok(client) => Some(client),
            Err(_) => {
                warn!("GEMINI_API_KEY not set; AI assistance disabled");
                None
            }
        };
        Self {
            client,
            config: AssistConfig::default(),
        }
    }

    /// Create an assistant with no client. Every operation falls back.
    pub fn unconfigured() -> Self {
        Self {
            client: None,
            config: AssistConfig::default(),
        }
    }

    /// Configure the assistant.
    pub fn with_config(mut self, config: AssistConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether a client is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Suggest a short, catchy title for the story content.
    pub async fn suggest_title(&self, content: &str) -> String {
        if self.client.is_none() {
            return UNAVAILABLE_TITLE.to_string();
        }
        match self.try_run(AssistOp::Title, content).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "title suggestion failed");
                FALLBACK_TITLE.to_string()
            }
        }
    }

    /// Correct grammar and spelling, keeping tone and style.
    pub async fn correct_grammar(&self, content: &str) -> String {
        self.run_or_passthrough(AssistOp::Grammar, content).await
    }

    /// Enhance the prose to be more descriptive and engaging.
    pub async fn enhance(&self, content: &str) -> String {
        self.run_or_passthrough(AssistOp::Enhance, content).await
    }

    /// Run any assist operation with its fallback policy applied.
    pub async fn run(&self, op: AssistOp, text: &str) -> String {
        match op {
            AssistOp::Title => self.suggest_title(text).await,
            AssistOp::Grammar => self.correct_grammar(text).await,
            AssistOp::Enhance => self.enhance(text).await,
        }
    }

    /// Run an operation without the fallback policy, surfacing the error.
    pub async fn try_run(&self, op: AssistOp, text: &str) -> Result<String, AssistError> {
        let client = self.client.as_ref().ok_or(AssistError::NoApiKey)?;
        let prompt = self.build_prompt(op, text);
        debug!(op = op.name(), chars = text.chars().count(), "assist request");

        let mut request = gemini::Request::new(prompt);
        if let Some(model) = &self.config.model {
            request = request.with_model(model.clone());
        }

        let response = client.complete(request).await?;
        if response.text.is_empty() {
            return Err(AssistError::Api(gemini::Error::Empty));
        }
        Ok(response.text)
    }

    async fn run_or_passthrough(&self, op: AssistOp, content: &str) -> String {
        if self.client.is_none() {
            return content.to_string();
        }
        match self.try_run(op, content).await {
            Ok(text) => text,
            Err(error) => {
                warn!(op = op.name(), %error, "assist request failed");
                content.to_string()
            }
        }
    }

    fn build_prompt(&self, op: AssistOp, text: &str) -> String {
        match op {
            AssistOp::Title => {
                let snippet = char_prefix(text, self.config.title_prefix_chars);
                format!(
                    "Read the following story snippet and generate a short, catchy, \
                     creative title for it. Do not use quotes.\n\nStory: {snippet}..."
                )
            }
            AssistOp::Grammar => format!(
                "You are a professional editor. Correct the grammar and spelling of \
                 the following text. Maintain the original tone and style. Return \
                 ONLY the corrected text.\n\nText: {text}"
            ),
            AssistOp::Enhance => format!(
                "You are a creative writing assistant. Enhance the following story \
                 segment to be more descriptive, engaging, and emotional. Keep the \
                 core plot the same. Return ONLY the enhanced text.\n\nText: {text}"
            ),
        }
    }
}

/// First `n` characters of `text`, respecting char boundaries.
fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
