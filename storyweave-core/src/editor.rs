//! The write-screen editing session.
//!
//! Holds the in-progress draft and coordinates AI assistance: one assist
//! call may be in flight at a time, and a result only applies if its
//! target field was not edited while the call was outstanding. A stale
//! result is discarded rather than overwriting the user's edits.

use crate::assist::{AssistOp, WritingAssistant};
use crate::catalog::Category;
use crate::store::StoryDraft;

const DEFAULT_AUTHOR: &str = "Anonymous Writer";

/// An outstanding assist request. Produced by [`EditorSession::begin`],
/// consumed by [`EditorSession::finish`].
#[derive(Debug)]
pub struct AssistJob {
    pub op: AssistOp,
    /// The content snapshot the request was made with.
    pub input: String,
    /// Revision of the target field at request time.
    revision: u64,
}

/// Editing state for one story draft.
#[derive(Debug)]
pub struct EditorSession {
    title: String,
    category: Category,
    content: String,
    author: String,
    cover_image: Option<String>,
    busy: bool,
    title_revision: u64,
    content_revision: u64,
    discarded_results: u32,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            category: Category::RealLife,
            content: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            cover_image: None,
            busy: false,
            title_revision: 0,
            content_revision: 0,
            discarded_results: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    /// Whether an assist call is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// How many assist results arrived too late to apply.
    pub fn discarded_results(&self) -> u32 {
        self.discarded_results
    }

    // ========================================================================
    // Draft edits
    // ========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_revision += 1;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.content_revision += 1;
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_cover_image(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.cover_image = if url.is_empty() { None } else { Some(url) };
    }

    pub fn clear_cover_image(&mut self) {
        self.cover_image = None;
    }

    /// Pick a random placeholder cover.
    pub fn random_cover(&mut self) {
        let seed: u32 = rand::random();
        self.cover_image = Some(format!("https://picsum.photos/seed/{seed}/800/400"));
    }

    // ========================================================================
    // Assist flow
    // ========================================================================

    /// Start an assist request. Returns `None` while another request is in
    /// flight, or when there is no content to work with.
    pub fn begin(&mut self, op: AssistOp) -> Option<AssistJob> {
        if self.busy || self.content.is_empty() {
            return None;
        }
        self.busy = true;
        let revision = match op {
            AssistOp::Title => self.title_revision,
            AssistOp::Grammar | AssistOp::Enhance => self.content_revision,
        };
        Some(AssistJob {
            op,
            input: self.content.clone(),
            revision,
        })
    }

    /// Complete an assist request with the service's (or fallback) text.
    ///
    /// The result applies only if the target field is unchanged since
    /// [`EditorSession::begin`]; otherwise it is discarded. Returns whether
    /// the result was applied.
    pub fn finish(&mut self, job: AssistJob, text: String) -> bool {
        self.busy = false;
        let current = match job.op {
            AssistOp::Title => self.title_revision,
            AssistOp::Grammar | AssistOp::Enhance => self.content_revision,
        };
        if current != job.revision {
            self.discarded_results += 1;
            return false;
        }
        match job.op {
            AssistOp::Title => self.title = text,
            AssistOp::Grammar | AssistOp::Enhance => self.content = text,
        }
        true
    }

    /// Run one assist operation end to end.
    ///
    /// Holding the session across the await means no edit can interleave;
    /// UIs that accept edits while a request is outstanding should use the
    /// [`EditorSession::begin`]/[`EditorSession::finish`] pair instead.
    pub async fn assist(&mut self, assistant: &WritingAssistant, op: AssistOp) -> bool {
        let Some(job) = self.begin(op) else {
            return false;
        };
        let text = assistant.run(job.op, &job.input).await;
        self.finish(job, text)
    }

    /// The draft as it stands, ready for publishing.
    pub fn to_draft(&self) -> StoryDraft {
        StoryDraft {
            title: self.title.clone(),
            category: self.category,
            content: self.content.clone(),
            author: self.author.clone(),
            cover_image: self.cover_image.clone(),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
