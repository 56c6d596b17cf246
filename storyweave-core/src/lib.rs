//! Story-sharing platform core with an AI writing assistant.
//!
//! This crate provides:
//! - The in-memory content store: stories, reactions, comments, profiles
//! - A screen-level view controller with selection state and intents
//! - An editor session with single-flight AI assistance
//! - Gemini-backed title/grammar/enhance operations with safe fallbacks
//!
//! # Quick Start
//!
//! ```ignore
//! use storyweave_core::{
//!     AssistOp, Category, ContentStore, EditorSession, ViewController,
//!     WritingAssistant,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut view = ViewController::new(ContentStore::seeded());
//!     let assistant = WritingAssistant::from_env();
//!
//!     view.start_writing();
//!     let mut editor = EditorSession::new();
//!     editor.set_content("In the heart of the old city...");
//!     editor.assist(&assistant, AssistOp::Title).await;
//!     editor.set_category(Category::Fantasy);
//!
//!     let id = view.submit_story(editor.to_draft());
//!     println!("published {id}");
//! }
//! ```

pub mod assist;
pub mod catalog;
pub mod editor;
pub mod seed;
pub mod store;
pub mod testing;
pub mod view;

// Primary public API
pub use assist::{
    AssistConfig, AssistError, AssistOp, WritingAssistant, FALLBACK_TITLE, UNAVAILABLE_TITLE,
};
pub use catalog::{
    Author, AuthorId, Badge, BadgeId, Category, CategoryFilter, Comment, CommentId, ProfileUpdate,
    ReactionCounts, ReactionKind, Story, StoryId,
};
pub use editor::{AssistJob, EditorSession};
pub use store::{ContentStore, StoryDraft};
pub use testing::{MockAssist, MockAssistResponse, TestHarness};
pub use view::{
    AuthorProfileView, BrowseView, HomeView, LeaderboardView, MyProfileView, Screen,
    StoryDetailView, ViewController,
};
