//! Story platform data model.
//!
//! Contains all types for representing platform state: stories, reactions,
//! comments, authors, badges, and the partial profile update.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BadgeId(pub Uuid);

impl BadgeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BadgeId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Story categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Horror,
    Love,
    Comedy,
    Motivation,
    Fantasy,
    #[serde(rename = "Real-Life")]
    RealLife,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Category {
    /// The display label shown on category chips and story cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Horror => "Horror",
            Category::Love => "Love",
            Category::Comedy => "Comedy",
            Category::Motivation => "Motivation",
            Category::Fantasy => "Fantasy",
            Category::RealLife => "Real-Life",
            Category::SciFi => "Sci-Fi",
        }
    }

    pub fn all() -> [Category; 7] {
        [
            Category::Horror,
            Category::Love,
            Category::Comedy,
            Category::Motivation,
            Category::Fantasy,
            Category::RealLife,
            Category::SciFi,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The browse screen's active category predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every story.
    #[default]
    All,
    /// Show only stories in one category.
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, story: &Story) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => story.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

// ============================================================================
// Reactions
// ============================================================================

/// The five reaction kinds readers can leave on a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Love,
    Like,
    Laugh,
    Cry,
    Dislike,
}

impl ReactionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ReactionKind::Love => "love",
            ReactionKind::Like => "like",
            ReactionKind::Laugh => "laugh",
            ReactionKind::Cry => "cry",
            ReactionKind::Dislike => "dislike",
        }
    }

    pub fn all() -> [ReactionKind; 5] {
        [
            ReactionKind::Love,
            ReactionKind::Like,
            ReactionKind::Laugh,
            ReactionKind::Cry,
            ReactionKind::Dislike,
        ]
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-story reaction counters. Counters only ever increase, one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub love: u32,
    pub like: u32,
    pub laugh: u32,
    pub cry: u32,
    pub dislike: u32,
}

impl ReactionCounts {
    pub fn new(love: u32, like: u32, laugh: u32, cry: u32, dislike: u32) -> Self {
        Self {
            love,
            like,
            laugh,
            cry,
            dislike,
        }
    }

    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Love => self.love,
            ReactionKind::Like => self.like,
            ReactionKind::Laugh => self.laugh,
            ReactionKind::Cry => self.cry,
            ReactionKind::Dislike => self.dislike,
        }
    }

    /// Increment exactly one counter by exactly one.
    pub fn bump(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Love => self.love += 1,
            ReactionKind::Like => self.like += 1,
            ReactionKind::Laugh => self.laugh += 1,
            ReactionKind::Cry => self.cry += 1,
            ReactionKind::Dislike => self.dislike += 1,
        }
    }

    /// Leaderboard metric: positive engagement only.
    pub fn score(&self) -> u32 {
        self.love + self.like
    }

    pub fn total(&self) -> u32 {
        self.love + self.like + self.laugh + self.cry + self.dislike
    }
}

// ============================================================================
// Stories and comments
// ============================================================================

/// A reader comment. Immutable once created; comments are only appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Display name of the commenter.
    pub author: String,
    pub text: String,
    /// Human-readable timestamp label, e.g. "2h ago" or "Just now".
    pub date: String,
}

/// A published story with its engagement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    /// Author display name. A free-text label, not a reference into the
    /// author roster; profile renames cascade to it by string match.
    pub author: String,
    pub category: Category,
    /// Optional cover image URL.
    pub cover_image: Option<String>,
    pub reactions: ReactionCounts,
    /// Insertion order, never reordered.
    pub comments: Vec<Comment>,
    /// Publish date label, e.g. "2023-10-01".
    pub date: String,
    /// Monthly-winner marker; featured stories get the animated card.
    pub featured: bool,
}

// ============================================================================
// Authors and badges
// ============================================================================

/// An achievement badge attached to one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    /// Icon label, e.g. "trophy" or "star".
    pub icon: String,
    /// Color label, e.g. "gold".
    pub color: String,
}

impl Badge {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: BadgeId::new(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// An author or user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub bio: Option<String>,
    /// Avatar image URL.
    pub avatar: String,
    /// Optional profile background image URL.
    pub cover_image: Option<String>,
    pub badges: Vec<Badge>,
    pub total_likes: u32,
}

/// A partial profile update. Unset fields leave the profile unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bio.is_none()
            && self.avatar.is_none()
            && self.cover_image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::RealLife.label(), "Real-Life");
        assert_eq!(Category::SciFi.label(), "Sci-Fi");
        assert_eq!(Category::all().len(), 7);
    }

    #[test]
    fn test_category_serde_labels() {
        let json = serde_json::to_string(&Category::RealLife).unwrap();
        assert_eq!(json, "\"Real-Life\"");
        let parsed: Category = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(parsed, Category::SciFi);
    }

    #[test]
    fn test_reaction_bump_touches_one_counter() {
        let mut counts = ReactionCounts::default();
        counts.bump(ReactionKind::Laugh);

        assert_eq!(counts.laugh, 1);
        assert_eq!(counts.love, 0);
        assert_eq!(counts.like, 0);
        assert_eq!(counts.cry, 0);
        assert_eq!(counts.dislike, 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_reaction_score_is_positive_engagement() {
        let counts = ReactionCounts::new(3, 4, 100, 7, 9);
        assert_eq!(counts.score(), 7);
        assert_eq!(counts.total(), 123);
    }

    #[test]
    fn test_reaction_get_matches_fields() {
        let counts = ReactionCounts::new(1, 2, 3, 4, 5);
        for (kind, expected) in ReactionKind::all().into_iter().zip([1, 2, 3, 4, 5]) {
            assert_eq!(counts.get(kind), expected);
        }
    }

    #[test]
    fn test_profile_update_builder() {
        let update = ProfileUpdate::new().with_name("Bob").with_bio("Hi");
        assert_eq!(update.name.as_deref(), Some("Bob"));
        assert_eq!(update.bio.as_deref(), Some("Hi"));
        assert!(update.avatar.is_none());
        assert!(!update.is_empty());
        assert!(ProfileUpdate::new().is_empty());
    }

    #[test]
    fn test_filter_matches() {
        let story = Story {
            id: StoryId::new(),
            title: "T".to_string(),
            content: "C".to_string(),
            author: "A".to_string(),
            category: Category::Comedy,
            cover_image: None,
            reactions: ReactionCounts::default(),
            comments: Vec::new(),
            date: "2023-10-01".to_string(),
            featured: false,
        };

        assert!(CategoryFilter::All.matches(&story));
        assert!(CategoryFilter::Only(Category::Comedy).matches(&story));
        assert!(!CategoryFilter::Only(Category::Horror).matches(&story));
    }
}
