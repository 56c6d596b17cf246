//! The content store: the authoritative in-memory collection of stories
//! and profiles.
//!
//! All mutation of story and author data goes through this type. Lookups
//! by id degrade to no-ops rather than errors; the store trusts callers
//! to enforce non-empty titles and bodies before publishing.

use crate::catalog::{
    Author, Category, CategoryFilter, Comment, CommentId, ProfileUpdate, ReactionKind, Story,
    StoryId,
};
use chrono::Local;

/// Input to [`ContentStore::publish`]: a completed story draft.
#[derive(Debug, Clone)]
pub struct StoryDraft {
    pub title: String,
    pub category: Category,
    pub content: String,
    /// Pen name for the story. Blank means "publish as the current user".
    pub author: String,
    pub cover_image: Option<String>,
}

impl StoryDraft {
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category,
            content: content.into(),
            author: String::new(),
            cover_image: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }
}

/// The canonical session state: stories (most-recent-first), the current
/// user, and the read-only author roster.
#[derive(Debug, Clone)]
pub struct ContentStore {
    stories: Vec<Story>,
    current_user: Author,
    authors: Vec<Author>,
    /// Stories the current user has liked. There is no like-tracking
    /// operation yet; this set is populated externally via
    /// [`ContentStore::set_liked`] and empty by default.
    liked: Vec<StoryId>,
}

impl ContentStore {
    /// Create an empty store owned by the given user.
    pub fn new(current_user: Author) -> Self {
        Self {
            stories: Vec::new(),
            current_user,
            authors: Vec::new(),
            liked: Vec::new(),
        }
    }

    /// Replace the story collection (most-recent-first order expected).
    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }

    /// Replace the author roster.
    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Publish a new story from a draft.
    ///
    /// The effective author is the draft's pen name, falling back to the
    /// current user's name when blank. The story gets a fresh id, zero
    /// reactions, no comments, today's date, and goes to the front of the
    /// collection.
    pub fn publish(&mut self, draft: StoryDraft) -> &Story {
        let author = if draft.author.trim().is_empty() {
            self.current_user.name.clone()
        } else {
            draft.author
        };

        let story = Story {
            id: StoryId::new(),
            title: draft.title,
            content: draft.content,
            author,
            category: draft.category,
            cover_image: draft.cover_image.filter(|url| !url.is_empty()),
            reactions: Default::default(),
            comments: Vec::new(),
            date: today_label(),
            featured: false,
        };

        self.stories.insert(0, story);
        &self.stories[0]
    }

    /// Add one reaction to a story. Unknown ids are a no-op returning `None`.
    ///
    /// The story value is replaced, not mutated in place, so callers holding
    /// a previous snapshot can detect the change by comparison.
    pub fn react(&mut self, id: StoryId, kind: ReactionKind) -> Option<&Story> {
        let index = self.stories.iter().position(|s| s.id == id)?;
        let mut updated = self.stories[index].clone();
        updated.reactions.bump(kind);
        self.stories[index] = updated;
        Some(&self.stories[index])
    }

    /// Append a comment by the current user. Unknown ids are a no-op.
    pub fn add_comment(&mut self, id: StoryId, text: impl Into<String>) -> Option<&Story> {
        let index = self.stories.iter().position(|s| s.id == id)?;
        let mut updated = self.stories[index].clone();
        updated.comments.push(Comment {
            id: CommentId::new(),
            author: self.current_user.name.clone(),
            text: text.into(),
            date: "Just now".to_string(),
        });
        self.stories[index] = updated;
        Some(&self.stories[index])
    }

    /// Merge a partial update into the current user's profile.
    ///
    /// When the name changes, every story whose author matches the old name
    /// is rewritten to the new one. Authors are linked to stories by display
    /// name only, so a rename must cascade or the link is lost.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> &Author {
        let old_name = self.current_user.name.clone();

        if let Some(name) = update.name {
            self.current_user.name = name;
        }
        if let Some(bio) = update.bio {
            self.current_user.bio = Some(bio);
        }
        if let Some(avatar) = update.avatar {
            self.current_user.avatar = avatar;
        }
        if let Some(cover_image) = update.cover_image {
            self.current_user.cover_image = Some(cover_image);
        }

        let new_name = self.current_user.name.clone();
        if new_name != old_name {
            for story in &mut self.stories {
                if story.author == old_name {
                    story.author = new_name.clone();
                }
            }
        }

        &self.current_user
    }

    /// Set the liked-story set for the current user.
    pub fn set_liked(&mut self, liked: Vec<StoryId>) {
        self.liked = liked;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All stories, most recent first.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn find_story(&self, id: StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    /// Stories passing the given category filter, in collection order.
    pub fn stories_in(&self, filter: CategoryFilter) -> Vec<&Story> {
        self.stories.iter().filter(|s| filter.matches(s)).collect()
    }

    /// Stories by the given author display name, in collection order.
    pub fn stories_by(&self, author: &str) -> Vec<&Story> {
        self.stories.iter().filter(|s| s.author == author).collect()
    }

    /// Stories ranked by positive engagement (love + like), descending.
    /// Ties keep their most-recent-first order.
    pub fn ranked_stories(&self) -> Vec<&Story> {
        let mut ranked: Vec<&Story> = self.stories.iter().collect();
        ranked.sort_by(|a, b| b.reactions.score().cmp(&a.reactions.score()));
        ranked
    }

    /// Stories authored by the current user.
    pub fn my_stories(&self) -> Vec<&Story> {
        self.stories_by(&self.current_user.name)
    }

    /// Stories in the liked set, skipping ids that no longer resolve.
    pub fn liked_stories(&self) -> Vec<&Story> {
        self.liked
            .iter()
            .filter_map(|id| self.find_story(*id))
            .collect()
    }

    pub fn current_user(&self) -> &Author {
        &self.current_user
    }

    /// The read-only roster of other authors.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn find_author(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name == name)
    }
}

fn today_label() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AuthorId, ReactionCounts};

    fn test_user(name: &str) -> Author {
        Author {
            id: AuthorId::new(),
            name: name.to_string(),
            bio: None,
            avatar: "https://example.com/avatar.png".to_string(),
            cover_image: None,
            badges: Vec::new(),
            total_likes: 0,
        }
    }

    fn store_with_user(name: &str) -> ContentStore {
        ContentStore::new(test_user(name))
    }

    #[test]
    fn test_publish_defaults() {
        let mut store = store_with_user("Alex");

        let story = store.publish(StoryDraft::new("T1", Category::Comedy, "body"));

        assert_eq!(story.author, "Alex");
        assert_eq!(story.category, Category::Comedy);
        assert_eq!(story.reactions, ReactionCounts::default());
        assert!(story.comments.is_empty());
        assert!(!story.featured);
        assert!(story.cover_image.is_none());
    }

    #[test]
    fn test_publish_inserts_at_front() {
        let mut store = store_with_user("Alex");
        store.publish(StoryDraft::new("First", Category::Horror, "a"));
        store.publish(StoryDraft::new("Second", Category::Love, "b"));

        let titles: Vec<&str> = store.stories().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_publish_keeps_explicit_pen_name() {
        let mut store = store_with_user("Alex");
        let story = store.publish(
            StoryDraft::new("T", Category::Fantasy, "body").with_author("GhostWriter"),
        );
        assert_eq!(story.author, "GhostWriter");
    }

    #[test]
    fn test_publish_blank_pen_name_falls_back() {
        let mut store = store_with_user("Alex");
        let story =
            store.publish(StoryDraft::new("T", Category::Fantasy, "body").with_author("   "));
        assert_eq!(story.author, "Alex");
    }

    #[test]
    fn test_react_increments_exactly_one_counter() {
        let mut store = store_with_user("Alex");
        let id = store.publish(StoryDraft::new("T", Category::SciFi, "body")).id;

        for _ in 0..3 {
            store.react(id, ReactionKind::Love);
        }

        let story = store.find_story(id).unwrap();
        assert_eq!(story.reactions.love, 3);
        assert_eq!(story.reactions.like, 0);
        assert_eq!(story.reactions.laugh, 0);
        assert_eq!(story.reactions.cry, 0);
        assert_eq!(story.reactions.dislike, 0);
    }

    #[test]
    fn test_react_replaces_story_value() {
        let mut store = store_with_user("Alex");
        let id = store.publish(StoryDraft::new("T", Category::SciFi, "body")).id;
        let before = store.find_story(id).unwrap().clone();

        store.react(id, ReactionKind::Like);

        let after = store.find_story(id).unwrap();
        assert_ne!(&before, after);
        assert_eq!(before.title, after.title);
    }

    #[test]
    fn test_react_unknown_id_is_noop() {
        let mut store = store_with_user("Alex");
        store.publish(StoryDraft::new("T", Category::SciFi, "body"));
        let snapshot = store.stories().to_vec();

        assert!(store.react(StoryId::new(), ReactionKind::Love).is_none());
        assert_eq!(store.stories(), snapshot.as_slice());
    }

    #[test]
    fn test_add_comment_appends() {
        let mut store = store_with_user("Alex");
        let id = store.publish(StoryDraft::new("T", Category::Love, "body")).id;

        store.add_comment(id, "First!");
        store.add_comment(id, "Second.");

        let story = store.find_story(id).unwrap();
        assert_eq!(story.comments.len(), 2);
        assert_eq!(story.comments[0].text, "First!");
        assert_eq!(story.comments[1].text, "Second.");
        assert_eq!(story.comments[1].author, "Alex");
        assert_eq!(story.comments[1].date, "Just now");
    }

    #[test]
    fn test_add_comment_unknown_id_is_noop() {
        let mut store = store_with_user("Alex");
        let id = store.publish(StoryDraft::new("T", Category::Love, "body")).id;

        assert!(store.add_comment(StoryId::new(), "hello").is_none());
        assert!(store.find_story(id).unwrap().comments.is_empty());
    }

    #[test]
    fn test_update_profile_renames_own_stories_only() {
        let mut store = store_with_user("Alex");
        store.publish(StoryDraft::new("Mine", Category::Comedy, "a"));
        store.publish(StoryDraft::new("Theirs", Category::Comedy, "b").with_author("Carol"));

        store.update_profile(ProfileUpdate::new().with_name("Bob"));

        assert_eq!(store.current_user().name, "Bob");
        let authors: Vec<&str> = store.stories().iter().map(|s| s.author.as_str()).collect();
        assert_eq!(authors, vec!["Carol", "Bob"]);
    }

    #[test]
    fn test_update_profile_bio_only_touches_no_story() {
        let mut store = store_with_user("Alex");
        store.publish(StoryDraft::new("Mine", Category::Comedy, "a"));
        let snapshot = store.stories().to_vec();

        store.update_profile(ProfileUpdate::new().with_bio("New bio"));

        assert_eq!(store.current_user().bio.as_deref(), Some("New bio"));
        assert_eq!(store.stories(), snapshot.as_slice());
    }

    #[test]
    fn test_ranked_stories_stable_order() {
        let mut store = store_with_user("Alex");
        let low = store.publish(StoryDraft::new("Low", Category::Horror, "a")).id;
        let tied_old = store.publish(StoryDraft::new("TiedOld", Category::Horror, "b")).id;
        let tied_new = store.publish(StoryDraft::new("TiedNew", Category::Horror, "c")).id;
        let high = store.publish(StoryDraft::new("High", Category::Horror, "d")).id;

        store.react(low, ReactionKind::Like);
        for id in [tied_old, tied_new] {
            store.react(id, ReactionKind::Love);
            store.react(id, ReactionKind::Love);
        }
        for _ in 0..5 {
            store.react(high, ReactionKind::Love);
        }
        // Laugh reactions don't count toward the ranking score.
        for _ in 0..10 {
            store.react(low, ReactionKind::Laugh);
        }

        let titles: Vec<&str> = store
            .ranked_stories()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        // Tied stories keep their most-recent-first relative order.
        assert_eq!(titles, vec!["High", "TiedNew", "TiedOld", "Low"]);
    }

    #[test]
    fn test_category_and_author_queries() {
        let mut store = store_with_user("Alex");
        store.publish(StoryDraft::new("H1", Category::Horror, "a"));
        store.publish(StoryDraft::new("C1", Category::Comedy, "b").with_author("Carol"));
        store.publish(StoryDraft::new("H2", Category::Horror, "c").with_author("Carol"));

        assert_eq!(store.stories_in(CategoryFilter::All).len(), 3);
        assert_eq!(
            store.stories_in(CategoryFilter::Only(Category::Horror)).len(),
            2
        );
        assert_eq!(store.stories_by("Carol").len(), 2);
        assert_eq!(store.my_stories().len(), 1);
    }

    #[test]
    fn test_liked_stories_empty_by_default_and_skips_dangling() {
        let mut store = store_with_user("Alex");
        let id = store.publish(StoryDraft::new("T", Category::Love, "a")).id;

        assert!(store.liked_stories().is_empty());

        store.set_liked(vec![id, StoryId::new()]);
        let liked = store.liked_stories();
        assert_eq!(liked.len(), 1);
        assert_eq!(liked[0].id, id);
    }
}
