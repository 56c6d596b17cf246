//! The view controller: navigation state and intent dispatch.
//!
//! Tracks the single active screen plus the minimal selection state needed
//! to render it, translates user intents into content store calls, and
//! derives renderable views from store state. Dangling selections render
//! as explicit not-found views, never panics.

use crate::catalog::{Author, CategoryFilter, ProfileUpdate, ReactionKind, Story, StoryId};
use crate::store::{ContentStore, StoryDraft};

/// The screens a session can show. Sessions start on [`Screen::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Browse,
    Editor,
    StoryDetail,
    AuthorProfile,
    MyProfile,
    Leaderboard,
}

/// Navigation state machine over an owned [`ContentStore`].
#[derive(Debug)]
pub struct ViewController {
    store: ContentStore,
    screen: Screen,
    selected_story: Option<StoryId>,
    selected_author: Option<String>,
    filter: CategoryFilter,
}

impl ViewController {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            screen: Screen::Home,
            selected_story: None,
            selected_author: None,
            filter: CategoryFilter::All,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    // ========================================================================
    // Navigation intents
    // ========================================================================

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    /// Home's "start reading" call to action.
    pub fn start_reading(&mut self) {
        self.screen = Screen::Browse;
    }

    /// Home's "start writing" call to action.
    pub fn start_writing(&mut self) {
        self.screen = Screen::Editor;
    }

    pub fn open_leaderboard(&mut self) {
        self.screen = Screen::Leaderboard;
    }

    pub fn open_my_profile(&mut self) {
        self.screen = Screen::MyProfile;
    }

    /// Select a story and show its detail screen.
    pub fn open_story(&mut self, id: StoryId) {
        self.selected_story = Some(id);
        self.screen = Screen::StoryDetail;
    }

    /// Show a profile for the given author name. The current user's own
    /// name routes to the user profile screen instead.
    pub fn open_author(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == self.store.current_user().name {
            self.screen = Screen::MyProfile;
        } else {
            self.selected_author = Some(name);
            self.screen = Screen::AuthorProfile;
        }
    }

    /// Return to the current screen's logical parent.
    pub fn go_back(&mut self) {
        self.screen = match self.screen {
            Screen::StoryDetail | Screen::AuthorProfile => Screen::Browse,
            _ => Screen::Home,
        };
    }

    /// Set the browse screen's category filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    // ========================================================================
    // Store intents
    // ========================================================================

    /// Publish the draft and land on the browse screen with the new story
    /// visible. The filter resets so the story can't be hidden by a stale
    /// category selection.
    pub fn submit_story(&mut self, draft: StoryDraft) -> StoryId {
        let id = self.store.publish(draft).id;
        self.filter = CategoryFilter::All;
        self.screen = Screen::Browse;
        id
    }

    pub fn react(&mut self, id: StoryId, kind: ReactionKind) {
        self.store.react(id, kind);
    }

    pub fn comment(&mut self, id: StoryId, text: impl Into<String>) {
        self.store.add_comment(id, text);
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.store.update_profile(update);
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    pub fn home_view(&self) -> HomeView<'_> {
        HomeView {
            featured: self.store.stories().iter().take(3).collect(),
        }
    }

    pub fn browse_view(&self) -> BrowseView<'_> {
        BrowseView {
            filter: self.filter,
            stories: self.store.stories_in(self.filter),
        }
    }

    pub fn story_detail(&self) -> StoryDetailView<'_> {
        match self.selected_story.and_then(|id| self.store.find_story(id)) {
            Some(story) => StoryDetailView::Found(story),
            None => StoryDetailView::NotFound,
        }
    }

    pub fn author_profile(&self) -> AuthorProfileView<'_> {
        match &self.selected_author {
            Some(name) => AuthorProfileView::Selected {
                name,
                author: self.store.find_author(name),
                stories: self.store.stories_by(name),
            },
            None => AuthorProfileView::NotSelected,
        }
    }

    pub fn my_profile(&self) -> MyProfileView<'_> {
        MyProfileView {
            user: self.store.current_user(),
            my_stories: self.store.my_stories(),
            liked_stories: self.store.liked_stories(),
        }
    }

    pub fn leaderboard(&self) -> LeaderboardView<'_> {
        LeaderboardView {
            top_stories: self.store.ranked_stories(),
            top_authors: self.store.authors(),
        }
    }
}

/// Home screen data: the most recent stories, featured up top.
#[derive(Debug)]
pub struct HomeView<'a> {
    pub featured: Vec<&'a Story>,
}

/// Browse screen data: the active filter and the stories passing it.
#[derive(Debug)]
pub struct BrowseView<'a> {
    pub filter: CategoryFilter,
    pub stories: Vec<&'a Story>,
}

/// Story detail screen data.
#[derive(Debug)]
pub enum StoryDetailView<'a> {
    Found(&'a Story),
    /// The recorded selection no longer resolves, or none was recorded.
    NotFound,
}

/// Author profile screen data.
#[derive(Debug)]
pub enum AuthorProfileView<'a> {
    Selected {
        name: &'a str,
        /// The roster record, when one exists for this display name.
        author: Option<&'a Author>,
        stories: Vec<&'a Story>,
    },
    NotSelected,
}

/// User profile screen data.
#[derive(Debug)]
pub struct MyProfileView<'a> {
    pub user: &'a Author,
    pub my_stories: Vec<&'a Story>,
    pub liked_stories: Vec<&'a Story>,
}

/// Leaderboard screen data: stories ranked by score, authors in roster order.
#[derive(Debug)]
pub struct LeaderboardView<'a> {
    pub top_stories: Vec<&'a Story>,
    pub top_authors: &'a [Author],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AuthorId, Category};

    fn controller(name: &str) -> ViewController {
        let user = Author {
            id: AuthorId::new(),
            name: name.to_string(),
            bio: None,
            avatar: "https://example.com/a.png".to_string(),
            cover_image: None,
            badges: Vec::new(),
            total_likes: 0,
        };
        ViewController::new(ContentStore::new(user))
    }

    #[test]
    fn test_initial_screen_is_home() {
        let view = controller("Alex");
        assert_eq!(view.screen(), Screen::Home);
        assert_eq!(view.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_home_calls_to_action() {
        let mut view = controller("Alex");
        view.start_writing();
        assert_eq!(view.screen(), Screen::Editor);
        view.go_back();
        assert_eq!(view.screen(), Screen::Home);
        view.start_reading();
        assert_eq!(view.screen(), Screen::Browse);
    }

    #[test]
    fn test_submit_story_lands_on_browse_with_story_visible() {
        let mut view = controller("Alex");
        view.start_writing();
        view.set_filter(CategoryFilter::Only(Category::Comedy));

        let id = view.submit_story(StoryDraft::new("T", Category::Horror, "body"));

        assert_eq!(view.screen(), Screen::Browse);
        assert_eq!(view.filter(), CategoryFilter::All);
        let browse = view.browse_view();
        assert_eq!(browse.stories.first().map(|s| s.id), Some(id));
    }

    #[test]
    fn test_story_detail_found_and_back() {
        let mut view = controller("Alex");
        let id = view.submit_story(StoryDraft::new("T", Category::Horror, "body"));

        view.open_story(id);
        assert_eq!(view.screen(), Screen::StoryDetail);
        assert!(matches!(view.story_detail(), StoryDetailView::Found(s) if s.id == id));

        view.go_back();
        assert_eq!(view.screen(), Screen::Browse);
    }

    #[test]
    fn test_story_detail_not_found() {
        let mut view = controller("Alex");
        view.open_story(StoryId::new());
        assert!(matches!(view.story_detail(), StoryDetailView::NotFound));
    }

    #[test]
    fn test_open_author_routes_self_to_my_profile() {
        let mut view = controller("Alex");
        view.open_author("Alex");
        assert_eq!(view.screen(), Screen::MyProfile);

        view.open_author("Carol");
        assert_eq!(view.screen(), Screen::AuthorProfile);
        assert!(matches!(
            view.author_profile(),
            AuthorProfileView::Selected { name: "Carol", .. }
        ));
        view.go_back();
        assert_eq!(view.screen(), Screen::Browse);
    }

    #[test]
    fn test_author_profile_without_selection() {
        let view = controller("Alex");
        assert!(matches!(view.author_profile(), AuthorProfileView::NotSelected));
    }

    #[test]
    fn test_browse_filter_is_client_side_only() {
        let mut view = controller("Alex");
        view.submit_story(StoryDraft::new("H", Category::Horror, "a"));
        view.submit_story(StoryDraft::new("C", Category::Comedy, "b"));

        view.set_filter(CategoryFilter::Only(Category::Horror));
        assert_eq!(view.browse_view().stories.len(), 1);
        assert_eq!(view.store().stories().len(), 2);

        view.set_filter(CategoryFilter::All);
        assert_eq!(view.browse_view().stories.len(), 2);
    }

    #[test]
    fn test_home_view_caps_featured_at_three() {
        let mut view = controller("Alex");
        for i in 0..5 {
            view.submit_story(StoryDraft::new(format!("S{i}"), Category::Fantasy, "x"));
        }
        assert_eq!(view.home_view().featured.len(), 3);
        // Most recent first.
        assert_eq!(view.home_view().featured[0].title, "S4");
    }

    #[test]
    fn test_leaderboard_reachable_from_any_screen() {
        let mut view = controller("Alex");
        let id = view.submit_story(StoryDraft::new("T", Category::Love, "x"));
        view.open_story(id);
        view.open_leaderboard();
        assert_eq!(view.screen(), Screen::Leaderboard);

        // Leaderboard entries link back into detail and profiles.
        view.open_story(id);
        assert_eq!(view.screen(), Screen::StoryDetail);
    }

    #[test]
    fn test_react_and_comment_pass_through() {
        let mut view = controller("Alex");
        let id = view.submit_story(StoryDraft::new("T", Category::Love, "x"));

        view.react(id, ReactionKind::Love);
        view.comment(id, "Nice");

        let story = view.store().find_story(id).unwrap();
        assert_eq!(story.reactions.love, 1);
        assert_eq!(story.comments.len(), 1);
    }
}
