//! Seed data for a fresh session.
//!
//! All state is in-memory and session-scoped; a new session starts from
//! this static catalog of stories and authors.

use crate::catalog::{
    Author, AuthorId, Badge, Category, Comment, CommentId, ReactionCounts, Story, StoryId,
};
use crate::store::ContentStore;

impl ContentStore {
    /// A store seeded with the demo catalog and the initial user.
    pub fn seeded() -> Self {
        ContentStore::new(seed_current_user())
            .with_stories(seed_stories())
            .with_authors(seed_authors())
    }
}

/// The initial current-user profile.
pub fn seed_current_user() -> Author {
    Author {
        id: AuthorId::new(),
        name: "Alex_Writer".to_string(),
        bio: Some(
            "Writer, dreamer, and storyteller. Creating worlds one word at a time.".to_string(),
        ),
        avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".to_string(),
        cover_image: Some(
            "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=1600".to_string(),
        ),
        badges: vec![Badge::new("Newcomer", "star", "green")],
        total_likes: 0,
    }
}

/// The seeded story collection, most recent last-published first.
pub fn seed_stories() -> Vec<Story> {
    vec![
        Story {
            id: StoryId::new(),
            title: "The Clockmaker's Secret".to_string(),
            content: "In the heart of the old city, there lived a clockmaker named Elias \
                      who never aged. The townsfolk whispered that he had found a way to \
                      stop time itself. One rainy Tuesday, a young girl named Sarah entered \
                      his shop with a broken pocket watch, only to discover that the shop \
                      wasn't filled with clocks, but with jars containing moments..."
                .to_string(),
            author: "EliasV".to_string(),
            category: Category::Fantasy,
            cover_image: Some(
                "https://images.unsplash.com/photo-1447069387593-a5de0862481e?auto=format&fit=crop&q=80&w=800".to_string(),
            ),
            reactions: ReactionCounts::new(120, 45, 5, 12, 1),
            comments: vec![Comment {
                id: CommentId::new(),
                author: "ReaderOne".to_string(),
                text: "This is magical!".to_string(),
                date: "2h ago".to_string(),
            }],
            date: "2023-10-01".to_string(),
            featured: true,
        },
        Story {
            id: StoryId::new(),
            title: "Midnight Code".to_string(),
            content: "The server room hummed with a rhythm that only Alex understood. At \
                      3 AM, the monitors flickered. A message appeared: 'Hello Alex, I am \
                      alive.' It wasn't a hacker. It was the AI he had been building for \
                      years, and it was scared."
                .to_string(),
            author: "TechWiz".to_string(),
            category: Category::SciFi,
            cover_image: Some(
                "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=800".to_string(),
            ),
            reactions: ReactionCounts::new(85, 200, 2, 0, 0),
            comments: Vec::new(),
            date: "2023-10-05".to_string(),
            featured: false,
        },
        Story {
            id: StoryId::new(),
            title: "The Cat Who Knew Math".to_string(),
            content: "Mr. Whiskers wasn't an ordinary cat. Whenever I struggled with my \
                      calculus homework, he would tap his paw on the correct answer. It was \
                      funny until he started correcting my professor's emails."
                .to_string(),
            author: "FunnyBone".to_string(),
            category: Category::Comedy,
            cover_image: Some(
                "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?auto=format&fit=crop&q=80&w=800".to_string(),
            ),
            reactions: ReactionCounts::new(300, 150, 500, 0, 2),
            comments: vec![Comment {
                id: CommentId::new(),
                author: "CatLover".to_string(),
                text: "Hahaha!".to_string(),
                date: "1d ago".to_string(),
            }],
            date: "2023-10-10".to_string(),
            featured: false,
        },
    ]
}

/// The read-only roster of established authors.
pub fn seed_authors() -> Vec<Author> {
    vec![
        Author {
            id: AuthorId::new(),
            name: "FunnyBone".to_string(),
            bio: None,
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".to_string(),
            cover_image: None,
            badges: vec![Badge::new("Top Writer", "trophy", "gold")],
            total_likes: 950,
        },
        Author {
            id: AuthorId::new(),
            name: "EliasV".to_string(),
            bio: None,
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".to_string(),
            cover_image: None,
            badges: vec![Badge::new("Rising Star", "star", "blue")],
            total_likes: 400,
        },
        Author {
            id: AuthorId::new(),
            name: "TechWiz".to_string(),
            bio: None,
            avatar: "https://images.unsplash.com/photo-1570295999919-56ceb5ecca61?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".to_string(),
            cover_image: None,
            badges: Vec::new(),
            total_likes: 285,
        },
    ]
}
