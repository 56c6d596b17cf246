//! Quick walkthrough of a story platform session.
//!
//! Runs fully in memory; AI assistance uses GEMINI_API_KEY when set and
//! falls back gracefully when it isn't.

use storyweave_core::{
    AssistOp, Category, CategoryFilter, ContentStore, EditorSession, ProfileUpdate, ReactionKind,
    StoryDetailView, ViewController, WritingAssistant,
};

#[tokio::main]
async fn main() {
    println!("=== Storyweave session walkthrough ===\n");

    // 1. Start a session from the seeded catalog
    let mut view = ViewController::new(ContentStore::seeded());
    let assistant = WritingAssistant::from_env();
    println!("1. Session started as '{}'", view.store().current_user().name);
    println!("   Stories: {}", view.store().stories().len());
    println!("   AI assistance configured: {}\n", assistant.is_configured());

    // 2. Browse comedy stories
    view.start_reading();
    view.set_filter(CategoryFilter::Only(Category::Comedy));
    let browse = view.browse_view();
    println!("2. Browsing '{}': {} story(ies)", browse.filter.label(), browse.stories.len());
    let comedy_id = browse.stories[0].id;

    // 3. React and comment
    view.open_story(comedy_id);
    view.react(comedy_id, ReactionKind::Laugh);
    view.comment(comedy_id, "Mr. Whiskers deserves tenure.");
    if let StoryDetailView::Found(story) = view.story_detail() {
        println!(
            "3. '{}': {} laughs, {} comment(s)\n",
            story.title,
            story.reactions.laugh,
            story.comments.len()
        );
    }

    // 4. Write a new story with AI help
    view.start_writing();
    let mut editor = EditorSession::new();
    editor.set_category(Category::SciFi);
    editor.set_content(
        "The last lighthouse keeper on Mars logged the same message every \
         night: all quiet. Tonight the ocean answered back.",
    );
    editor.assist(&assistant, AssistOp::Title).await;
    println!("4. Drafting with suggested title: '{}'", editor.title());

    editor.set_author("");
    let id = view.submit_story(editor.to_draft());
    println!("   Published {id}; now on the browse screen\n");

    // 5. Rename the profile; the new story follows
    view.update_profile(ProfileUpdate::new().with_name("Alexandra_Writes"));
    let story = view.store().find_story(id).expect("just published");
    println!("5. Renamed profile; story author is now '{}'\n", story.author);

    // 6. Check the leaderboard
    let board = view.leaderboard();
    println!("6. Leaderboard:");
    for (rank, story) in board.top_stories.iter().take(5).enumerate() {
        println!(
            "   {}. {} ({} votes)",
            rank + 1,
            story.title,
            story.reactions.score()
        );
    }

    println!("\n=== Done ===");
}
