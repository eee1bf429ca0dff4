//! In-memory shelves for saved stories and dream-canvas postcards.
//!
//! Both shelves live for the lifetime of the process and are shared
//! across requests behind a mutex. Newest entries sit at the front;
//! indices in the public API are 1-based because that is how the UI
//! numbers the cards.

use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use tracing::info;

use crate::clock;
use crate::i18n::Language;

/// Saved stories beyond this count push the oldest ones off the shelf.
const STORY_CAP: usize = 50;
/// Dream-canvas postcards kept per process.
const POSTCARD_CAP: usize = 20;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// A story pinned to the favorites shelf, stored as rendered HTML.
#[derive(Debug, Clone)]
pub struct SavedStory {
    pub id: String,
    pub timestamp: String,
    pub title: String,
    pub location: String,
    pub language: Language,
    pub story_html: String,
    pub image_url: Option<String>,
    pub share_text: String,
}

/// A dream-canvas postcard waiting to be downloaded and drawn on.
#[derive(Debug, Clone)]
pub struct Postcard {
    pub id: String,
    pub timestamp: String,
    pub title: String,
    pub location: String,
    pub language: Language,
    pub story_html: String,
    pub image_url: Option<String>,
}

/// Favorites shelf. Capped at [`STORY_CAP`] entries, newest first.
#[derive(Debug, Default)]
pub struct StoryLibrary {
    stories: Mutex<Vec<SavedStory>>,
}

impl StoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a rendered story and returns the status message shown to the
    /// user. The waiting-panel placeholder is rejected so an empty page
    /// cannot be pinned.
    pub fn save(
        &self,
        story_html: &str,
        image_url: Option<String>,
        share_text: String,
        location: String,
        language: Language,
    ) -> String {
        if story_html.trim().is_empty() || story_html.contains("Click") {
            return "⚠️ No story to save. Generate a story first!".to_string();
        }

        let title =
            extract_title(story_html).unwrap_or_else(|| format!("Story from {location}"));
        let entry = SavedStory {
            id: clock::story_id(),
            timestamp: clock::display_timestamp(),
            title,
            location,
            language,
            story_html: story_html.to_string(),
            image_url,
            share_text,
        };

        let mut stories = self.stories.lock().unwrap_or_else(PoisonError::into_inner);
        stories.insert(0, entry);
        stories.truncate(STORY_CAP);

        let message = format!("💖 Story saved! You now have {} saved stories.", stories.len());
        info!("{message}");
        message
    }

    /// Deletes the story at a 1-based index, as numbered in the saved list.
    pub fn delete(&self, index: usize) -> String {
        let mut stories = self.stories.lock().unwrap_or_else(PoisonError::into_inner);
        if index == 0 || index > stories.len() {
            return format!(
                "⚠️ Invalid story number. Please enter a number between 1 and {}.",
                stories.len()
            );
        }

        let removed = stories.remove(index - 1);
        let message = format!("✓ Story from {} deleted successfully!", removed.location);
        info!("{message}");
        message
    }

    pub fn delete_all(&self) -> String {
        let mut stories = self.stories.lock().unwrap_or_else(PoisonError::into_inner);
        if stories.is_empty() {
            return "ℹ️ No stories to delete.".to_string();
        }

        let count = stories.len();
        stories.clear();
        let message = format!("✓ All {count} stories deleted successfully!");
        info!("{message}");
        message
    }

    /// Snapshot of the shelf, newest first.
    pub fn entries(&self) -> Vec<SavedStory> {
        self.stories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up a story by its 1-based position.
    pub fn get(&self, index: usize) -> Option<SavedStory> {
        let stories = self.stories.lock().unwrap_or_else(PoisonError::into_inner);
        if index == 0 {
            return None;
        }
        stories.get(index - 1).cloned()
    }

    pub fn len(&self) -> usize {
        self.stories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dream-canvas shelf. Capped at [`POSTCARD_CAP`] entries, newest first.
#[derive(Debug, Default)]
pub struct PostcardLibrary {
    postcards: Mutex<Vec<Postcard>>,
}

impl PostcardLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns a rendered story into a postcard. Returns the new entry (for
    /// the preview card) alongside the status message.
    pub fn create(
        &self,
        story_html: &str,
        image_url: Option<String>,
        location: String,
        language: Language,
    ) -> (Option<Postcard>, String) {
        if story_html.trim().is_empty() || story_html.contains("Click") {
            return (
                None,
                "⚠️ No story to create Dream Canvas. Generate a story first!".to_string(),
            );
        }

        let title = extract_title(story_html).unwrap_or_else(|| "Stellina Story".to_string());
        let entry = Postcard {
            id: clock::story_id(),
            timestamp: clock::display_timestamp(),
            title,
            location,
            language,
            story_html: story_html.to_string(),
            image_url,
        };

        let mut postcards = self
            .postcards
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        postcards.insert(0, entry.clone());
        postcards.truncate(POSTCARD_CAP);

        let message = format!(
            "✓ Dream Canvas created! You now have {} Dream Canvas ready to download.",
            postcards.len()
        );
        info!("{message}");
        (Some(entry), message)
    }

    /// Deletes the postcard at a 1-based index, as numbered in the gallery.
    pub fn delete(&self, index: usize) -> String {
        let mut postcards = self
            .postcards
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if index == 0 || index > postcards.len() {
            return format!(
                "⚠️ Invalid postcard number. Please enter a number between 1 and {}.",
                postcards.len()
            );
        }

        let removed = postcards.remove(index - 1);
        let message = format!("✓ Postcard from {} deleted successfully!", removed.location);
        info!("{message}");
        message
    }

    pub fn delete_all(&self) -> String {
        let mut postcards = self
            .postcards
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if postcards.is_empty() {
            return "ℹ️ No postcards to delete.".to_string();
        }

        let count = postcards.len();
        postcards.clear();
        let message = format!("✓ All {count} postcards deleted successfully!");
        info!("{message}");
        message
    }

    /// Snapshot of the gallery, newest first.
    pub fn entries(&self) -> Vec<Postcard> {
        self.postcards
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up a postcard by its 1-based position.
    pub fn get(&self, index: usize) -> Option<Postcard> {
        let postcards = self
            .postcards
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if index == 0 {
            return None;
        }
        postcards.get(index - 1).cloned()
    }

    pub fn len(&self) -> usize {
        self.postcards
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pulls the story title out of its `<h1>` heading, tags stripped.
fn extract_title(story_html: &str) -> Option<String> {
    let caps = TITLE_RE.captures(story_html)?;
    Some(TAG_RE.replace_all(&caps[1], "").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_html(title: &str) -> String {
        format!(
            "<h1 style='color: #fbbf24;'>{title}</h1>\n<p>Once upon a time in the night sky.</p>"
        )
    }

    #[test]
    fn save_rejects_the_waiting_placeholder() {
        let shelf = StoryLibrary::new();
        let message = shelf.save(
            "<p>Click \"Generate Story\" to begin</p>",
            None,
            String::new(),
            "Rome".to_string(),
            Language::En,
        );
        assert_eq!(message, "⚠️ No story to save. Generate a story first!");
        assert!(shelf.is_empty());
    }

    #[test]
    fn save_extracts_the_title_from_the_heading() {
        let shelf = StoryLibrary::new();
        let message = shelf.save(
            "<h1 style='color: #fbbf24;'>The <em>Lullaby</em> of Vega</h1><p>Body.</p>",
            Some("https://example.com/vega.jpg".to_string()),
            "share me".to_string(),
            "Rome, Italy".to_string(),
            Language::It,
        );
        assert_eq!(message, "💖 Story saved! You now have 1 saved stories.");

        let entries = shelf.entries();
        assert_eq!(entries[0].title, "The Lullaby of Vega");
        assert_eq!(entries[0].location, "Rome, Italy");
    }

    #[test]
    fn save_falls_back_to_a_location_title() {
        let shelf = StoryLibrary::new();
        shelf.save(
            "<p>A story with no heading at all.</p>",
            None,
            String::new(),
            "Tokyo".to_string(),
            Language::En,
        );
        assert_eq!(shelf.entries()[0].title, "Story from Tokyo");
    }

    #[test]
    fn the_shelf_keeps_the_newest_fifty_stories() {
        let shelf = StoryLibrary::new();
        for i in 0..55 {
            shelf.save(
                &story_html(&format!("Story {i}")),
                None,
                String::new(),
                format!("City {i}"),
                Language::En,
            );
        }
        assert_eq!(shelf.len(), 50);
        assert_eq!(shelf.entries()[0].title, "Story 54");
        assert_eq!(shelf.entries()[49].title, "Story 5");
    }

    #[test]
    fn delete_is_one_based_and_bounds_checked() {
        let shelf = StoryLibrary::new();
        shelf.save(
            &story_html("Keeper"),
            None,
            String::new(),
            "Oslo".to_string(),
            Language::En,
        );

        assert_eq!(
            shelf.delete(0),
            "⚠️ Invalid story number. Please enter a number between 1 and 1."
        );
        assert_eq!(
            shelf.delete(2),
            "⚠️ Invalid story number. Please enter a number between 1 and 1."
        );
        assert_eq!(shelf.delete(1), "✓ Story from Oslo deleted successfully!");
        assert!(shelf.is_empty());
    }

    #[test]
    fn delete_all_reports_the_count() {
        let shelf = StoryLibrary::new();
        assert_eq!(shelf.delete_all(), "ℹ️ No stories to delete.");

        for city in ["Rome", "Paris"] {
            shelf.save(
                &story_html("A story"),
                None,
                String::new(),
                city.to_string(),
                Language::En,
            );
        }
        assert_eq!(shelf.delete_all(), "✓ All 2 stories deleted successfully!");
    }

    #[test]
    fn postcards_return_the_fresh_entry_for_previews() {
        let gallery = PostcardLibrary::new();
        let (entry, message) = gallery.create(
            &story_html("Starlight over Kyoto"),
            None,
            "Kyoto".to_string(),
            Language::En,
        );
        assert_eq!(
            message,
            "✓ Dream Canvas created! You now have 1 Dream Canvas ready to download."
        );
        assert_eq!(entry.unwrap().title, "Starlight over Kyoto");
    }

    #[test]
    fn postcards_cap_at_twenty() {
        let gallery = PostcardLibrary::new();
        for i in 0..25 {
            gallery.create(
                &story_html(&format!("Canvas {i}")),
                None,
                format!("City {i}"),
                Language::En,
            );
        }
        assert_eq!(gallery.len(), 20);
        assert_eq!(gallery.entries()[0].title, "Canvas 24");
    }

    #[test]
    fn postcard_create_rejects_empty_stories() {
        let gallery = PostcardLibrary::new();
        let (entry, message) = gallery.create("   ", None, "Rome".to_string(), Language::En);
        assert!(entry.is_none());
        assert_eq!(
            message,
            "⚠️ No story to create Dream Canvas. Generate a story first!"
        );
    }

    #[test]
    fn postcard_delete_messages_match_the_gallery_numbers() {
        let gallery = PostcardLibrary::new();
        gallery.create(
            &story_html("Canvas"),
            None,
            "Lima".to_string(),
            Language::Es,
        );

        assert_eq!(
            gallery.delete(5),
            "⚠️ Invalid postcard number. Please enter a number between 1 and 1."
        );
        assert_eq!(
            gallery.delete(1),
            "✓ Postcard from Lima deleted successfully!"
        );
        assert_eq!(gallery.delete_all(), "ℹ️ No postcards to delete.");
    }
}
