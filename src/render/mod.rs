//! Server-side HTML rendering: the story panel, saved-story cards, the
//! dream-canvas gallery and printable documents, the localized page
//! shell, and prefilled share links.

mod cards;
mod documents;
mod page;
mod story;

pub use cards::{canvas_preview, postcards_gallery, saved_stories_list};
pub use documents::{dream_canvas_document, printable_story_document};
pub use page::{about_section, dictionary_section, index_page};
pub use story::{format_story_for_display, story_view};

use percent_encoding::utf8_percent_encode;
use serde::Serialize;

use crate::fetch::URL_ENCODE;

/// Tweets get cut well under the platform limit so the link survives.
const TWEET_CHARS: usize = 240;

/// Prefilled share URLs for a story's share text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub email: String,
    pub twitter: String,
    pub telegram: String,
}

/// Builds share URLs for WhatsApp, email, Twitter, and Telegram.
pub fn share_links(share_text: &str) -> ShareLinks {
    let encoded = utf8_percent_encode(share_text, &URL_ENCODE).to_string();
    let subject = utf8_percent_encode("🌌 My Stellina Story", &URL_ENCODE);
    let snippet: String = share_text.chars().take(TWEET_CHARS).collect();

    ShareLinks {
        whatsapp: format!("https://wa.me/?text={encoded}"),
        email: format!("mailto:?subject={subject}&body={encoded}"),
        twitter: format!(
            "https://twitter.com/intent/tweet?text={}",
            utf8_percent_encode(&snippet, &URL_ENCODE)
        ),
        telegram: format!("https://t.me/share/url?text={encoded}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_links_percent_encode_the_text() {
        let links = share_links("🌌 Tonight's Star: Vega\n\nA story");
        assert!(links.whatsapp.starts_with("https://wa.me/?text=%F0%9F%8C%8C"));
        assert!(links.whatsapp.contains("Vega"));
        assert!(!links.whatsapp.contains(' '));
        assert!(links.telegram.starts_with("https://t.me/share/url?text="));
        assert!(links.email.starts_with("mailto:?subject="));
        assert!(links.email.contains("&body="));
    }

    #[test]
    fn tweets_are_capped_at_240_characters_of_story() {
        let long_text = "a".repeat(500);
        let links = share_links(&long_text);
        let tweet = links
            .twitter
            .strip_prefix("https://twitter.com/intent/tweet?text=")
            .unwrap();
        assert_eq!(tweet.len(), 240);

        let short = share_links("short");
        assert!(short.twitter.ends_with("text=short"));
    }
}
