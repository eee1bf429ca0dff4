//! Bedtime story generation: prompt building, the Gemini storyteller, parsing
//! of model output, a child-safety blocklist and pre-written fallback tales.

mod facts;
mod fallback;
mod gemini;
mod parse;
mod prompt;
mod provider;
mod safety;

pub use facts::fun_facts;
pub use fallback::fallback_story;
pub use gemini::GeminiStoryteller;
pub use parse::{DEFAULT_TITLE, ParsedStory, parse_story};
pub use provider::{StoryRequest, Storyteller, StorytellerError, StorytellerResult};
pub use safety::is_text_safe;

use tracing::{error, info, warn};

use crate::i18n::Language;

/// Target syllables per haiku line, 5-7-5 with one syllable of slack each way.
const HAIKU_SYLLABLE_BOUNDS: [(usize, usize); 3] = [(4, 6), (6, 8), (4, 6)];

const VOWELS: &str = "aeiouyàáâäèéêëìíîïòóôöùúûü";

/// A finished bedtime story in one language.
#[derive(Debug, Clone)]
pub struct Story {
    pub title: String,
    pub body: String,
    pub haiku_title: String,
    /// Newline-joined haiku lines, empty when the model skipped the haiku.
    pub haiku: String,
    pub full_text: String,
    pub language: Language,
    /// True when this is a pre-written tale rather than model output.
    pub fallback: bool,
}

/// Asks the storyteller for a tale and post-processes the answer. Any failure,
/// including unsafe content, degrades to the pre-written fallback story so the
/// caller always gets something to read.
pub async fn generate_story<S: Storyteller>(teller: &S, request: &StoryRequest) -> Story {
    info!(
        "Generating story: {} ({}) in {}",
        request.object_name,
        request.kind.as_str(),
        request.language
    );

    match teller.tell(request).await {
        Ok(raw) => story_from_response(request, &raw),
        Err(err) => {
            error!("Story generation failed: {err}");
            fallback::fallback_story(&request.object_name, request.language)
        }
    }
}

fn story_from_response(request: &StoryRequest, raw: &str) -> Story {
    let parsed = parse::parse_story(raw);

    if !parsed.haiku.is_empty() && !validate_haiku(&parsed.haiku) {
        warn!("Haiku validation failed for language {}", request.language);
    }

    if !safety::is_text_safe(&parsed.full_text) {
        error!("Story contains unsafe content! Returning fallback.");
        return fallback::fallback_story(&request.object_name, request.language);
    }

    info!(
        "Story generated successfully ({} chars)",
        raw.chars().count()
    );
    Story {
        title: parsed.title,
        body: parsed.body,
        haiku_title: parsed.haiku_title,
        haiku: parsed.haiku,
        full_text: parsed.full_text,
        language: request.language,
        fallback: false,
    }
}

/// Checks that a haiku has exactly three lines. Syllable counts outside
/// [`HAIKU_SYLLABLE_BOUNDS`] are only warned about, since the estimate is
/// rough for non-English text.
pub fn validate_haiku(haiku: &str) -> bool {
    let lines: Vec<&str> = haiku
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != 3 {
        warn!("Haiku must have 3 lines, got {}", lines.len());
        return false;
    }

    for (i, (line, (min, max))) in lines.iter().zip(HAIKU_SYLLABLE_BOUNDS).enumerate() {
        let syllables = estimate_syllables(line);
        if syllables < min || syllables > max {
            warn!(
                "Haiku line {}: {} syllables (expected {}-{})",
                i + 1,
                syllables,
                min,
                max
            );
        }
    }

    true
}

/// Counts vowel groups per word, with a floor of one syllable per word.
fn estimate_syllables(line: &str) -> usize {
    let mut total = 0;
    for word in line.split_whitespace() {
        let mut groups = 0;
        let mut prev_vowel = false;
        for ch in word.to_lowercase().chars() {
            let is_vowel = VOWELS.contains(ch);
            if is_vowel && !prev_vowel {
                groups += 1;
            }
            prev_vowel = is_vowel;
        }
        total += groups.max(1);
    }
    total
}

/// Plain-text rendition of a story for social sharing.
pub fn format_story_for_sharing(story: &Story, object_name: &str, location: &str) -> String {
    let mut share_text = format!("🌌 {}\n\n", story.title);

    let preview: String = story.body.chars().take(200).collect();
    share_text.push_str(&format!("{preview}...\n\n"));

    if !story.haiku.is_empty() {
        share_text.push_str(&format!("✨ Haiku:\n{}\n\n", story.haiku));
    }

    share_text.push_str(&format!("📍 Seen from: {location}\n"));
    share_text.push_str(&format!("⭐ Tonight's star: {object_name}\n\n"));
    share_text.push_str("🌟 Generated by Stellina\n");
    share_text.push_str("#astronomy #bedtimestories #AI");

    share_text
}
