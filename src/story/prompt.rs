use super::provider::StoryRequest;

/// Instructions sent to Gemini. Placeholders are filled by [`build_prompt`];
/// `{language}` appears several times and every occurrence is replaced.
const STORY_PROMPT_TEMPLATE: &str = r#"
You are a gentle storyteller creating a bedtime story for young children about a celestial object they can see tonight.

CELESTIAL OBJECT: {object_name}
TYPE: {object_type}
VISIBLE FROM: {location}
SCIENTIFIC FACTS: {scientific_facts}

TARGET LANGUAGE: {language}
CRITICAL: Write the ENTIRE story in {language} - every word, every title, everything.

STORY STRUCTURE:

Write a gentle bedtime story with these elements:

1. OPENING (2-3 sentences)
   - A child looking at the night sky
   - The celestial object begins to speak or appears magical
   - Tone: wonder, gentleness, invitation

2. MAIN STORY (3-5 paragraphs)
   - The celestial object shares its story
   - Weave in 1-2 scientific facts poetically (e.g., "I'm so big that 1,300 Earths could fit inside me")
   - Express themes: beauty of nature, connection, dreams, patience, wonder
   - The child and celestial object have a gentle dialogue or shared moment

3. CLOSING (1-2 sentences)
   - Reassuring promise: "I'll be here tomorrow night"
   - Peaceful ending for sleep

4. HAIKU (3 lines)
   - Title the section "Goodnight Haiku" (in {language})
   - Italian: 5-7-5 syllables ±1
   - Other languages: short-long-short rhythm
   - Capture the gentle emotion of the story

STYLE:
- Simple, poetic language for ages 2-8
- Calm, warm, loving tone
- NO fear, violence, sadness, or scary elements
- Natural imagery: sky, stars, light, dreams, gentle wind
- Readable in 60-90 seconds
- Like a lullaby in story form

FORMAT AS MARKDOWN:
# [Beautiful Story Title in {language}]

[Story text flowing naturally, without section headers]

### [Goodnight Haiku Title in {language}]
[haiku line 1]
[haiku line 2]
[haiku line 3]

IMPORTANT:
- Everything in {language} - no mixing languages
- Sweet, magical, reassuring
- Perfect for bedtime
"#;

pub fn build_prompt(request: &StoryRequest) -> String {
    STORY_PROMPT_TEMPLATE
        .replace("{object_name}", &request.object_name)
        .replace("{object_type}", request.kind.as_str())
        .replace("{location}", &request.location)
        .replace("{scientific_facts}", &request.scientific_facts)
        .replace("{language}", request.language.display_name())
}
