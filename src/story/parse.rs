use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_TITLE: &str = "A Celestial Tale";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("valid regex"));

/// Haiku section with three lines following the heading.
static HAIKU_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)###?\s+(.+?[Hh]aiku.*?)\s*\n\s*(.+?)\s*\n\s*(.+?)\s*\n\s*(.+?)(?:\s*\n\n|\s*$)")
        .expect("valid regex")
});

/// Looser form for models that squeeze the haiku onto one line.
static HAIKU_LOOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)###?\s+(.+?[Hh]aiku.*?)\s*\n\s*(.+?)(?:\s*\n\n|\s*$)").expect("valid regex")
});

/// Pieces extracted from the raw markdown returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStory {
    pub title: String,
    pub body: String,
    pub haiku_title: String,
    /// Newline-joined haiku lines, empty when no haiku section was found.
    pub haiku: String,
    pub full_text: String,
}

/// Splits model output into title, story body and haiku. Never fails; missing
/// sections fall back to [`DEFAULT_TITLE`] and empty strings.
pub fn parse_story(raw: &str) -> ParsedStory {
    let mut body = raw.to_string();

    let title = if let Some(caps) = TITLE_RE.captures(raw) {
        let title = caps[1].trim().to_string();
        body = body.replacen(&caps[0], "", 1);
        title
    } else {
        DEFAULT_TITLE.to_string()
    };

    let mut haiku_title = String::new();
    let mut haiku = String::new();
    if let Some(caps) = HAIKU_BLOCK_RE.captures(raw) {
        haiku_title = caps[1].trim().to_string();
        haiku = format!("{}\n{}\n{}", caps[2].trim(), caps[3].trim(), caps[4].trim());
        body = body.replace(&caps[0], "");
    } else if let Some(caps) = HAIKU_LOOSE_RE.captures(raw) {
        haiku_title = caps[1].trim().to_string();
        haiku = split_haiku_lines(caps[2].trim());
        body = body.replace(&caps[0], "");
    }

    ParsedStory {
        title,
        body: body.trim().to_string(),
        haiku_title,
        haiku,
        full_text: raw.to_string(),
    }
}

/// Recovers three haiku lines from a single run of text, trying `/` then
/// comma separators before plain newlines. Fewer than three lines come back
/// unchanged.
fn split_haiku_lines(text: &str) -> String {
    let lines: Vec<String> = if text.contains('/') {
        text.split('/').map(|part| part.trim().to_string()).collect()
    } else if text.matches(',').count() >= 2 {
        let parts: Vec<&str> = text.split(',').collect();
        vec![
            parts[0].trim().to_string(),
            parts[1].trim().to_string(),
            parts[2..].join(",").trim().to_string(),
        ]
    } else {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    };

    if lines.len() >= 3 {
        lines[..3].join("\n")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "# The Silver Lantern\n\nVega glowed softly over the sleeping town.\n\nThe child waved goodnight.\n\n### Goodnight Haiku\nSilver light above\ndrifting through the quiet dark\nsleep beneath the stars\n";

    #[test]
    fn parses_title_body_and_haiku() {
        let parsed = parse_story(WELL_FORMED);
        assert_eq!(parsed.title, "The Silver Lantern");
        assert_eq!(parsed.haiku_title, "Goodnight Haiku");
        assert_eq!(
            parsed.haiku,
            "Silver light above\ndrifting through the quiet dark\nsleep beneath the stars"
        );
        assert!(parsed.body.starts_with("Vega glowed softly"));
        assert!(parsed.body.ends_with("waved goodnight."));
        assert!(!parsed.body.contains("Haiku"));
        assert_eq!(parsed.full_text, WELL_FORMED);
    }

    #[test]
    fn missing_title_falls_back_to_default() {
        let parsed = parse_story("Just a story without any heading.");
        assert_eq!(parsed.title, DEFAULT_TITLE);
        assert_eq!(parsed.body, "Just a story without any heading.");
        assert!(parsed.haiku.is_empty());
        assert!(parsed.haiku_title.is_empty());
    }

    #[test]
    fn recovers_haiku_written_on_one_line_with_slashes() {
        let raw = "# Notte\n\nStoria breve.\n\n### Haiku della Buonanotte\nstelle lucenti / sopra il mare calmo / dormi sereno\n";
        let parsed = parse_story(raw);
        assert_eq!(parsed.haiku_title, "Haiku della Buonanotte");
        assert_eq!(
            parsed.haiku,
            "stelle lucenti\nsopra il mare calmo\ndormi sereno"
        );
    }

    #[test]
    fn recovers_haiku_written_with_commas() {
        let raw = "# Night\n\nShort story.\n\n### Goodnight Haiku\nstars above the hill, soft wind sings a lullaby, dream until the dawn\n";
        let parsed = parse_story(raw);
        assert_eq!(
            parsed.haiku,
            "stars above the hill\nsoft wind sings a lullaby\ndream until the dawn"
        );
    }

    #[test]
    fn second_level_heading_also_matches_haiku_section() {
        let raw = "# Title\n\nBody text here.\n\n## Goodnight Haiku\nline one is here\nline two is a bit longer\nline three is here\n";
        let parsed = parse_story(raw);
        assert_eq!(parsed.haiku_title, "Goodnight Haiku");
        assert_eq!(parsed.haiku.lines().count(), 3);
    }

    #[test]
    fn split_haiku_lines_keeps_short_fragments_unchanged() {
        assert_eq!(split_haiku_lines("only two / pieces"), "only two / pieces");
    }
}
