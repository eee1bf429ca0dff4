//! Turns a generated story into the HTML panel the UI shows: the tale
//! itself, the location banner, tonight's fun facts, and the info bar.

use std::sync::LazyLock;

use regex::Regex;

use crate::clock;
use crate::geo::Place;
use crate::i18n::{Language, did_you_know_title, ui_text};
use crate::story::Story;

/// Looser haiku pattern than the response parser: tolerates a missing
/// space after the `#` markers, so a haiku the parser skipped can still
/// be pulled out of the body at render time.
static DISPLAY_HAIKU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)###?\s*(.+?[Hh]aiku.*?)\s*\n\s*(.+?)(?:\n\n|$)").expect("valid regex")
});

/// Renders the story title, body paragraphs, and haiku box.
pub fn format_story_for_display(story: &Story) -> String {
    let title_html = format!(
        "<h1 style='color: #fbbf24; font-size: 2.5em; margin-bottom: 20px;'>{}</h1>\n\n",
        story.title
    );

    let mut body = story.body.clone();
    let mut haiku_title = story.haiku_title.clone();
    let mut haiku = story.haiku.clone();

    if haiku.is_empty() {
        let rescued = DISPLAY_HAIKU_RE.captures(&body).map(|caps| {
            (
                caps[0].to_string(),
                caps[1].trim().to_string(),
                caps[2].trim().to_string(),
            )
        });
        if let Some((matched, rescued_title, content)) = rescued {
            haiku_title = rescued_title;
            let lines: Vec<&str> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            haiku = if lines.len() >= 3 {
                lines[..3].join("\n")
            } else {
                content
            };
            body = body.replace(&matched, "").trim().to_string();
        }
    }

    let mut body_html = String::new();
    for para in body.split("\n\n") {
        let para = para.trim();
        if !para.is_empty() && !para.starts_with('#') {
            body_html.push_str(&format!(
                "<p style='font-size: 1.1em; line-height: 1.8; margin-bottom: 16px; color: #e2e8f0;'>{para}</p>\n\n"
            ));
        }
    }

    let mut haiku_html = String::new();
    if !haiku.is_empty() {
        if haiku_title.is_empty() {
            haiku_title = "Goodnight Haiku".to_string();
        }
        haiku_html.push_str(
            "\n<div style='background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 24px; border-radius: 12px; margin: 30px 0; text-align: center; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);'>\n",
        );
        haiku_html.push_str(&format!(
            "    <h3 style='color: #fbbf24; margin-bottom: 16px; font-size: 1.3em;'>🌸 {haiku_title}</h3>\n"
        ));
        haiku_html.push_str(
            "    <div style='color: white; font-style: italic; font-size: 1.1em; line-height: 1.8;'>\n",
        );
        for line in haiku.lines() {
            let line = line.trim();
            if !line.is_empty() {
                haiku_html.push_str(&format!("        <p style='margin: 8px 0;'>{line}</p>\n"));
            }
        }
        haiku_html.push_str("    </div>\n</div>\n");
    }

    format!("{title_html}{body_html}{haiku_html}")
}

/// Assembles the full story panel: location banner, story, fun facts,
/// and the generation info bar.
pub fn story_view(story: &Story, place: &Place, language: Language, facts: &[&str]) -> String {
    let text = ui_text(language);

    let location_html = format!(
        "\n<div style='background: linear-gradient(135deg, #1a202c 0%, #2d3748 100%); padding: 16px 24px; border-radius: 8px; margin-bottom: 20px; border-left: 4px solid #fbbf24;'>\n    <p style='margin: 0; color: #fbbf24; font-size: 1.1em;'>📍 {} <strong>{}</strong> <span style='color: #a0aec0;'>({:.1} N, {:.1} W)</span></p>\n</div>\n",
        text.tonight_sky_from, place.name, place.latitude, place.longitude
    );

    let story_html = format_story_for_display(story);

    let mut fun_facts_html = format!(
        "\n<hr style='margin: 30px 0; border: none; border-top: 1px solid #4a5568;'>\n<h3 style='color: #fbbf24; font-size: 1.5em; margin-bottom: 16px;'>{}</h3>\n",
        did_you_know_title(language)
    );
    for fact in facts {
        fun_facts_html.push_str(&format!(
            "<p style='font-size: 1em; line-height: 1.6; margin-bottom: 12px; color: #e2e8f0;'>✨ {fact}</p>\n"
        ));
    }

    let info_bar = format!(
        "\n<hr style='margin: 30px 0; border: none; border-top: 1px solid #4a5568;'>\n<div style='background: linear-gradient(135deg, #1e3a5f 0%, #2d1b4e 100%); padding: 12px 20px; border-radius: 8px; margin-top: 20px; font-size: 0.9em; color: #a0aec0;'>\n📍 <strong>{}:</strong> {} | 🌐 <strong>{}:</strong> {} | 📅 <strong>{}:</strong> {}\n</div>\n",
        text.info_location,
        place.name,
        text.info_language,
        language.display_name(),
        text.info_generated,
        clock::info_bar_timestamp()
    );

    format!("{location_html}\n{story_html}\n{fun_facts_html}\n{info_bar}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::fun_facts;

    fn story(title: &str, body: &str, haiku_title: &str, haiku: &str) -> Story {
        Story {
            title: title.to_string(),
            body: body.to_string(),
            haiku_title: haiku_title.to_string(),
            haiku: haiku.to_string(),
            full_text: format!("# {title}\n\n{body}"),
            language: Language::En,
            fallback: false,
        }
    }

    #[test]
    fn renders_title_paragraphs_and_haiku() {
        let story = story(
            "Luna's Lullaby",
            "Once upon a time.",
            "Goodnight Haiku",
            "Soft moonlight\nfalls on sleepy hills\ndream, little one",
        );

        insta::assert_snapshot!(format_story_for_display(&story), @r"
<h1 style='color: #fbbf24; font-size: 2.5em; margin-bottom: 20px;'>Luna's Lullaby</h1>

<p style='font-size: 1.1em; line-height: 1.8; margin-bottom: 16px; color: #e2e8f0;'>Once upon a time.</p>


<div style='background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 24px; border-radius: 12px; margin: 30px 0; text-align: center; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);'>
    <h3 style='color: #fbbf24; margin-bottom: 16px; font-size: 1.3em;'>🌸 Goodnight Haiku</h3>
    <div style='color: white; font-style: italic; font-size: 1.1em; line-height: 1.8;'>
        <p style='margin: 8px 0;'>Soft moonlight</p>
        <p style='margin: 8px 0;'>falls on sleepy hills</p>
        <p style='margin: 8px 0;'>dream, little one</p>
    </div>
</div>
");
    }

    #[test]
    fn rescues_a_haiku_the_parser_missed() {
        let story = story(
            "Vega's Voyage",
            "A story paragraph.\n\n###Goodnight Haiku\nBright star above\nwatching over the valley\nsleep comes gently now",
            "",
            "",
        );

        let html = format_story_for_display(&story);
        assert!(html.contains("🌸 Goodnight Haiku"));
        assert!(html.contains("<p style='margin: 8px 0;'>Bright star above</p>"));
        assert!(html.contains("sleep comes gently now"));
        // The rescued block must not leak into the body paragraphs.
        assert!(!html.contains("color: #e2e8f0;'>###"));
    }

    #[test]
    fn skips_markdown_headings_in_the_body() {
        let story = story(
            "Title",
            "## Section heading\n\nA real paragraph.",
            "",
            "",
        );

        let html = format_story_for_display(&story);
        assert!(html.contains(">A real paragraph.</p>"));
        assert!(!html.contains("Section heading</p>"));
        assert!(!html.contains("🌸"));
    }

    #[test]
    fn defaults_the_haiku_box_title() {
        let story = story("Title", "Body.", "", "one\ntwo\nthree");
        assert!(format_story_for_display(&story).contains("🌸 Goodnight Haiku"));
    }

    #[test]
    fn story_view_wraps_the_tale_with_banner_facts_and_info_bar() {
        let story = story("Title", "Body.", "", "");
        let place = Place {
            name: "Rome, Italy".to_string(),
            latitude: 41.8931,
            longitude: 12.4828,
        };
        let facts = fun_facts("Vega", Language::En);

        let html = story_view(&story, &place, Language::En, &facts);
        assert!(html.contains("📍 Tonight's sky from <strong>Rome, Italy</strong>"));
        assert!(html.contains("(41.9 N, 12.5 W)"));
        assert!(html.contains("💡 Did You Know?"));
        assert!(html.contains(&format!("✨ {}", facts[0])));
        assert!(html.contains("📍 <strong>Location:</strong> Rome, Italy"));
        assert!(html.contains("🌐 <strong>Language:</strong> English"));
        assert!(html.contains("📅 <strong>Generated:</strong>"));
    }
}
