//! Standalone HTML documents served by the download endpoints: a
//! printable story page and the dream-canvas sheet children print and
//! draw on. Both are complete documents with embedded styles so they
//! work as plain files, and both carry `@media print` rules.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::i18n::Language;
use crate::library::{Postcard, SavedStory};

/// Finds the haiku box inside a rendered story: an `<h3>` headed by the
/// 🌸 marker followed by the `<div>` of haiku lines.
static HAIKU_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h3[^>]*>🌸[^<]*</h3>\s*<div[^>]*>(.*?)</div>").expect("valid regex")
});
static HAIKU_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p[^>]*>(.*?)</p>").expect("valid regex"));

/// Renders a saved story as a printable page.
pub fn printable_story_document(story: &SavedStory) -> String {
    let lang = story.language.code();
    let title = &story.title;
    let timestamp = &story.timestamp;
    let location = &story.location;
    let story_html = &story.story_html;

    let img_tag = match &story.image_url {
        Some(url) if !url.is_empty() => format!(
            r#"<img src="{url}" alt="{title}" class="story-image" onerror="this.style.display='none'">"#
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            background: linear-gradient(135deg, #0f172a 0%, #1e293b 100%);
            color: #e2e8f0;
            padding: 40px 20px;
            line-height: 1.8;
        }}

        .container {{
            max-width: 800px;
            margin: 0 auto;
            background: #1e293b;
            border-radius: 16px;
            padding: 40px;
            box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5);
            border: 2px solid #fbbf24;
        }}

        .header {{
            text-align: center;
            margin-bottom: 30px;
            padding-bottom: 20px;
            border-bottom: 2px solid #fbbf24;
        }}

        .header h1 {{
            font-size: 2.5rem;
            color: #fbbf24;
            margin-bottom: 15px;
        }}

        .meta {{
            color: #94a3b8;
            font-size: 1.1rem;
            margin-bottom: 10px;
        }}

        .story-image {{
            width: 100%;
            max-width: 600px;
            height: auto;
            border-radius: 12px;
            margin: 30px auto;
            display: block;
            border: 3px solid #fbbf24;
        }}

        .story-content {{
            font-size: 1.3rem;
            line-height: 2.2rem;
            color: #e2e8f0;
        }}

        .story-content h1,
        .story-content h2,
        .story-content h3 {{
            color: #fbbf24;
            margin: 25px 0 15px 0;
        }}

        .story-content p {{
            margin-bottom: 20px;
        }}

        .footer {{
            text-align: center;
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid #4a5568;
            color: #94a3b8;
            font-size: 1rem;
        }}

        @media print {{
            body {{
                background: white;
                color: black;
                padding: 0;
            }}

            .container {{
                background: white;
                border: none;
                box-shadow: none;
                padding: 20px;
            }}

            .header h1 {{
                color: #d97706;
            }}

            .story-content h1,
            .story-content h2,
            .story-content h3 {{
                color: #d97706;
            }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🌌 {title} 🔭</h1>
            <p class="meta">📅 {timestamp}</p>
            <p class="meta">📍 {location}</p>
        </div>

        {img_tag}

        <div class="story-content">
            {story_html}
        </div>

        <div class="footer">
            ⭐ Generated with Stellina ⭐
        </div>
    </div>
</body>
</html>"#
    )
}

/// Renders a postcard as the printable dream-canvas sheet: a golden
/// frame around a blank drawing area, with the story's haiku underneath
/// as a reminder of the dream.
pub fn dream_canvas_document(canvas: &Postcard) -> String {
    let lang = canvas.language.code();
    let title = &canvas.title;
    let location = &canvas.location;
    let timestamp = &canvas.timestamp;
    let header = canvas_header(canvas.language);
    let haiku_html_lines = extract_haiku_lines(&canvas.story_html);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dream Canvas - {title}</title>
    <style>
        @page {{
            size: A4;
            margin: 0;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: system-ui, -apple-system, 'Segoe UI', Arial, sans-serif;
            background: white;
            width: 210mm;
            min-height: 297mm;
            margin: 0 auto;
            padding: 20px;
            position: relative;
            display: flex;
            flex-direction: column;
        }}

        .corner-emoji {{
            position: absolute;
            font-size: 3rem;
            line-height: 1;
        }}

        .corner-tl {{ top: 5px; left: 5px; }}
        .corner-tr {{ top: 5px; right: 5px; }}
        .corner-bl {{ bottom: 5px; left: 5px; }}
        .corner-br {{ bottom: 5px; right: 5px; }}

        .header {{
            text-align: center;
            color: #fbbf24;
            font-size: 2.5rem;
            font-weight: bold;
            margin: 40px 0 20px 0;
            white-space: nowrap;
        }}

        .title {{
            text-align: center;
            color: #1a202c;
            font-size: 2rem;
            font-weight: bold;
            margin-bottom: 30px;
            white-space: nowrap;
            overflow: hidden;
            text-overflow: ellipsis;
        }}

        .drawing-area {{
            border: 8px solid #fbbf24;
            min-height: 650px;
            flex-grow: 1;
            margin: 20px 40px;
            background: white;
            page-break-inside: avoid;
        }}

        .haiku-section {{
            text-align: center;
            margin: 30px 40px;
        }}

        .haiku-text {{
            font-size: 1.8rem;
            color: #4a5568;
            font-style: italic;
            line-height: 1.6;
        }}

        .footer {{
            text-align: center;
            color: #94a3b8;
            font-size: 1rem;
            margin-top: auto;
            padding-bottom: 10px;
        }}

        @media print {{
            body {{
                width: 210mm;
                height: 297mm;
                margin: 0;
                padding: 20px;
            }}

            .drawing-area {{
                min-height: 700px;
            }}
        }}
    </style>
</head>
<body>
    <div class="corner-emoji corner-tl">⭐</div>
    <div class="corner-emoji corner-tr">✨</div>
    <div class="corner-emoji corner-bl">✨</div>
    <div class="corner-emoji corner-br">⭐</div>

    <div class="header">🌌 {header} 🔭</div>

    <div class="title">{title}</div>

    <div class="drawing-area"></div>

    <div class="haiku-section">
        <div class="haiku-text">{haiku_html_lines}</div>
    </div>

    <div class="footer">
        📍 {location} • {timestamp}
    </div>
</body>
</html>"#
    )
}

/// Pulls the haiku lines back out of a rendered story, joined by `<br>`.
/// Empty when the story carries no haiku box.
fn extract_haiku_lines(story_html: &str) -> String {
    let Some(section) = HAIKU_SECTION_RE.captures(story_html) else {
        warn!("Haiku not found in story HTML");
        return String::new();
    };

    let lines: Vec<&str> = HAIKU_LINE_RE
        .captures_iter(&section[1])
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    info!("Haiku extracted: {} lines", lines.len());
    lines.join("<br>")
}

fn canvas_header(language: Language) -> &'static str {
    match language {
        Language::En => "Stellina Dream Canvas",
        Language::It => "Tela dei Sogni Stellina",
        Language::Fr => "Toile de Rêves Stellina",
        Language::Es => "Lienzo de Sueños Stellina",
    }
}
