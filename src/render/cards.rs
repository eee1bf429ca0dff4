//! Cards for the saved-stories shelf and the dream-canvas gallery.

use crate::clock;
use crate::i18n::{Language, ui_text};
use crate::library::{Postcard, SavedStory};

/// Stories shown on the shelf page. Older saves stay on the shelf but
/// drop out of the list.
const LISTED_STORIES: usize = 10;
/// Canvases shown in the gallery grid.
const LISTED_CANVASES: usize = 20;

fn story_card(story: &SavedStory, index: usize) -> String {
    let title = &story.title;
    let timestamp = &story.timestamp;
    let location = &story.location;
    let lang_flag = story.language.flag();
    let story_html = &story.story_html;

    format!(
        "
<details style='background: linear-gradient(135deg, #1a202c 0%, #2d3748 100%);
                padding: 24px 24px 24px 24px;
                border-radius: 12px;
                border-left: 6px solid #fbbf24;
                cursor: pointer;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
                margin-bottom: 15px;'>
    <summary style='font-size: 1.8rem;
                    font-weight: bold;
                    color: #fbbf24;
                    cursor: pointer;
                    list-style: none;'>
        <span style='color: #a0aec0; font-size: 1.35rem;'>Story #{index}</span> · {title}
    </summary>
    <div style='margin-top: 24px; padding-top: 24px; border-top: 1px solid #4a5568;'>
        <p style='color: #a0aec0; font-size: 1.35rem; margin-bottom: 18px;'>
            📅 {timestamp} | 📍 {location} | {lang_flag}
        </p>
        <div style='color: #e2e8f0; font-size: 1.5rem; line-height: 2rem;'>
            {story_html}
        </div>
    </div>
</details>
"
    )
}

/// Renders the saved-stories shelf as expandable cards, newest first.
pub fn saved_stories_list(stories: &[SavedStory], language: Language) -> String {
    let text = ui_text(language);
    if stories.is_empty() {
        return format!(
            "<h2 style='color: #fbbf24; font-size: 3rem;'>{}</h2><p style='color: #a0aec0; font-style: italic; font-size: 1.5rem;'>{}</p>",
            text.tab_saved, text.saved_empty
        );
    }

    let mut html = format!(
        "<h2 style='color: #fbbf24; margin-bottom: 20px; font-size: 3rem;'>{}</h2>\n",
        text.tab_saved
    );
    for (i, story) in stories.iter().take(LISTED_STORIES).enumerate() {
        html.push_str(&story_card(story, i + 1));
    }
    html
}

fn canvas_card(canvas: &Postcard, index: usize) -> String {
    let title: String = canvas.title.chars().take(50).collect();
    let ellipsis = if canvas.title.chars().count() > 50 {
        "..."
    } else {
        ""
    };
    let timestamp = &canvas.timestamp;
    let location = &canvas.location;
    let lang_flag = canvas.language.flag();

    format!(
        "
<div style='background: linear-gradient(135deg, #1a202c 0%, #2d3748 100%);
            padding: 25px;
            border-radius: 12px;
            border: 3px solid #fbbf24;
            box-shadow: 0 4px 6px rgba(251, 191, 36, 0.2);'>
    <h3 style='color: #fbbf24; font-size: 2rem; margin: 0 0 15px 0;'>🎨 Dream Canvas #{index}</h3>
    <p style='color: #3dffa2; font-size: 1.5rem; font-weight: bold; margin: 10px 0;'>{title}{ellipsis}</p>
    <div style='border-top: 1px solid #fbbf24; margin: 15px 0; padding-top: 15px;'>
        <p style='color: #a0aec0; font-size: 1.3rem; margin: 8px 0;'>📍 {location}</p>
        <p style='color: #94a3b8; font-size: 1.2rem; margin: 8px 0;'>📅 {timestamp}</p>
        <p style='color: #94a3b8; font-size: 1.2rem; margin: 8px 0;'>🌐 {lang_flag}</p>
    </div>
</div>
"
    )
}

/// Renders the dream-canvas gallery grid, newest first.
pub fn postcards_gallery(postcards: &[Postcard], language: Language) -> String {
    let text = ui_text(language);
    if postcards.is_empty() {
        return format!(
            "<h2 style='color: #fbbf24; font-size: 3rem;'>{}</h2><p style='color: #a0aec0; font-style: italic; font-size: 1.5rem;'>{}</p>",
            text.tab_postcards, text.postcards_empty
        );
    }

    let mut html = format!(
        "<h2 style='color: #fbbf24; font-size: 3rem; margin-bottom: 20px;'>{}</h2>\n",
        text.tab_postcards
    );
    html.push_str(&format!(
        "<p style='color: #94a3b8; font-size: 1.3rem; margin-bottom: 20px;'>{}</p>\n",
        gallery_message(language)
    ));
    html.push_str(
        "<div style='display: grid; grid-template-columns: repeat(auto-fit, minmax(350px, 1fr)); gap: 20px;'>\n",
    );
    for (i, postcard) in postcards.iter().take(LISTED_CANVASES).enumerate() {
        html.push_str(&canvas_card(postcard, i + 1));
    }
    html.push_str("</div>");
    html
}

/// Confirmation card shown right after a dream canvas is created.
pub fn canvas_preview(canvas: &Postcard, language: Language) -> String {
    let (created, view_tab) = preview_texts(language);
    let title: String = canvas.title.chars().take(50).collect();
    let location = &canvas.location;
    let date_str = clock::today();
    let lang_flag = language.flag();

    format!(
        "
        <div style='background: linear-gradient(135deg, #0b0b14 0%, #1a1a24 100%);
                    border: 3px solid #fbbf24;
                    border-radius: 12px;
                    padding: 30px;
                    text-align: center;
                    max-width: 400px;
                    margin: 0 auto;'>
            <h2 style='color: #fbbf24; font-size: 2em; margin-bottom: 15px;'>{created}</h2>
            <h3 style='color: #3dffa2; font-size: 1.5em; margin-bottom: 20px;'>{title}...</h3>
            <p style='color: #94a3b8; font-size: 1.2em; margin: 10px 0;'>📍 {location}</p>
            <p style='color: #94a3b8; font-size: 1.1em;'>{date_str} • {lang_flag}</p>
            <p style='color: #3dffa2; font-size: 1.4em; font-weight: bold; margin-top: 20px;'>{view_tab}</p>
        </div>
        "
    )
}

fn gallery_message(language: Language) -> &'static str {
    match language {
        Language::En => "💭 Download your Dream Canvas and draw what you dreamed tonight!",
        Language::It => "💭 Scarica la tua Tela dei Sogni e disegna quello che hai sognato stanotte!",
        Language::Fr => "💭 Téléchargez votre Toile de Rêves et dessinez ce dont vous avez rêvé ce soir!",
        Language::Es => "💭 ¡Descarga tu Lienzo de Sueños y dibuja lo que soñaste esta noche!",
    }
}

fn preview_texts(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::En => (
            "🎨 Dream Canvas Created! 💭",
            "→ Go to Dream Canvas tab to download! 📥",
        ),
        Language::It => (
            "🎨 Tela dei Sogni Creata! 💭",
            "→ Vai al tab Tela dei Sogni per scaricare! 📥",
        ),
        Language::Fr => (
            "🎨 Toile de Rêves Créée! 💭",
            "→ Aller à l'onglet Toile de Rêves pour télécharger! 📥",
        ),
        Language::Es => (
            "🎨 Lienzo de Sueños Creado! 💭",
            "→ Ir a pestaña Lienzo de Sueños para descargar! 📥",
        ),
    }
}
