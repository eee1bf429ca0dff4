//! The single-page shell: localized markup, the starfield/aurora
//! styling, and a small script that drives the JSON API. Language
//! switching is a plain page reload with `?lang=`.

use crate::i18n::{Language, about_content, dictionary_terms, ui_text};

/* Colors and animations follow the night-sky theme: arctic background,
   gold accents, aurora gradients on the title and buttons. */
const PAGE_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Fredoka:wght@400;500;600;700&display=swap');

:root {
    --arctic: #0b0b14;
    --polar: #162447;
    --aurora-green: #3dffa2;
    --aurora-teal: #2dd4bf;
    --aurora-purple: #a78bfa;
    --aurora-pink: #f472b6;
    --snow: #f1f5f9;
    --ice: #94a3b8;
    --gold: #fbbf24;
}

body {
    position: relative;
    background: radial-gradient(ellipse at bottom, #1b2735 0%, #090a0f 100%);
    font-family: 'Fredoka', sans-serif;
    color: var(--snow);
    min-height: 100vh;
    margin: 0;
    overflow-x: hidden;
}

/* Fixed twinkling stars behind everything */
body::before {
    content: "";
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background-image:
        radial-gradient(2px 2px at 20px 30px, white, transparent),
        radial-gradient(2px 2px at 60px 70px, white, transparent),
        radial-gradient(1px 1px at 50px 50px, white, transparent),
        radial-gradient(1px 1px at 130px 80px, white, transparent),
        radial-gradient(2px 2px at 90px 10px, white, transparent),
        radial-gradient(1px 1px at 200px 150px, white, transparent),
        radial-gradient(1px 1px at 300px 50px, white, transparent),
        radial-gradient(2px 2px at 250px 200px, white, transparent),
        radial-gradient(1px 1px at 400px 30px, white, transparent),
        radial-gradient(1px 1px at 180px 180px, white, transparent);
    background-size: 450px 300px;
    background-repeat: repeat;
    opacity: 0.5;
    animation: twinkle-stars 8s ease-in-out infinite;
    pointer-events: none;
    z-index: 0;
}

@keyframes twinkle-stars {
    0%, 100% { opacity: 0.4; }
    50% { opacity: 0.8; }
}

/* Slow rotation of the whole sky */
body::after {
    content: "";
    position: fixed;
    top: -50%;
    left: -50%;
    width: 200%;
    height: 200%;
    background: radial-gradient(circle, transparent 20%, #0b0b14 80%);
    animation: rotate-sky 300s linear infinite;
    pointer-events: none;
    z-index: 0;
}

@keyframes rotate-sky {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

.page {
    position: relative;
    z-index: 1;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 20px 40px 20px;
}

.app-title {
    font-family: 'Fredoka', sans-serif;
    font-size: 5.5rem;
    font-weight: 700;
    text-align: center;
    letter-spacing: -0.5px;
    margin: 40px 0 20px 0;
    background: linear-gradient(
        120deg,
        #94a3b8,
        #3dffa2,
        #2dd4bf,
        #a78bfa,
        #94a3b8
    );
    background-size: 200% 100%;
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
    animation:
        aurora-breathe 5s ease-in-out infinite,
        gentle-opacity 8s ease-in-out infinite;
}

.app-title .emoji {
    -webkit-text-fill-color: #94a3b8;
    background: none;
    opacity: 0.7;
    font-size: 0.9em;
    margin-left: 0.2em;
}

@keyframes aurora-breathe {
    0%, 100% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
}

@keyframes gentle-opacity {
    0%, 100% { opacity: 0.85; }
    50% { opacity: 1; }
}

.subtitle {
    text-align: center;
    color: var(--gold);
    font-size: 1.95rem;
    font-weight: 600;
    margin-bottom: 10px;
}

.subsubtitle {
    text-align: center;
    color: var(--ice);
    font-size: 1.65rem;
    font-style: italic;
    margin-bottom: 30px;
}

.lang-flags {
    display: flex;
    justify-content: center;
    gap: 20px;
    margin-bottom: 30px;
}

.lang-flags a {
    font-size: 2.5rem;
    text-decoration: none;
    background: transparent;
    border: 2px solid transparent;
    border-radius: 12px;
    padding: 8px 12px;
    cursor: pointer;
    transition: all 0.3s ease;
}

.lang-flags a:hover {
    background: rgba(61, 255, 162, 0.1);
    border-color: var(--aurora-green);
    transform: scale(1.1);
}

.lang-flags a.active {
    border-color: var(--aurora-green);
}

.tabs {
    display: flex;
    flex-wrap: wrap;
    gap: 4px;
    border-bottom: 1px solid rgba(61, 255, 162, 0.2);
    margin-bottom: 30px;
}

.tabs button {
    font-size: 1.5rem;
    padding: 16px 28px;
    font-weight: 600;
    font-family: 'Fredoka', sans-serif;
    border-radius: 12px 12px 0 0;
    border: none;
    background: transparent;
    color: var(--snow);
    cursor: pointer;
    transition: all 0.3s ease;
}

.tabs button.active {
    background: rgba(61, 255, 162, 0.2);
    border-bottom: 3px solid var(--aurora-green);
}

.tab-panel {
    display: none;
}

.tab-panel.active {
    display: block;
}

.columns {
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 30px;
    align-items: start;
}

.input-panel {
    background: rgba(22, 36, 71, 0.7);
    border-radius: 20px;
    padding: 30px;
    border: 1px solid rgba(61, 255, 162, 0.3);
    backdrop-filter: blur(15px);
    box-shadow: 0 10px 40px rgba(61, 255, 162, 0.15);
}

.location-label {
    font-size: 1.95rem;
    font-weight: 700;
    color: var(--snow);
    text-align: center;
    margin-bottom: 15px;
}

.location-input {
    width: 100%;
    box-sizing: border-box;
    font-size: 1.5rem;
    font-family: 'Fredoka', sans-serif;
    padding: 14px 18px;
    border-radius: 12px;
    border: 1px solid rgba(61, 255, 162, 0.3);
    background: rgba(11, 11, 20, 0.8);
    color: var(--snow);
}

.location-hint {
    text-align: center;
    color: var(--ice);
    font-size: 1.2rem;
    margin: 12px 0 0 0;
}

.generate-btn {
    background: linear-gradient(135deg, var(--aurora-green) 0%, var(--aurora-teal) 100%);
    border: none;
    border-radius: 15px;
    padding: 22px 50px;
    font-size: 1.95rem;
    font-weight: 800;
    font-family: 'Fredoka', sans-serif;
    color: var(--arctic);
    width: 100%;
    margin-top: 20px;
    box-shadow: 0 8px 25px rgba(61, 255, 162, 0.4);
    transition: all 0.3s ease;
    cursor: pointer;
}

.generate-btn:hover {
    transform: translateY(-3px);
    box-shadow: 0 12px 35px rgba(61, 255, 162, 0.5);
}

.quick-actions {
    color: var(--snow);
    font-size: 1.6rem;
    margin: 25px 0 5px 0;
}

.save-btn {
    background: linear-gradient(135deg, var(--aurora-pink) 0%, var(--aurora-purple) 100%);
    border: none;
    color: white;
    border-radius: 12px;
    padding: 15px 30px;
    font-size: 1.5rem;
    font-family: 'Fredoka', sans-serif;
    width: 100%;
    margin: 8px 0;
    transition: all 0.3s ease;
    cursor: pointer;
}

.save-btn:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(244, 114, 182, 0.4);
}

.postcard-btn {
    background: linear-gradient(135deg, var(--aurora-purple) 0%, #6366f1 100%);
    border: none;
    color: white;
    border-radius: 12px;
    padding: 15px 30px;
    font-size: 1.5rem;
    font-family: 'Fredoka', sans-serif;
    width: 100%;
    margin: 8px 0;
    transition: all 0.3s ease;
    cursor: pointer;
}

.postcard-btn:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(167, 139, 250, 0.4);
}

.activity-log-container {
    background: rgba(11, 11, 20, 0.8);
    border: 1px solid rgba(61, 255, 162, 0.2);
    border-radius: 12px;
    padding: 12px 18px;
    margin-bottom: 20px;
}

.activity-log-container summary {
    font-size: 1.4rem;
    color: var(--aurora-green);
    cursor: pointer;
}

.activity-log {
    font-size: 1.1rem;
    line-height: 1.7;
    color: var(--ice);
    white-space: pre-wrap;
    margin: 12px 0 0 0;
}

.waiting-container {
    text-align: center;
    padding: 80px 50px;
    background: rgba(22, 36, 71, 0.5);
    border-radius: 20px;
    border: 1px dashed rgba(61, 255, 162, 0.3);
    backdrop-filter: blur(10px);
}

.waiting-icon {
    font-size: 6rem;
    margin-bottom: 30px;
    animation: float 3s ease-in-out infinite;
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-15px); }
}

.waiting-title {
    font-size: 2.4rem;
    color: var(--gold);
    font-weight: 700;
    margin-bottom: 15px;
}

.waiting-subtitle {
    font-size: 1.65rem;
    color: var(--ice);
    font-style: italic;
}

.story-content {
    background: rgba(22, 36, 71, 0.6);
    border-radius: 20px;
    padding: 40px;
    border: 1px solid rgba(61, 255, 162, 0.2);
    backdrop-filter: blur(15px);
    font-size: 1.5rem;
    line-height: 1.8;
}

.story-content .story-image {
    width: 100%;
    border-radius: 12px;
    border: 2px solid rgba(251, 191, 36, 0.5);
    margin-bottom: 25px;
}

.share-row {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
    margin-top: 20px;
}

.share-row a {
    color: var(--snow);
    background: rgba(22, 36, 71, 0.8);
    border: 1px solid rgba(61, 255, 162, 0.3);
    border-radius: 10px;
    padding: 10px 18px;
    font-size: 1.2rem;
    text-decoration: none;
    transition: all 0.3s ease;
}

.share-row a:hover {
    border-color: var(--aurora-green);
    transform: translateY(-2px);
}

.section-header {
    text-align: center;
    margin-bottom: 40px;
}

.section-header h1 {
    color: #fbbf24;
    font-size: 2.5rem;
    margin-bottom: 15px;
}

.section-header p {
    color: #94a3b8;
    font-size: 1.4rem;
    font-style: italic;
}

.controls {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 14px;
    margin-top: 30px;
}

.controls label {
    color: var(--ice);
    font-size: 1.3rem;
}

.controls input {
    width: 90px;
    font-size: 1.3rem;
    font-family: 'Fredoka', sans-serif;
    padding: 10px;
    border-radius: 10px;
    border: 1px solid rgba(61, 255, 162, 0.3);
    background: rgba(11, 11, 20, 0.8);
    color: var(--snow);
    margin-left: 8px;
}

.danger-btn {
    background: rgba(248, 113, 113, 0.15);
    border: 1px solid #f87171;
    color: #fca5a5;
    border-radius: 10px;
    padding: 12px 22px;
    font-size: 1.3rem;
    font-family: 'Fredoka', sans-serif;
    cursor: pointer;
    transition: all 0.3s ease;
}

.danger-btn:hover {
    background: rgba(248, 113, 113, 0.3);
}

.download-btn {
    background: linear-gradient(135deg, var(--aurora-green) 0%, var(--aurora-teal) 100%);
    border: none;
    color: var(--arctic);
    border-radius: 10px;
    padding: 12px 22px;
    font-size: 1.3rem;
    font-weight: 700;
    font-family: 'Fredoka', sans-serif;
    cursor: pointer;
    transition: all 0.3s ease;
}

.download-btn:hover {
    transform: translateY(-2px);
}

.status-message {
    color: var(--gold);
    font-size: 1.3rem;
    margin-top: 15px;
    min-height: 1.5em;
}

.dictionary-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 20px;
    padding: 20px;
}

.dictionary-term {
    background: linear-gradient(135deg, rgba(22, 36, 71, 0.8) 0%, rgba(30, 27, 75, 0.8) 100%);
    border-radius: 16px;
    padding: 24px;
    border: 2px solid;
    transition: all 0.3s ease;
    backdrop-filter: blur(10px);
}

.dictionary-term:hover {
    transform: translateY(-5px);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
}

.dictionary-term .emoji {
    font-size: 3rem;
    display: block;
    margin-bottom: 12px;
}

.dictionary-term .title {
    font-size: 1.8rem;
    font-weight: 700;
    margin-bottom: 8px;
}

.dictionary-term .description {
    font-size: 1.3rem;
    line-height: 1.6;
    color: #e2e8f0;
}

/* Border colors per dictionary term */
.term-yellow-400 { border-color: #fbbf24; }
.term-pink-400 { border-color: #f472b6; }
.term-purple-400 { border-color: #c084fc; }
.term-blue-400 { border-color: #60a5fa; }
.term-green-400 { border-color: #4ade80; }
.term-indigo-400 { border-color: #818cf8; }
.term-red-400 { border-color: #f87171; }
.term-orange-400 { border-color: #fb923c; }
.term-cyan-400 { border-color: #22d3ee; }
.term-gray-400 { border-color: #9ca3af; }
.term-amber-400 { border-color: #fbbf24; }
.term-rose-400 { border-color: #fb7185; }
.term-violet-400 { border-color: #a78bfa; }
.term-yellow-500 { border-color: #eab308; }
.term-sky-400 { border-color: #38bdf8; }
.term-fuchsia-400 { border-color: #e879f9; }
.term-slate-400 { border-color: #94a3b8; }
.term-teal-400 { border-color: #2dd4bf; }

.footer {
    text-align: center;
    padding: 50px 30px;
    margin-top: 60px;
    border-top: 1px solid rgba(61, 255, 162, 0.2);
}

.footer-love {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--gold);
    margin-bottom: 20px;
    animation: sparkle 3s ease-in-out infinite;
}

@keyframes sparkle {
    0%, 100% { text-shadow: 0 0 10px rgba(251, 191, 36, 0.5); }
    50% { text-shadow: 0 0 20px rgba(251, 191, 36, 0.8), 0 0 30px rgba(251, 191, 36, 0.4); }
}

.footer-powered {
    font-size: 1.35rem;
    color: var(--ice);
}

@media (max-width: 768px) {
    .app-title { font-size: 3.5rem; }
    .subtitle { font-size: 1.5rem; }
    .subsubtitle { font-size: 1.3rem; }
    .tabs button { font-size: 1.4rem; padding: 15px 25px; }
    .dictionary-grid { grid-template-columns: 1fr; }
    .columns { grid-template-columns: 1fr; }
}
"#;

const PAGE_SCRIPT: &str = r#"
const $ = (id) => document.getElementById(id);
let currentTale = null;

const api = async (path, options) => {
    const response = await fetch(path, options);
    const payload = await response.json();
    if (!response.ok) {
        throw new Error(payload.error || "Something went wrong among the stars.");
    }
    return payload;
};

const post = (path, body) => api(path, {
    method: "POST",
    headers: {"Content-Type": "application/json"},
    body: JSON.stringify(body),
});

const switchTab = (name) => {
    document.querySelectorAll(".tabs button").forEach((btn) => {
        btn.classList.toggle("active", btn.dataset.tab === name);
    });
    document.querySelectorAll(".tab-panel").forEach((panel) => {
        panel.classList.toggle("active", panel.id === "tab-" + name);
    });
    if (name === "saved") loadStories();
    if (name === "canvas") loadCanvases();
    if (name === "dictionary") loadDictionary();
    if (name === "about") loadAbout();
};

const loadSuggestions = async () => {
    try {
        const payload = await api("/api/suggestions");
        $("cities").innerHTML = payload.cities
            .map((city) => `<option value="${city}"></option>`)
            .join("");
    } catch (err) {
        // The field still accepts free-form input.
    }
};

const generateStory = async () => {
    const location = $("location").value.trim();
    $("activity-log").textContent = GENERATING_TEXT;
    $("status").textContent = "";
    try {
        const tale = await post("/api/tale", {location, language: LANG});
        currentTale = tale;
        $("activity-log").textContent = tale.log.join("\n");
        $("story-panel").className = "story-content";
        $("story-panel").innerHTML =
            `<img class="story-image" src="${tale.image.url}" alt="${tale.image.alt_text}">` +
            tale.story_html;
        $("share-whatsapp").href = tale.share_links.whatsapp;
        $("share-email").href = tale.share_links.email;
        $("share-twitter").href = tale.share_links.twitter;
        $("share-telegram").href = tale.share_links.telegram;
        $("share-row").hidden = false;
    } catch (err) {
        $("activity-log").textContent += "\n" + err.message;
        $("story-panel").className = "";
        $("story-panel").innerHTML =
            `<div class='waiting-container'><div class='waiting-icon'>🌙✨</div>` +
            `<div class='waiting-title'>${err.message}</div></div>`;
        $("share-row").hidden = true;
    }
};

const saveStory = async () => {
    if (!currentTale) {
        $("status").textContent = "⚠️ No story to save. Generate a story first!";
        return;
    }
    const payload = await post("/api/stories", {
        story_html: currentTale.story_html,
        image_url: currentTale.image.url,
        share_text: currentTale.share_text,
        location: currentTale.location.name,
        language: LANG,
    });
    $("status").textContent = payload.message;
};

const createCanvas = async () => {
    if (!currentTale) {
        $("status").textContent = "⚠️ No story to create Dream Canvas. Generate a story first!";
        return;
    }
    const payload = await post("/api/canvases", {
        story_html: currentTale.story_html,
        image_url: currentTale.image.url,
        location: currentTale.location.name,
        language: LANG,
    });
    $("status").textContent = payload.message;
    $("postcard-preview").innerHTML = payload.preview_html || "";
};

const loadStories = async () => {
    const payload = await api(`/api/stories?lang=${LANG}`);
    $("saved-list").innerHTML = payload.html;
};

const loadCanvases = async () => {
    const payload = await api(`/api/canvases?lang=${LANG}`);
    $("canvas-list").innerHTML = payload.html;
};

const loadDictionary = async () => {
    const payload = await api(`/api/dictionary?lang=${LANG}`);
    $("dictionary-content").innerHTML = payload.html;
};

const loadAbout = async () => {
    const payload = await api(`/api/about?lang=${LANG}`);
    $("about-content").innerHTML = payload.html;
};

const deleteStory = async () => {
    const index = parseInt($("story-num").value, 10);
    const payload = await api(`/api/stories/${index}`, {method: "DELETE"});
    $("stories-status").textContent = payload.message;
    loadStories();
};

const deleteAllStories = async () => {
    const payload = await api("/api/stories", {method: "DELETE"});
    $("stories-status").textContent = payload.message;
    loadStories();
};

const deleteCanvas = async () => {
    const index = parseInt($("canvas-num").value, 10);
    const payload = await api(`/api/canvases/${index}`, {method: "DELETE"});
    $("canvas-status").textContent = payload.message;
    loadCanvases();
};

const deleteAllCanvases = async () => {
    const payload = await api("/api/canvases", {method: "DELETE"});
    $("canvas-status").textContent = payload.message;
    loadCanvases();
};

document.querySelectorAll(".tabs button").forEach((btn) => {
    btn.addEventListener("click", () => switchTab(btn.dataset.tab));
});
$("generate").addEventListener("click", generateStory);
$("location").addEventListener("keydown", (event) => {
    if (event.key === "Enter") generateStory();
});
$("save").addEventListener("click", saveStory);
$("canvas-btn").addEventListener("click", createCanvas);
$("delete-story").addEventListener("click", deleteStory);
$("delete-all-stories").addEventListener("click", deleteAllStories);
$("download-story").addEventListener("click", () => {
    window.open(`/stories/${parseInt($("story-num").value, 10)}/download`, "_blank");
});
$("delete-canvas").addEventListener("click", deleteCanvas);
$("delete-all-canvases").addEventListener("click", deleteAllCanvases);
$("download-canvas").addEventListener("click", () => {
    window.open(`/canvases/${parseInt($("canvas-num").value, 10)}/download`, "_blank");
});

loadSuggestions();
"#;

/// Renders the page shell in the requested language.
pub fn index_page(language: Language) -> String {
    let text = ui_text(language);
    let code = language.code();
    let flags = language_switcher(language);
    let subtitle = text.subtitle;
    let subsubtitle = text.subsubtitle;
    let tab_generate = text.tab_generate;
    let tab_saved = text.tab_saved;
    let tab_postcards = text.tab_postcards;
    let tab_dict = text.tab_dict;
    let tab_about = text.tab_about;
    let location_label = text.location_label;
    let location_placeholder = text.location_placeholder;
    let location_hint = text.location_hint;
    let generate_btn = text.generate_btn;
    let quick_actions = text.quick_actions;
    let save_btn = text.save_btn;
    let postcard_btn = text.postcard_btn;
    let waiting_title = text.waiting_title;
    let waiting_subtitle = text.waiting_subtitle;
    let saved_title = text.saved_title;
    let saved_intro = text.saved_intro;
    let delete_all_stories = text.delete_all_stories;
    let canvas_title = text.canvas_title;
    let canvas_intro = text.canvas_intro;
    let delete_all_canvas = text.delete_all_canvas;
    let footer_love = text.footer_love;
    let footer_powered = text.footer_powered;
    let generating_story = text.generating_story;

    format!(
        r#"<!DOCTYPE html>
<html lang="{code}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>🌌 Stellina 🔭</title>
    <style>{PAGE_STYLES}</style>
</head>
<body>
<div class="page">
    <h1 class="app-title">Stellina<span class="emoji">🔭</span></h1>
    <p class="subtitle">{subtitle}</p>
    <p class="subsubtitle">{subsubtitle}</p>

    <nav class="lang-flags">
        {flags}
    </nav>

    <nav class="tabs">
        <button class="active" data-tab="generate">{tab_generate}</button>
        <button data-tab="saved">{tab_saved}</button>
        <button data-tab="canvas">{tab_postcards}</button>
        <button data-tab="dictionary">{tab_dict}</button>
        <button data-tab="about">{tab_about}</button>
    </nav>

    <section id="tab-generate" class="tab-panel active">
        <div class="columns">
            <div>
                <div class="input-panel">
                    <div class="location-label">{location_label}</div>
                    <input id="location" class="location-input" list="cities"
                           placeholder="{location_placeholder}" autocomplete="off">
                    <datalist id="cities"></datalist>
                    <p class="location-hint">{location_hint}</p>
                </div>
                <button id="generate" class="generate-btn">{generate_btn}</button>
                <h3 class="quick-actions">{quick_actions}</h3>
                <button id="save" class="save-btn">{save_btn}</button>
                <button id="canvas-btn" class="postcard-btn">{postcard_btn}</button>
                <div id="status" class="status-message"></div>
                <div id="postcard-preview"></div>
            </div>
            <div>
                <details class="activity-log-container" open>
                    <summary>📊 Activity Log</summary>
                    <pre id="activity-log" class="activity-log">Waiting for generation request...</pre>
                </details>
                <div id="story-panel">
                    <div class="waiting-container">
                        <div class="waiting-icon">🌙✨</div>
                        <div class="waiting-title">{waiting_title}</div>
                        <div class="waiting-subtitle">{waiting_subtitle}</div>
                    </div>
                </div>
                <div id="share-row" class="share-row" hidden>
                    <a id="share-whatsapp" target="_blank" rel="noopener">💬 WhatsApp</a>
                    <a id="share-email">📧 Email</a>
                    <a id="share-twitter" target="_blank" rel="noopener">🐦 Twitter</a>
                    <a id="share-telegram" target="_blank" rel="noopener">✈️ Telegram</a>
                </div>
            </div>
        </div>
    </section>

    <section id="tab-saved" class="tab-panel">
        <div class="section-header">
            <h1>{saved_title}</h1>
            <p>{saved_intro}</p>
        </div>
        <div id="saved-list"></div>
        <div class="controls">
            <label>Story number <input id="story-num" type="number" min="1" value="1"></label>
            <button id="delete-story" class="danger-btn">× Delete</button>
            <button id="delete-all-stories" class="danger-btn">{delete_all_stories}</button>
            <button id="download-story" class="download-btn">📥 Download</button>
        </div>
        <div id="stories-status" class="status-message"></div>
    </section>

    <section id="tab-canvas" class="tab-panel">
        <div class="section-header">
            <h1>{canvas_title}</h1>
            <p>{canvas_intro}</p>
        </div>
        <div id="canvas-list"></div>
        <div class="controls">
            <label>Canvas number <input id="canvas-num" type="number" min="1" value="1"></label>
            <button id="delete-canvas" class="danger-btn">× Delete</button>
            <button id="delete-all-canvases" class="danger-btn">{delete_all_canvas}</button>
            <button id="download-canvas" class="download-btn">📥 Download</button>
        </div>
        <div id="canvas-status" class="status-message"></div>
    </section>

    <section id="tab-dictionary" class="tab-panel">
        <div id="dictionary-content"></div>
    </section>

    <section id="tab-about" class="tab-panel">
        <div id="about-content"></div>
    </section>

    <footer class="footer">
        <div class="footer-love">{footer_love}</div>
        <div class="footer-powered">{footer_powered}</div>
    </footer>
</div>
<script>
const LANG = "{code}";
const GENERATING_TEXT = "{generating_story}";
</script>
<script>{PAGE_SCRIPT}</script>
</body>
</html>"#
    )
}

fn language_switcher(current: Language) -> String {
    Language::ALL
        .iter()
        .map(|lang| {
            let active = if *lang == current { " class=\"active\"" } else { "" };
            format!(
                r#"<a{active} href="/?lang={}" title="{}">{}</a>"#,
                lang.code(),
                lang.display_name(),
                lang.flag()
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// The astronomy dictionary tab: one colorful box per term.
pub fn dictionary_section(language: Language) -> String {
    let text = ui_text(language);

    let mut html = format!(
        "
    <div style='text-align: center; margin-bottom: 40px;'>
        <h1 style='color: #fbbf24; font-size: 2.5rem; margin-bottom: 15px;'>{}</h1>
        <p style='color: #94a3b8; font-size: 1.4rem; font-style: italic;'>{}</p>
    </div>

    <div class='dictionary-grid'>
    ",
        text.dict_title, text.dict_intro
    );

    for term in dictionary_terms(language) {
        html.push_str(&format!(
            "
        <div class='dictionary-term term-{}'>
            <div class='emoji'>{}</div>
            <div class='title'>{}</div>
            <div class='description'>{}</div>
        </div>
        ",
            term.color, term.emoji, term.title, term.description
        ));
    }

    html.push_str("</div>");
    html
}

/// The about tab: mission, how it works, and features.
pub fn about_section(language: Language) -> String {
    let content = about_content(language);

    let mut html = format!(
        "
    <div style='padding: 20px; color: #e2e8f0;'>
        <h1 style='color: #fbbf24; font-size: 3.75rem; margin-bottom: 24px;'>{}</h1>
        <p style='font-size: 1.65rem; line-height: 2.4rem; margin-bottom: 32px;'>{}</p>

        <hr style='border: none; border-top: 1px solid #4a5568; margin: 40px 0;'>

        <h2 style='color: #3dffa2; font-size: 2.85rem; margin-bottom: 24px;'>{}</h2>
    ",
        content.mission_title, content.mission_text, content.how_title
    );

    for step in content.how_steps {
        html.push_str(&format!(
            "<p style='font-size: 1.65rem; line-height: 2.4rem; margin-bottom: 20px;'>{step}</p>\n"
        ));
    }

    html.push_str(&format!(
        "
        <hr style='border: none; border-top: 1px solid #4a5568; margin: 40px 0;'>

        <h2 style='color: #2dd4bf; font-size: 2.85rem; margin-bottom: 24px;'>{}</h2>
    ",
        content.features_title
    ));

    for feature in content.features {
        html.push_str(&format!(
            "<p style='font-size: 1.65rem; line-height: 2.4rem; margin-bottom: 20px;'>{feature}</p>\n"
        ));
    }

    html.push_str("</div>");
    html
}
