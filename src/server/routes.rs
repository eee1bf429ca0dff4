//! Request handlers. Mutating story/canvas endpoints answer with the
//! same status messages the UI shows verbatim; list endpoints answer
//! with rendered HTML fragments the page drops into the matching tab.

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::{Json, Router, routing};
use serde::{Deserialize, Serialize};

use crate::i18n::{Language, POPULAR_CITIES};
use crate::images::StoryImage;
use crate::render::{self, ShareLinks};
use crate::tale::TaleError;

use super::error::ApiError;
use super::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", routing::get(index))
        .route("/api/tale", routing::post(generate_tale))
        .route("/api/suggestions", routing::get(city_suggestions))
        .route(
            "/api/stories",
            routing::post(save_story)
                .get(list_stories)
                .delete(delete_all_stories),
        )
        .route("/api/stories/:index", routing::delete(delete_story))
        .route("/stories/:index/download", routing::get(download_story))
        .route(
            "/api/canvases",
            routing::post(create_canvas)
                .get(list_canvases)
                .delete(delete_all_canvases),
        )
        .route("/api/canvases/:index", routing::delete(delete_canvas))
        .route("/canvases/:index/download", routing::get(download_canvas))
        .route("/api/dictionary", routing::get(dictionary))
        .route("/api/about", routing::get(about))
        .route("/health", routing::get(health))
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

impl LangQuery {
    fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }
}

async fn index(Query(query): Query<LangQuery>) -> Html<String> {
    Html(render::index_page(query.language()))
}

#[derive(Debug, Deserialize)]
struct TaleRequest {
    location: String,
    language: Option<String>,
}

#[derive(Serialize)]
struct TaleResponse {
    story_html: String,
    image: StoryImage,
    share_text: String,
    share_links: ShareLinks,
    object: ObjectPayload,
    location: LocationPayload,
    language: &'static str,
    log: Vec<String>,
}

#[derive(Serialize)]
struct ObjectPayload {
    name: String,
    kind: &'static str,
    magnitude: Option<f64>,
    score: u32,
}

#[derive(Serialize)]
struct LocationPayload {
    name: String,
    latitude: f64,
    longitude: f64,
}

async fn generate_tale(
    State(state): State<AppState>,
    Json(request): Json<TaleRequest>,
) -> Result<Json<TaleResponse>, ApiError> {
    let language = request
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    let tale = state
        .composer
        .compose(&request.location, language)
        .await
        .map_err(|err| match err {
            TaleError::LocationUnresolved { .. } => ApiError::location(language),
        })?;

    let share_links = render::share_links(&tale.share_text);
    Ok(Json(TaleResponse {
        story_html: tale.story_html,
        image: tale.image,
        share_text: tale.share_text,
        share_links,
        object: ObjectPayload {
            name: tale.object.name,
            kind: tale.object.kind.as_str(),
            magnitude: tale.object.magnitude,
            score: tale.object.score,
        },
        location: LocationPayload {
            name: tale.place.name,
            latitude: tale.place.latitude,
            longitude: tale.place.longitude,
        },
        language: tale.language.code(),
        log: tale.log,
    }))
}

#[derive(Serialize)]
struct SuggestionsResponse {
    cities: &'static [&'static str],
}

async fn city_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        cities: POPULAR_CITIES,
    })
}

#[derive(Debug, Deserialize)]
struct SaveStoryRequest {
    story_html: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    share_text: String,
    location: String,
    language: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

async fn save_story(
    State(state): State<AppState>,
    Json(request): Json<SaveStoryRequest>,
) -> Json<MessageResponse> {
    let language = request
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();
    let message = state.stories.save(
        &request.story_html,
        request.image_url,
        request.share_text,
        request.location,
        language,
    );
    Json(MessageResponse { message })
}

#[derive(Serialize)]
struct HtmlResponse {
    html: String,
}

async fn list_stories(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<HtmlResponse> {
    let html = render::saved_stories_list(&state.stories.entries(), query.language());
    Json(HtmlResponse { html })
}

async fn delete_story(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.stories.delete(index),
    })
}

async fn delete_all_stories(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.stories.delete_all(),
    })
}

async fn download_story(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, StatusCode> {
    let story = state.stories.get(index).ok_or(StatusCode::NOT_FOUND)?;
    let document = render::printable_story_document(&story);
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"stellina_story_{index}.html\""),
        )],
        Html(document),
    ))
}

#[derive(Debug, Deserialize)]
struct CreateCanvasRequest {
    story_html: String,
    #[serde(default)]
    image_url: Option<String>,
    location: String,
    language: Option<String>,
}

#[derive(Serialize)]
struct CanvasCreatedResponse {
    message: String,
    preview_html: Option<String>,
}

async fn create_canvas(
    State(state): State<AppState>,
    Json(request): Json<CreateCanvasRequest>,
) -> Json<CanvasCreatedResponse> {
    let language = request
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();
    let (entry, message) = state.canvases.create(
        &request.story_html,
        request.image_url,
        request.location,
        language,
    );
    let preview_html = entry.map(|entry| render::canvas_preview(&entry, language));
    Json(CanvasCreatedResponse {
        message,
        preview_html,
    })
}

async fn list_canvases(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<HtmlResponse> {
    let html = render::postcards_gallery(&state.canvases.entries(), query.language());
    Json(HtmlResponse { html })
}

async fn delete_canvas(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.canvases.delete(index),
    })
}

async fn delete_all_canvases(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.canvases.delete_all(),
    })
}

async fn download_canvas(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, StatusCode> {
    let canvas = state.canvases.get(index).ok_or(StatusCode::NOT_FOUND)?;
    let document = render::dream_canvas_document(&canvas);
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"dream_canvas_{index}.html\""),
        )],
        Html(document),
    ))
}

async fn dictionary(Query(query): Query<LangQuery>) -> Json<HtmlResponse> {
    Json(HtmlResponse {
        html: render::dictionary_section(query.language()),
    })
}

async fn about(Query(query): Query<LangQuery>) -> Json<HtmlResponse> {
    Json(HtmlResponse {
        html: render::about_section(query.language()),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    sky_cache_entries: u64,
    image_cache_entries: u64,
    recently_shown: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        sky_cache_entries: state.composer.sky_cache_entries(),
        image_cache_entries: state.composer.image_cache_entries(),
        recently_shown: state.composer.shown_entries(),
    })
}
