//! End-to-end composition of tonight's tale: resolve the observer's
//! location, pick a celestial object over it, have Gemini tell a story,
//! find a picture, and render the result. Every step appends a timestamped
//! line to a progress log that ships with the response.

use std::fmt::{Display, Formatter};

use crate::clock;
use crate::config::AppConfig;
use crate::geo::{GeoIpClient, Place, resolve_location};
use crate::i18n::Language;
use crate::images::{ImageClient, ImageSource, StoryImage};
use crate::render;
use crate::sky::{CelestialObject, SkyClient};
use crate::story::{
    GeminiStoryteller, Story, StoryRequest, StorytellerError, fallback_story,
    format_story_for_sharing, fun_facts, generate_story,
};

/// Everything the web layer needs to answer a tale request.
#[derive(Debug, Clone)]
pub struct TonightsTale {
    pub story: Story,
    pub story_html: String,
    pub image: StoryImage,
    pub share_text: String,
    pub object: CelestialObject,
    pub place: Place,
    pub language: Language,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaleError {
    LocationUnresolved { input: String, message: String },
}

impl Display for TaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationUnresolved { input, message } => {
                write!(f, "could not resolve location {input:?}: {message}")
            }
        }
    }
}

impl std::error::Error for TaleError {}

pub type TaleResult<T> = std::result::Result<T, TaleError>;

pub struct TaleComposer {
    sky: SkyClient,
    storyteller: Option<GeminiStoryteller>,
    images: ImageClient,
    geo: GeoIpClient,
}

impl TaleComposer {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            sky: SkyClient::new(client.clone(), config),
            storyteller: GeminiStoryteller::new(
                client.clone(),
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.endpoints.gemini.clone(),
            )
            .ok(),
            images: ImageClient::new(client.clone(), config),
            geo: GeoIpClient::new(client, config.endpoints.geolocation.clone()),
        }
    }

    /// Runs the pipeline for one request. Only an unresolvable location is
    /// an error; everything downstream degrades to fallbacks instead.
    pub async fn compose(&self, location_input: &str, language: Language) -> TaleResult<TonightsTale> {
        let mut log = ProgressLog::default();
        log.push("🔍", format!("Parsing location input: '{location_input}'"));

        let place = match resolve_location(location_input) {
            Some(place) => place,
            None => {
                log.push("⚠️", "Location parsing failed, trying auto-geolocation...");
                match self.geo.locate().await {
                    Ok(located) => {
                        let place = Place {
                            name: format!("{}, {}", located.city, located.country),
                            latitude: located.latitude,
                            longitude: located.longitude,
                        };
                        log.push("✅", format!("Auto-located: {}", place.name));
                        place
                    }
                    Err(err) => {
                        log.push("❌", format!("Geolocation failed: {err}"));
                        tracing::warn!("Location {location_input:?} could not be resolved: {err}");
                        return Err(TaleError::LocationUnresolved {
                            input: location_input.to_string(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        };

        log.push(
            "🌍",
            format!("Coordinates: {:.1}°N, {:.1}°E", place.latitude, place.longitude),
        );
        log.push("📍", format!("Location: {}", place.name));

        let today = clock::today();
        log.push(
            "🔧",
            format!(
                "Selecting celestial object (lat={:.1}, lon={:.1}, date={today})",
                place.latitude, place.longitude
            ),
        );
        let mut object = self
            .sky
            .select_best(place.latitude, place.longitude, Some(&today))
            .await;
        self.sky.enrich(&mut object).await;
        log.push(
            "⭐",
            format!(
                "Selected: {} ({}, magnitude {})",
                object.name,
                object.kind.as_str(),
                display_magnitude(object.magnitude)
            ),
        );

        log.push(
            "🤖",
            format!("Calling Gemini 2.5 Flash API (language: {})...", language.code()),
        );
        let request = StoryRequest {
            object_name: object.name.clone(),
            kind: object.kind,
            location: place.name.clone(),
            scientific_facts: object.description.clone(),
            language,
        };
        let story = match &self.storyteller {
            Some(storyteller) => generate_story(storyteller, &request).await,
            None => {
                tracing::error!("Story generation failed: {}", StorytellerError::MissingApiKey);
                fallback_story(&object.name, language)
            }
        };
        log.push(
            "📖",
            format!(
                "Story generated successfully ({} characters)",
                story.full_text.chars().count()
            ),
        );

        log.push("🖼️", format!("Fetching image for {}...", object.name));
        let image = self
            .images
            .fetch(&object.name, object.kind, object.ra, object.dec)
            .await;
        if image.source == ImageSource::Fallback {
            log.push("⚠️", "Using fallback image (APIs unavailable)");
        } else {
            log.push("✅", format!("Image fetched from {}", image.source.as_str()));
        }

        let facts = fun_facts(&object.name, language);
        let story_html = render::story_view(&story, &place, language, &facts);
        let share_text = format_story_for_sharing(&story, &object.name, &place.name);

        log.push("✅", "Story generation complete!");

        Ok(TonightsTale {
            story,
            story_html,
            image,
            share_text,
            object,
            place,
            language,
            log: log.lines,
        })
    }

    pub fn sky_cache_entries(&self) -> u64 {
        self.sky.cache_entry_count()
    }

    pub fn image_cache_entries(&self) -> u64 {
        self.images.cache_entry_count()
    }

    pub fn shown_entries(&self) -> usize {
        self.sky.shown_count()
    }
}

fn display_magnitude(magnitude: Option<f64>) -> String {
    match magnitude {
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

#[derive(Default)]
struct ProgressLog {
    lines: Vec<String>,
}

impl ProgressLog {
    fn push(&mut self, icon: &str, message: impl Display) {
        self.lines
            .push(format!("{} {icon} {message}", clock::log_timestamp()));
    }
}
