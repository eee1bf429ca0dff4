//! End-to-end tests for the tale pipeline with every upstream mocked:
//! location resolution, object selection, story generation, image lookup
//! and the rendered result.

use std::time::Duration;

use stellina::config::{AppConfig, Endpoints};
use stellina::i18n::Language;
use stellina::images::ImageSource;
use stellina::sky::ObjectKind;
use stellina::tale::{TaleComposer, TaleError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_STORY: &str = "# Jupiter's Lullaby\n\nHigh above the sleeping rooftops, Jupiter hummed a gentle tune for every child below.\n\nIts many moons gathered close to listen, glowing softly like fireflies around a lantern.\n\n### Goodnight Haiku\nGiant in the sky\nhums a song of swirling clouds\nsleep now, little one";

#[tokio::test]
async fn compose_runs_every_stage_and_reports_progress() {
    let server = MockServer::start().await;
    mount_visible_jupiter(&server).await;
    mount_jupiter_metadata(&server).await;
    mount_gemini(&server, GEMINI_STORY).await;
    mount_skyview_image(&server).await;

    let tale = composer(&server)
        .compose("Rome, Italy", Language::En)
        .await
        .expect("tale");

    assert_eq!(tale.place.name, "Rome, Italy");
    assert_eq!(tale.object.name, "Jupiter");
    assert_eq!(tale.object.kind, ObjectKind::Planet);
    // Coordinates were enriched from the metadata archive.
    assert_eq!(tale.object.ra, Some(181.3));
    assert_eq!(tale.image.source, ImageSource::Skyview);

    assert!(!tale.story.fallback);
    assert_eq!(tale.story.title, "Jupiter's Lullaby");
    assert!(tale.story_html.contains("Jupiter's Lullaby"));
    assert!(
        tale.story_html
            .contains("Tonight's sky from <strong>Rome, Italy</strong>")
    );
    assert!(tale.story_html.contains("💡 Did You Know?"));
    assert!(tale.story_html.contains("🌸 Goodnight Haiku"));

    assert!(tale.share_text.starts_with("🌌 Jupiter's Lullaby\n\n"));
    assert!(tale.share_text.contains("📍 Seen from: Rome, Italy"));
    assert!(tale.share_text.contains("🌟 Generated by Stellina"));

    let log = tale.log.join("\n");
    assert!(log.contains("Parsing location input: 'Rome, Italy'"));
    assert!(log.contains("Location: Rome, Italy"));
    assert!(log.contains("Selected: Jupiter (planet, magnitude -2.3)"));
    assert!(log.contains("Image fetched from skyview"));
    assert!(log.contains("Story generation complete!"));
    // Every line is stamped HH:MM:SS.
    for line in &tale.log {
        let stamp = &line[..8];
        assert!(
            stamp.chars().enumerate().all(|(i, ch)| {
                if i == 2 || i == 5 { ch == ':' } else { ch.is_ascii_digit() }
            }),
            "unstamped log line: {line}"
        );
    }
}

#[tokio::test]
async fn upstream_answers_are_cached_between_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data": [{"name": "Jupiter", "aboveHorizon": true, "magnitude": -2.3}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/objects/Jupiter/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name": "Jupiter", "coordinates": {"rightascension": 181.3, "declination": 2.1}, "type": "planet"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_gemini(&server, GEMINI_STORY).await;
    Mock::given(method("GET"))
        .and(path("/skyview"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/gif"))
        .expect(1)
        .mount(&server)
        .await;

    let composer = composer(&server);
    let first = composer.compose("Rome, Italy", Language::En).await.expect("first tale");
    let second = composer.compose("Rome, Italy", Language::En).await.expect("second tale");

    // Jupiter is the only candidate, so losing the novelty bonus does not
    // change the winner.
    assert_eq!(first.object.name, "Jupiter");
    assert_eq!(second.object.name, "Jupiter");
    assert!(second.object.score < first.object.score);

    // One planets entry plus one metadata entry; one image entry.
    assert_eq!(composer.sky_cache_entries(), 2);
    assert_eq!(composer.image_cache_entries(), 1);
    assert_eq!(composer.shown_entries(), 1);
}

#[tokio::test]
async fn unknown_input_falls_back_to_ip_geolocation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"city": "Rome", "country_name": "Italy", "latitude": 41.9, "longitude": 12.5}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    mount_visible_jupiter(&server).await;
    mount_jupiter_metadata(&server).await;
    mount_gemini(&server, GEMINI_STORY).await;
    // No image source mocked: the chain runs dry and lands on the
    // stock starfield.

    let tale = composer(&server)
        .compose("xyzzy-9", Language::En)
        .await
        .expect("tale");

    assert_eq!(tale.place.name, "Rome, Italy");
    assert_eq!(tale.image.source, ImageSource::Fallback);

    let log = tale.log.join("\n");
    assert!(log.contains("Location parsing failed, trying auto-geolocation..."));
    assert!(log.contains("Auto-located: Rome, Italy"));
    assert!(log.contains("Using fallback image (APIs unavailable)"));
}

#[tokio::test]
async fn an_unresolvable_location_is_the_only_hard_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = composer(&server)
        .compose("xyzzy-9", Language::It)
        .await
        .expect_err("location failure");

    match err {
        TaleError::LocationUnresolved { input, message } => {
            assert_eq!(input, "xyzzy-9");
            assert!(message.contains("500"), "unexpected message: {message}");
        }
    }
}

#[tokio::test]
async fn unsafe_model_output_degrades_to_the_prewritten_tale() {
    let server = MockServer::start().await;
    mount_visible_jupiter(&server).await;
    mount_jupiter_metadata(&server).await;
    mount_gemini(
        &server,
        "# The Dark Cave\n\nA monster waited under the sleeping hills.",
    )
    .await;

    let tale = composer(&server)
        .compose("Rome, Italy", Language::En)
        .await
        .expect("tale");

    assert!(tale.story.fallback);
    assert_eq!(tale.story.title, "The Tale of Jupiter");
    assert!(tale.story_html.contains("The Tale of Jupiter"));
}

#[tokio::test]
async fn a_missing_api_key_still_tells_a_story() {
    let server = MockServer::start().await;
    mount_visible_jupiter(&server).await;
    mount_jupiter_metadata(&server).await;

    let mut config = test_config(&server);
    config.gemini_api_key = None;
    let composer = TaleComposer::new(reqwest::Client::new(), &config);

    let tale = composer
        .compose("Rome, Italy", Language::It)
        .await
        .expect("tale");

    assert!(tale.story.fallback);
    assert_eq!(tale.story.title, "La Storia di Jupiter");
    assert_eq!(tale.language, Language::It);
}

fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        gemini_api_key: Some("test-key".to_string()),
        gemini_model: "test-model".to_string(),
        arcsecond_api_key: None,
        nasa_api_key: "DEMO_KEY".to_string(),
        cache_ttl: Duration::from_secs(60),
        novelty_window: Duration::from_secs(7 * 24 * 60 * 60),
        request_timeout: Duration::from_secs(5),
        endpoints: Endpoints {
            gemini: server.uri(),
            visible_planets: format!("{}/v3", server.uri()),
            arcsecond: server.uri(),
            geolocation: format!("{}/json/", server.uri()),
            hubble: format!("{}/hubble", server.uri()),
            skyview: format!("{}/skyview", server.uri()),
            sdss: format!("{}/sdss", server.uri()),
            wikimedia: format!("{}/wiki", server.uri()),
            apod: format!("{}/apod", server.uri()),
            fallback_image: "https://example.com/starfield.jpg".to_string(),
        },
    }
}

fn composer(server: &MockServer) -> TaleComposer {
    TaleComposer::new(reqwest::Client::new(), &test_config(server))
}

async fn mount_visible_jupiter(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data": [{"name": "Jupiter", "aboveHorizon": true, "magnitude": -2.3}]}"#,
            "application/json",
        ))
        .mount(server)
        .await;
}

async fn mount_jupiter_metadata(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/objects/Jupiter/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name": "Jupiter", "coordinates": {"rightascension": 181.3, "declination": 2.1}, "type": "planet", "constellation": "Virgo"}"#,
            "application/json",
        ))
        .mount(server)
        .await;
}

async fn mount_gemini(server: &MockServer, text: &str) {
    let body = serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    });
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(body_string_contains("safetySettings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_skyview_image(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/skyview"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/gif"))
        .mount(server)
        .await;
}
