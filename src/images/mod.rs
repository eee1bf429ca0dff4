//! Finding a picture of tonight's object.
//!
//! Sources are tried in a fixed order, from the curated star table down to
//! a stock starfield that never fails: curated, NASA SkyView, SDSS, Hubble,
//! Wikimedia Commons, NASA APOD, starfield. A source that errors or returns
//! nothing usable simply passes to the next, so `fetch` always produces an
//! image.

mod curated;
mod sources;

pub use curated::{CURATED_STAR_IMAGES, CuratedImage, curated_image};

use serde::Serialize;

use crate::cache::{TtlCache, cache_key};
use crate::config::AppConfig;
use crate::sky::ObjectKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Curated,
    Skyview,
    Sdss,
    Hubble,
    Wikimedia,
    NasaApod,
    Fallback,
}

impl ImageSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSource::Curated => "curated",
            ImageSource::Skyview => "skyview",
            ImageSource::Sdss => "sdss",
            ImageSource::Hubble => "hubble",
            ImageSource::Wikimedia => "wikimedia",
            ImageSource::NasaApod => "nasa_apod",
            ImageSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryImage {
    pub url: String,
    pub source: ImageSource,
    pub alt_text: String,
    pub credit: String,
}

pub struct ImageClient {
    client: reqwest::Client,
    hubble_endpoint: String,
    skyview_endpoint: String,
    sdss_endpoint: String,
    wikimedia_endpoint: String,
    apod_endpoint: String,
    fallback_image_url: String,
    nasa_api_key: String,
    cache: TtlCache<StoryImage>,
}

impl ImageClient {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            client,
            hubble_endpoint: config.endpoints.hubble.clone(),
            skyview_endpoint: config.endpoints.skyview.clone(),
            sdss_endpoint: config.endpoints.sdss.clone(),
            wikimedia_endpoint: config.endpoints.wikimedia.clone(),
            apod_endpoint: config.endpoints.apod.clone(),
            fallback_image_url: config.endpoints.fallback_image.clone(),
            nasa_api_key: config.nasa_api_key.clone(),
            cache: TtlCache::new(config.cache_ttl),
        }
    }

    /// Walks the source chain for the given object. Coordinates unlock the
    /// SkyView and SDSS cutout services; without them those two are skipped.
    pub async fn fetch(
        &self,
        object_name: &str,
        kind: ObjectKind,
        ra: Option<f64>,
        dec: Option<f64>,
    ) -> StoryImage {
        let key = cache_key(&["image", object_name, &coord_key(ra), &coord_key(dec)]);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let image = self.fetch_uncached(object_name, kind, ra, dec).await;
        self.cache.insert(key, image.clone());
        image
    }

    async fn fetch_uncached(
        &self,
        object_name: &str,
        kind: ObjectKind,
        ra: Option<f64>,
        dec: Option<f64>,
    ) -> StoryImage {
        tracing::info!("Fetching image for {object_name} ({})", kind.as_str());

        if let Some(image) = self.try_curated(object_name).await {
            tracing::info!("Image from curated star mapping");
            return image;
        }

        if let (Some(ra), Some(dec)) = (ra, dec) {
            if let Some(image) = self.try_skyview(ra, dec, object_name).await {
                tracing::info!("Image from NASA SkyView");
                return image;
            }
            if let Some(image) = self.try_sdss(ra, dec, object_name).await {
                tracing::info!("Image from SDSS SkyServer");
                return image;
            }
        }

        if let Some(image) = self.try_hubble(object_name).await {
            tracing::info!("Image from Hubble Heritage");
            return image;
        }
        if let Some(image) = self.try_wikimedia(object_name).await {
            tracing::info!("Image from Wikimedia Commons");
            return image;
        }
        // APOD serves a random picture of the day, unrelated to the object.
        // Last resort before the stock starfield.
        if let Some(image) = self.try_nasa_apod(object_name).await {
            tracing::warn!("Image from NASA APOD (may not match object)");
            return image;
        }

        tracing::warn!("All sources failed, using fallback starfield");
        self.fallback_image(object_name)
    }

    pub fn fallback_image(&self, object_name: &str) -> StoryImage {
        StoryImage {
            url: self.fallback_image_url.clone(),
            source: ImageSource::Fallback,
            alt_text: format!("Beautiful starfield representing {object_name}"),
            credit: "Unsplash starfield".to_string(),
        }
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

fn coord_key(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(super) fn test_config(server: &MockServer) -> AppConfig {
        AppConfig {
            gemini_api_key: None,
            gemini_model: "test".to_string(),
            arcsecond_api_key: None,
            nasa_api_key: "DEMO_KEY".to_string(),
            cache_ttl: Duration::from_secs(60),
            novelty_window: Duration::from_secs(7 * 24 * 60 * 60),
            request_timeout: Duration::from_secs(5),
            endpoints: Endpoints {
                hubble: format!("{}/hubble", server.uri()),
                skyview: format!("{}/skyview", server.uri()),
                sdss: format!("{}/sdss", server.uri()),
                wikimedia: format!("{}/wiki", server.uri()),
                apod: format!("{}/apod", server.uri()),
                fallback_image: "https://example.com/starfield.jpg".to_string(),
                ..Endpoints::default()
            },
        }
    }

    pub(super) fn images(server: &MockServer) -> ImageClient {
        ImageClient::new(reqwest::Client::new(), &test_config(server))
    }

    #[tokio::test]
    async fn falls_back_to_starfield_when_every_source_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let image = images(&server)
            .fetch("Unknown Object XYZ", ObjectKind::Star, Some(10.0), Some(20.0))
            .await;

        assert_eq!(image.source, ImageSource::Fallback);
        assert_eq!(image.url, "https://example.com/starfield.jpg");
        assert_eq!(image.alt_text, "Beautiful starfield representing Unknown Object XYZ");
        assert_eq!(image.credit, "Unsplash starfield");
    }

    #[tokio::test]
    async fn skips_cutout_services_without_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skyview"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sdss"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/hubble"))
            .and(query_param("name", "Jupiter"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"description": "Jupiter up close", "image_files": [{"file_url": "https://example.com/jupiter.jpg"}]}]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let image = images(&server)
            .fetch("Jupiter", ObjectKind::Planet, None, None)
            .await;

        assert_eq!(image.source, ImageSource::Hubble);
        assert_eq!(image.url, "https://example.com/jupiter.jpg");
        assert_eq!(image.alt_text, "Jupiter up close");
        assert_eq!(image.credit, "NASA/ESA Hubble Space Telescope");
    }

    #[tokio::test]
    async fn prefers_earlier_sources_in_the_chain() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skyview"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sdss"))
            .respond_with(
                ResponseTemplate::new(200).insert_header("content-type", "image/jpeg"),
            )
            .mount(&server)
            .await;
        // Hubble would also answer, but the chain must stop at SDSS.
        Mock::given(method("GET"))
            .and(path("/hubble"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"image_files": [{"file_url": "https://example.com/late.jpg"}]}]"#,
                "application/json",
            ))
            .expect(0)
            .mount(&server)
            .await;

        let image = images(&server)
            .fetch("Orion Nebula", ObjectKind::Star, Some(83.822), Some(-5.391))
            .await;

        assert_eq!(image.source, ImageSource::Sdss);
        assert_eq!(image.credit, "Sloan Digital Sky Survey (SDSS)");
    }

    #[tokio::test]
    async fn caches_fetched_images_per_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hubble"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"image_files": [{"file_url": "https://example.com/mars.jpg"}]}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = images(&server);
        let first = client.fetch("Mars", ObjectKind::Planet, None, None).await;
        let second = client.fetch("Mars", ObjectKind::Planet, None, None).await;

        assert_eq!(first, second);
        assert_eq!(client.cache_entry_count(), 1);
    }

    #[test]
    fn source_labels_match_the_wire_format() {
        assert_eq!(ImageSource::NasaApod.as_str(), "nasa_apod");
        assert_eq!(
            serde_json::to_string(&ImageSource::NasaApod).unwrap(),
            "\"nasa_apod\""
        );
        assert_eq!(
            serde_json::to_string(&ImageSource::Curated).unwrap(),
            "\"curated\""
        );
    }
}
