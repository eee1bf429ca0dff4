//! The individual image sources behind [`ImageClient`](super::ImageClient).
//!
//! Every lookup swallows its own failures: a warning is logged and `None`
//! is returned, which sends the chain on to the next source.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::fetch::{FetchError, FetchResult, json_body, send_once};

use super::curated::curated_image;
use super::{ImageClient, ImageSource, StoryImage};

const CURATED_HEAD_TIMEOUT: Duration = Duration::from_secs(2);

impl ImageClient {
    /// Curated table entry, accepted only after a HEAD reachability check.
    pub(super) async fn try_curated(&self, object_name: &str) -> Option<StoryImage> {
        let star = curated_image(object_name)?;
        let request = self.client.head(star.url).timeout(CURATED_HEAD_TIMEOUT);
        match send_once(request).await {
            Ok(_) => {
                tracing::info!("Using curated image for {object_name} (URL verified)");
                Some(StoryImage {
                    url: star.url.to_string(),
                    source: ImageSource::Curated,
                    alt_text: star.alt_text.to_string(),
                    credit: star.credit.to_string(),
                })
            }
            Err(FetchError::HttpStatus { status }) => {
                tracing::warn!(
                    "Curated URL for {object_name} returned {status}, trying fallback APIs"
                );
                None
            }
            Err(err) => {
                tracing::warn!("Curated URL for {object_name} failed ({err}), trying fallback APIs");
                None
            }
        }
    }

    /// DSS cutout from NASA SkyView. The query goes straight into the URL
    /// because that same URL is what ends up in the `<img>` tag.
    pub(super) async fn try_skyview(
        &self,
        ra: f64,
        dec: f64,
        object_name: &str,
    ) -> Option<StoryImage> {
        let url = format!(
            "{}?Position={ra},{dec}&Survey=DSS&Pixels=512&Return=GIF",
            self.skyview_endpoint
        );
        let response = match send_once(self.client.get(&url)).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("NASA SkyView API failed: {err}");
                return None;
            }
        };
        if !is_image_response(&response) {
            return None;
        }
        Some(StoryImage {
            url,
            source: ImageSource::Skyview,
            alt_text: format!("Sky view of {object_name} region from NASA SkyView"),
            credit: "NASA SkyView Virtual Observatory (DSS)".to_string(),
        })
    }

    /// JPEG cutout from the SDSS SkyServer, g-band, 0.2 arcsec per pixel.
    pub(super) async fn try_sdss(&self, ra: f64, dec: f64, object_name: &str) -> Option<StoryImage> {
        let request = self.client.get(&self.sdss_endpoint).query(&[
            ("ra", ra.to_string()),
            ("dec", dec.to_string()),
            ("scale", "0.2".to_string()),
            ("width", "512".to_string()),
            ("height", "512".to_string()),
            ("opt", "G".to_string()),
        ]);
        let response = match send_once(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("SDSS API failed: {err}");
                return None;
            }
        };
        if !is_image_response(&response) {
            return None;
        }
        Some(StoryImage {
            url: response.url().to_string(),
            source: ImageSource::Sdss,
            alt_text: format!("Sky view of {object_name} region from SDSS"),
            credit: "Sloan Digital Sky Survey (SDSS)".to_string(),
        })
    }

    pub(super) async fn try_hubble(&self, object_name: &str) -> Option<StoryImage> {
        match self.hubble_lookup(object_name).await {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!("Hubble API failed: {err}");
                None
            }
        }
    }

    async fn hubble_lookup(&self, object_name: &str) -> FetchResult<Option<StoryImage>> {
        let request = self
            .client
            .get(&self.hubble_endpoint)
            .query(&[("name", object_name)]);
        let response = send_once(request).await?;
        let results: Vec<HubbleImage> = json_body(response).await?;

        let Some(first) = results.first() else {
            return Ok(None);
        };
        let Some(url) = first.image_files.first().and_then(|file| file.file_url.clone()) else {
            return Ok(None);
        };
        let alt_text = first
            .description
            .clone()
            .unwrap_or_else(|| format!("{object_name} captured by Hubble Space Telescope"));
        Ok(Some(StoryImage {
            url,
            source: ImageSource::Hubble,
            alt_text,
            credit: "NASA/ESA Hubble Space Telescope".to_string(),
        }))
    }

    pub(super) async fn try_wikimedia(&self, object_name: &str) -> Option<StoryImage> {
        match self.wikimedia_lookup(object_name).await {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!("Wikimedia API failed: {err}");
                None
            }
        }
    }

    /// Two-phase Commons lookup: a file-namespace search first, then an
    /// imageinfo query per hit until one yields a direct URL.
    async fn wikimedia_lookup(&self, object_name: &str) -> FetchResult<Option<StoryImage>> {
        let search = format!("{object_name} astronomy space telescope");
        let request = self.client.get(&self.wikimedia_endpoint).query(&[
            ("action", "query"),
            ("format", "json"),
            ("list", "search"),
            ("srsearch", search.as_str()),
            ("srnamespace", "6"),
            ("srlimit", "5"),
        ]);
        let response = send_once(request).await?;
        let body: WikimediaSearchResponse = json_body(response).await?;

        for result in body.query.search {
            let request = self.client.get(&self.wikimedia_endpoint).query(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", result.title.as_str()),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
            ]);
            let response = send_once(request).await?;
            let info: WikimediaInfoResponse = json_body(response).await?;

            let url = info
                .query
                .pages
                .into_values()
                .flat_map(|page| page.imageinfo)
                .find_map(|info| info.url);
            if let Some(url) = url {
                return Ok(Some(StoryImage {
                    url,
                    source: ImageSource::Wikimedia,
                    alt_text: format!("{object_name} - {}", result.title),
                    credit: "Wikimedia Commons".to_string(),
                }));
            }
        }
        Ok(None)
    }

    pub(super) async fn try_nasa_apod(&self, object_name: &str) -> Option<StoryImage> {
        match self.apod_lookup(object_name).await {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!("NASA APOD API failed: {err}");
                None
            }
        }
    }

    async fn apod_lookup(&self, object_name: &str) -> FetchResult<Option<StoryImage>> {
        let request = self
            .client
            .get(&self.apod_endpoint)
            .query(&[("api_key", self.nasa_api_key.as_str()), ("count", "1")]);
        let response = send_once(request).await?;
        let entries: Vec<ApodEntry> = json_body(response).await?;

        let Some(entry) = entries.into_iter().next() else {
            return Ok(None);
        };
        // Skip video days.
        if entry.media_type.as_deref() != Some("image") {
            return Ok(None);
        }
        let Some(url) = entry.url else {
            return Ok(None);
        };
        let alt_text = entry
            .title
            .unwrap_or_else(|| format!("Astronomy picture related to {object_name}"));
        Ok(Some(StoryImage {
            url,
            source: ImageSource::NasaApod,
            alt_text,
            credit: "NASA APOD".to_string(),
        }))
    }
}

fn is_image_response(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("image/"))
}

#[derive(Debug, Deserialize)]
struct HubbleImage {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_files: Vec<HubbleImageFile>,
}

#[derive(Debug, Deserialize)]
struct HubbleImageFile {
    #[serde(default)]
    file_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WikimediaSearchResponse {
    #[serde(default)]
    query: WikimediaSearchQuery,
}

#[derive(Debug, Default, Deserialize)]
struct WikimediaSearchQuery {
    #[serde(default)]
    search: Vec<WikimediaSearchResult>,
}

#[derive(Debug, Deserialize)]
struct WikimediaSearchResult {
    title: String,
}

#[derive(Debug, Deserialize)]
struct WikimediaInfoResponse {
    #[serde(default)]
    query: WikimediaInfoQuery,
}

#[derive(Debug, Default, Deserialize)]
struct WikimediaInfoQuery {
    #[serde(default)]
    pages: HashMap<String, WikimediaPage>,
}

#[derive(Debug, Deserialize)]
struct WikimediaPage {
    #[serde(default)]
    imageinfo: Vec<WikimediaImageInfo>,
}

#[derive(Debug, Deserialize)]
struct WikimediaImageInfo {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApodEntry {
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
}
