//! Object-metadata lookups against the Arcsecond archive, mainly to pin
//! down coordinates for the image cutout services.

use std::sync::Arc;
use std::time::Duration;

use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use crate::cache::{TtlCache, cache_key};
use crate::fetch::{URL_ENCODE, json_body, send_with_retry};

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMetadata {
    pub name: String,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub distance: Option<serde_json::Value>,
    pub object_type: String,
    pub magnitude: Option<f64>,
    pub constellation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    name: Option<String>,
    #[serde(default)]
    coordinates: Option<RawCoordinates>,
    #[serde(default)]
    distance: Option<serde_json::Value>,
    #[serde(rename = "type")]
    object_type: Option<String>,
    magnitude: Option<f64>,
    constellation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    rightascension: Option<f64>,
    declination: Option<f64>,
}

pub struct ObjectInfoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    cache: TtlCache<Arc<ObjectMetadata>>,
}

impl ObjectInfoClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: Option<String>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            cache: TtlCache::new(cache_ttl),
        }
    }

    /// Looks the object up by name, walking case variants until one hits.
    /// Misses are not errors; the pipeline simply proceeds without
    /// coordinates.
    pub async fn metadata(&self, object_name: &str) -> Option<Arc<ObjectMetadata>> {
        let key = cache_key(&["arcsecond", &object_name.to_lowercase()]);
        if let Some(cached) = self.cache.get(&key) {
            return Some(cached);
        }

        for variant in name_variants(object_name) {
            let url = format!(
                "{}/objects/{}/",
                self.base_url,
                utf8_percent_encode(&variant, &URL_ENCODE)
            );
            tracing::info!("Fetching metadata for {variant} from Arcsecond");

            let mut request = self.client.get(url);
            if let Some(api_key) = &self.api_key {
                request = request.header("Authorization", format!("Token {api_key}"));
            }

            let response = match send_with_retry(request).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!("Arcsecond request for {variant} failed: {err}");
                    continue;
                }
            };
            let raw: RawObject = match json_body(response).await {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::error!("Failed to parse Arcsecond response for {variant}: {err}");
                    continue;
                }
            };

            let metadata = Arc::new(ObjectMetadata {
                name: raw.name.unwrap_or_else(|| object_name.to_string()),
                ra: raw.coordinates.as_ref().and_then(|c| c.rightascension),
                dec: raw.coordinates.as_ref().and_then(|c| c.declination),
                distance: raw.distance,
                object_type: raw.object_type.unwrap_or_else(|| "unknown".to_string()),
                magnitude: raw.magnitude,
                constellation: raw.constellation,
            });
            self.cache.insert(key, Arc::clone(&metadata));
            tracing::info!("Successfully fetched metadata for {object_name}");
            return Some(metadata);
        }

        tracing::warn!("Could not find object {object_name} on Arcsecond");
        None
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

/// Case variants tried in order: as given, UPPER, lower, Capitalized.
fn name_variants(object_name: &str) -> Vec<String> {
    let candidates = [
        object_name.to_string(),
        object_name.to_uppercase(),
        object_name.to_lowercase(),
        super::capitalize(object_name),
    ];

    let mut variants: Vec<String> = Vec::new();
    for candidate in candidates {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}
