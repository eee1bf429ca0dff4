//! Client for the visible-planets API, which reports which solar-system
//! objects are up at a given place and time.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::cache::{TtlCache, cache_key};
use crate::fetch::{FetchResult, json_body, send_with_retry};

use super::capitalize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisiblePlanet {
    pub name: String,
    #[serde(default)]
    pub constellation: Option<String>,
    #[serde(default)]
    pub right_ascension: Option<f64>,
    #[serde(default)]
    pub declination: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub azimuth: Option<f64>,
    #[serde(default)]
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub above_horizon: bool,
    #[serde(default)]
    pub naked_eye_object: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct VisiblePlanetsResponse {
    #[serde(default)]
    data: Vec<VisiblePlanet>,
}

pub struct VisiblePlanetsClient {
    client: reqwest::Client,
    endpoint: String,
    cache: TtlCache<Arc<Vec<VisiblePlanet>>>,
}

impl VisiblePlanetsClient {
    pub fn new(client: reqwest::Client, endpoint: String, cache_ttl: Duration) -> Self {
        Self {
            client,
            endpoint,
            cache: TtlCache::new(cache_ttl),
        }
    }

    pub async fn visible_planets(
        &self,
        latitude: f64,
        longitude: f64,
        date: Option<&str>,
    ) -> FetchResult<Arc<Vec<VisiblePlanet>>> {
        let key = cache_key(&[
            "visible_planets",
            &latitude.to_string(),
            &longitude.to_string(),
            date.unwrap_or("today"),
        ]);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let mut query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }

        tracing::info!("Fetching visible planets for lat={latitude}, lon={longitude}, date={date:?}");
        let request = self.client.get(&self.endpoint).query(&query);
        let response = send_with_retry(request).await?;
        let body: VisiblePlanetsResponse = json_body(response).await?;

        let mut planets = body.data;
        for planet in &mut planets {
            planet.name = capitalize(&planet.name);
        }

        let planets = Arc::new(planets);
        self.cache.insert(key, Arc::clone(&planets));
        tracing::info!("Found {} planets", planets.len());
        Ok(planets)
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RESPONSE: &str = r#"{
        "meta": {"latitude": 41.9, "longitude": 12.5},
        "data": [
            {
                "name": "Jupiter",
                "constellation": "Gemini",
                "rightAscension": 98.6,
                "declination": 22.9,
                "altitude": 44.2,
                "azimuth": 112.0,
                "magnitude": -2.3,
                "aboveHorizon": true,
                "nakedEyeObject": true
            },
            {
                "name": "neptune",
                "altitude": -12.0,
                "magnitude": 7.9,
                "aboveHorizon": false
            }
        ]
    }"#;

    fn client(server: &MockServer) -> VisiblePlanetsClient {
        VisiblePlanetsClient::new(
            reqwest::Client::new(),
            format!("{}/v3", server.uri()),
            Duration::from_secs(60),
        )
    }

    #[tokio::test]
    async fn parses_planets_and_capitalizes_names() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3"))
            .and(query_param("latitude", "41.9"))
            .and(query_param("longitude", "12.5"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(RESPONSE, "application/json"))
            .mount(&server)
            .await;

        let planets = client(&server)
            .visible_planets(41.9, 12.5, None)
            .await
            .unwrap();

        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].name, "Jupiter");
        assert_eq!(planets[0].right_ascension, Some(98.6));
        assert!(planets[0].above_horizon);
        assert_eq!(planets[1].name, "Neptune");
        assert_eq!(planets[1].right_ascension, None);
        assert!(!planets[1].above_horizon);
    }

    #[tokio::test]
    async fn passes_the_date_through_and_caches_the_answer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3"))
            .and(query_param("date", "2025-11-16"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(RESPONSE, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let planets_client = client(&server);
        let first = planets_client
            .visible_planets(41.9, 12.5, Some("2025-11-16"))
            .await
            .unwrap();
        let second = planets_client
            .visible_planets(41.9, 12.5, Some("2025-11-16"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(planets_client.cache_entry_count(), 1);
    }

    #[tokio::test]
    async fn surfaces_upstream_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server)
            .visible_planets(41.9, 12.5, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
