//! Choosing tonight's featured celestial object.
//!
//! Candidates come from the visible-planets API; when that yields nothing
//! the selector falls back to a built-in table of bright stars for the
//! observer's hemisphere, so a story can always be told. The winner is the
//! highest-scoring candidate, and a novelty ledger nudges the selection
//! away from objects featured in the last few days.

mod metadata;
mod planets;
mod scoring;

pub use metadata::{ObjectInfoClient, ObjectMetadata};
pub use planets::{VisiblePlanet, VisiblePlanetsClient};
pub use scoring::{ICONIC_PLANETS, score_object};

use std::sync::Arc;

use crate::cache::ShownLedger;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Planet,
    Star,
    Constellation,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Planet => "planet",
            ObjectKind::Star => "star",
            ObjectKind::Constellation => "constellation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    pub name: String,
    pub kind: ObjectKind,
    pub score: u32,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub magnitude: Option<f64>,
    pub altitude: Option<f64>,
    pub azimuth: Option<f64>,
    pub above_horizon: bool,
    pub constellation: Option<String>,
    pub description: String,
}

struct BrightStar {
    name: &'static str,
    ra: f64,
    dec: f64,
    magnitude: f64,
    constellation: &'static str,
}

const NORTHERN_STARS: &[BrightStar] = &[
    BrightStar { name: "Polaris", ra: 37.95, dec: 89.26, magnitude: 2.0, constellation: "Ursa Minor" },
    BrightStar { name: "Vega", ra: 279.23, dec: 38.78, magnitude: 0.03, constellation: "Lyra" },
    BrightStar { name: "Arcturus", ra: 213.92, dec: 19.18, magnitude: -0.05, constellation: "Boötes" },
    BrightStar { name: "Deneb", ra: 310.36, dec: 45.28, magnitude: 1.25, constellation: "Cygnus" },
    BrightStar { name: "Altair", ra: 297.70, dec: 8.87, magnitude: 0.76, constellation: "Aquila" },
];

const SOUTHERN_STARS: &[BrightStar] = &[
    BrightStar { name: "Sirius", ra: 101.29, dec: -16.72, magnitude: -1.46, constellation: "Canis Major" },
    BrightStar { name: "Canopus", ra: 95.99, dec: -52.70, magnitude: -0.72, constellation: "Carina" },
    BrightStar { name: "Alpha Centauri", ra: 219.90, dec: -60.83, magnitude: -0.01, constellation: "Centaurus" },
    BrightStar { name: "Achernar", ra: 24.43, dec: -57.24, magnitude: 0.45, constellation: "Eridanus" },
    BrightStar { name: "Beta Centauri", ra: 210.96, dec: -60.37, magnitude: 0.61, constellation: "Centaurus" },
];

fn hemisphere_stars(latitude: f64) -> &'static [BrightStar] {
    let (stars, hemisphere) = if latitude >= 0.0 {
        (NORTHERN_STARS, "North")
    } else {
        (SOUTHERN_STARS, "South")
    };
    tracing::info!("Using hemisphere fallback: {hemisphere}");
    stars
}

/// Ready-made facts for the objects that come up most often; anything else
/// gets a generic line suited to its kind.
fn describe(name: &str, kind: ObjectKind) -> String {
    if let Some(facts) = default_facts(name) {
        return facts.to_string();
    }
    match kind {
        ObjectKind::Planet => format!("{name} is visible tonight"),
        _ => format!("{name} is a bright star visible in tonight's sky"),
    }
}

fn default_facts(name: &str) -> Option<&'static str> {
    let facts = match name {
        "Jupiter" => "The largest planet in our solar system, with colorful storms and 95 moons",
        "Saturn" => "Famous for its beautiful rings made of ice and rock",
        "Mars" => "The red planet, with the tallest volcano in the solar system",
        "Venus" => "The brightest planet, covered in thick clouds",
        "Sirius" => "The brightest star in the night sky, 8.6 light-years away",
        "Vega" => "A blue-white star 25 light-years away, very bright and fast-rotating",
        "Altair" => "A rapidly spinning star in the constellation Aquila",
        "Deneb" => "One of the most luminous stars visible, about 2,600 light-years away",
        "Polaris" => "The North Star, used for navigation for thousands of years",
        "Orion" => "A famous constellation with bright stars Betelgeuse and Rigel",
        _ => return None,
    };
    Some(facts)
}

/// Uppercases the first letter and lowercases the rest.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

pub struct SkyClient {
    planets: VisiblePlanetsClient,
    info: ObjectInfoClient,
    ledger: ShownLedger,
}

impl SkyClient {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            planets: VisiblePlanetsClient::new(
                client.clone(),
                config.endpoints.visible_planets.clone(),
                config.cache_ttl,
            ),
            info: ObjectInfoClient::new(
                client,
                &config.endpoints.arcsecond,
                config.arcsecond_api_key.clone(),
                config.cache_ttl,
            ),
            ledger: ShownLedger::new(config.novelty_window),
        }
    }

    /// Picks the best object over the given coordinates tonight. Never
    /// fails: upstream trouble degrades to the hemisphere star table, and
    /// in the last resort to Polaris.
    pub async fn select_best(
        &self,
        latitude: f64,
        longitude: f64,
        date: Option<&str>,
    ) -> CelestialObject {
        tracing::info!("Selecting best object for lat={latitude}, lon={longitude}, date={date:?}");

        let planets = match self.planets.visible_planets(latitude, longitude, date).await {
            Ok(planets) => planets,
            Err(err) => {
                tracing::warn!("Visible planets API failed: {err}");
                Arc::new(Vec::new())
            }
        };

        let mut candidates: Vec<CelestialObject> = if planets.is_empty() {
            tracing::warn!("No visible planets found");
            hemisphere_stars(latitude)
                .iter()
                .map(|star| self.object_from_star(star))
                .collect()
        } else {
            let above: Vec<&VisiblePlanet> =
                planets.iter().filter(|planet| planet.above_horizon).collect();
            let visible = if above.is_empty() {
                tracing::warn!("No planets above horizon");
                planets.iter().collect()
            } else {
                above
            };
            visible
                .into_iter()
                .map(|planet| self.object_from_planet(planet))
                .collect()
        };

        // Stable sort keeps the upstream order on equal scores.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let Some(best) = candidates.into_iter().next() else {
            tracing::warn!("All sources failed, returning fallback: Polaris");
            return polaris_fallback();
        };

        tracing::info!("Selected: {} (score: {})", best.name, best.score);
        self.ledger.mark_shown(&best.name);
        best
    }

    /// Fills missing coordinates (and constellation/magnitude) from the
    /// metadata archive, so the image cutout services have something to
    /// point at.
    pub async fn enrich(&self, object: &mut CelestialObject) {
        if object.ra.is_some() && object.dec.is_some() {
            return;
        }
        let Some(metadata) = self.info.metadata(&object.name).await else {
            return;
        };
        if object.ra.is_none() {
            object.ra = metadata.ra;
        }
        if object.dec.is_none() {
            object.dec = metadata.dec;
        }
        if object.constellation.is_none() {
            object.constellation = metadata.constellation.clone();
        }
        if object.magnitude.is_none() {
            object.magnitude = metadata.magnitude;
        }
    }

    fn object_from_planet(&self, planet: &VisiblePlanet) -> CelestialObject {
        CelestialObject {
            name: planet.name.clone(),
            kind: ObjectKind::Planet,
            score: score_object(&planet.name, ObjectKind::Planet, false, &self.ledger),
            ra: planet.right_ascension,
            dec: planet.declination,
            magnitude: planet.magnitude,
            altitude: planet.altitude,
            azimuth: planet.azimuth,
            above_horizon: planet.above_horizon,
            constellation: planet.constellation.clone(),
            description: describe(&planet.name, ObjectKind::Planet),
        }
    }

    fn object_from_star(&self, star: &BrightStar) -> CelestialObject {
        CelestialObject {
            name: star.name.to_string(),
            kind: ObjectKind::Star,
            score: score_object(star.name, ObjectKind::Star, false, &self.ledger),
            ra: Some(star.ra),
            dec: Some(star.dec),
            magnitude: Some(star.magnitude),
            altitude: None,
            azimuth: None,
            above_horizon: true,
            constellation: Some(star.constellation.to_string()),
            description: describe(star.name, ObjectKind::Star),
        }
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.planets.cache_entry_count() + self.info.cache_entry_count()
    }

    pub fn shown_count(&self) -> usize {
        self.ledger.entry_count()
    }
}

fn polaris_fallback() -> CelestialObject {
    CelestialObject {
        name: "Polaris".to_string(),
        kind: ObjectKind::Star,
        score: 20,
        ra: Some(37.95),
        dec: Some(89.26),
        magnitude: Some(2.0),
        altitude: None,
        azimuth: None,
        above_horizon: true,
        constellation: Some("Ursa Minor".to_string()),
        description: "Polaris, the North Star, is always visible in the northern sky".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer) -> AppConfig {
        AppConfig {
            gemini_api_key: None,
            gemini_model: "test".to_string(),
            arcsecond_api_key: None,
            nasa_api_key: "DEMO_KEY".to_string(),
            cache_ttl: Duration::from_secs(60),
            novelty_window: Duration::from_secs(7 * 24 * 60 * 60),
            request_timeout: Duration::from_secs(5),
            endpoints: Endpoints {
                visible_planets: format!("{}/v3", server.uri()),
                arcsecond: server.uri(),
                ..Endpoints::default()
            },
        }
    }

    fn sky(server: &MockServer) -> SkyClient {
        SkyClient::new(reqwest::Client::new(), &test_config(server))
    }

    #[test]
    fn capitalize_handles_mixed_case_and_spaces() {
        assert_eq!(capitalize("jupiter"), "Jupiter");
        assert_eq!(capitalize("VENUS"), "Venus");
        assert_eq!(capitalize("alpha centauri"), "Alpha centauri");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn hemisphere_tables_split_at_the_equator() {
        assert_eq!(hemisphere_stars(41.9)[0].name, "Polaris");
        assert_eq!(hemisphere_stars(0.0)[0].name, "Polaris");
        assert_eq!(hemisphere_stars(-33.9)[0].name, "Sirius");
    }

    #[test]
    fn describe_prefers_the_fact_table() {
        assert_eq!(
            describe("Saturn", ObjectKind::Planet),
            "Famous for its beautiful rings made of ice and rock"
        );
        assert_eq!(
            describe("Mercury", ObjectKind::Planet),
            "Mercury is visible tonight"
        );
        assert_eq!(
            describe("Betelgeuse", ObjectKind::Star),
            "Betelgeuse is a bright star visible in tonight's sky"
        );
    }

    #[tokio::test]
    async fn selects_the_iconic_planet_and_marks_it_shown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"data": [
                    {"name": "Jupiter", "aboveHorizon": true, "magnitude": -2.3},
                    {"name": "Saturn", "aboveHorizon": true, "magnitude": 0.7},
                    {"name": "Mercury", "aboveHorizon": true, "magnitude": 1.2}
                ]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let sky = sky(&server);
        let first = sky.select_best(41.9, 12.5, None).await;
        assert_eq!(first.name, "Jupiter");
        assert_eq!(first.score, 100);
        assert_eq!(first.kind, ObjectKind::Planet);
        assert_eq!(sky.shown_count(), 1);

        // Jupiter lost its novelty bonus, so Saturn takes the next night.
        let second = sky.select_best(41.9, 12.5, None).await;
        assert_eq!(second.name, "Saturn");
        assert_eq!(second.score, 100);
    }

    #[tokio::test]
    async fn falls_back_to_the_whole_list_when_nothing_is_above_horizon() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"data": [{"name": "Venus", "aboveHorizon": false}]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let best = sky(&server).select_best(41.9, 12.5, None).await;
        assert_eq!(best.name, "Venus");
        assert!(!best.above_horizon);
    }

    #[tokio::test]
    async fn empty_sky_degrades_to_hemisphere_stars() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"data": []}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let north = sky(&server).select_best(51.5, -0.1, None).await;
        assert_eq!(north.name, "Polaris");
        assert_eq!(north.kind, ObjectKind::Star);

        let south = sky(&server).select_best(-33.9, 18.4, None).await;
        assert_eq!(south.name, "Sirius");
    }

    #[tokio::test]
    async fn enrich_fills_coordinates_from_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/objects/Jupiter/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "name": "Jupiter",
                    "coordinates": {"rightascension": 181.3, "declination": 2.1},
                    "type": "planet",
                    "constellation": "Virgo"
                }"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let mut object = CelestialObject {
            name: "Jupiter".to_string(),
            kind: ObjectKind::Planet,
            score: 100,
            ra: None,
            dec: None,
            magnitude: Some(-2.3),
            altitude: None,
            azimuth: None,
            above_horizon: true,
            constellation: None,
            description: String::new(),
        };
        sky(&server).enrich(&mut object).await;

        assert_eq!(object.ra, Some(181.3));
        assert_eq!(object.dec, Some(2.1));
        assert_eq!(object.constellation.as_deref(), Some("Virgo"));
        // Already-known values are kept.
        assert_eq!(object.magnitude, Some(-2.3));
    }
}
