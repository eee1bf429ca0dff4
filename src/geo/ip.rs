//! IP-based geolocation, used when the visitor's input does not resolve
//! to any known place.

use std::time::Duration;

use serde::Deserialize;

use crate::fetch::{FetchError, FetchResult, json_body, send_with_retry};

/// Geolocation answers have to be fast to be worth it; the sky does not
/// change much between neighboring cities.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct IpLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    timezone: Option<String>,
}

pub struct GeoIpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoIpClient {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Locates the caller through their public IP address.
    pub async fn locate(&self) -> FetchResult<IpLocation> {
        let request = self.client.get(&self.endpoint).timeout(LOOKUP_TIMEOUT);
        let response = send_with_retry(request).await?;
        let data: IpApiResponse = json_body(response).await?;

        let (Some(latitude), Some(longitude)) = (data.latitude, data.longitude) else {
            return Err(FetchError::Decode(
                "could not determine coordinates".to_string(),
            ));
        };

        Ok(IpLocation {
            latitude,
            longitude,
            city: data.city.unwrap_or_else(|| "Unknown".to_string()),
            country: data
                .country_name
                .or(data.country_code)
                .unwrap_or_else(|| "Unknown".to_string()),
            timezone: data.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> reqwest::Client {
        reqwest::Client::new()
    }

    #[tokio::test]
    async fn locate_parses_a_full_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "ip": "93.45.0.1",
                    "city": "Rome",
                    "country_name": "Italy",
                    "country_code": "IT",
                    "latitude": 41.9,
                    "longitude": 12.5,
                    "timezone": "Europe/Rome"
                }"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let geo = GeoIpClient::new(client(), format!("{}/json/", server.uri()));
        let location = geo.locate().await.unwrap();

        assert_eq!(location.city, "Rome");
        assert_eq!(location.country, "Italy");
        assert_eq!(location.latitude, 41.9);
        assert_eq!(location.timezone.as_deref(), Some("Europe/Rome"));
    }

    #[tokio::test]
    async fn locate_fails_without_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"ip": "93.45.0.1", "city": "Rome"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let geo = GeoIpClient::new(client(), format!("{}/json/", server.uri()));
        let err = geo.locate().await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn locate_falls_back_to_country_code_and_unknown_city() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"latitude": -33.9, "longitude": 18.4, "country_code": "ZA"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let geo = GeoIpClient::new(client(), format!("{}/json/", server.uri()));
        let location = geo.locate().await.unwrap();

        assert_eq!(location.city, "Unknown");
        assert_eq!(location.country, "ZA");
        assert_eq!(location.timezone, None);
    }
}
