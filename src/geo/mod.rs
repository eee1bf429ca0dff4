//! Turning whatever the visitor typed into coordinates the astronomy
//! services understand.
//!
//! Resolution tries, in order: an exact gazetteer match, a
//! case-insensitive match, a partial match on the city part of the name,
//! and finally a raw `lat, lon` coordinate pair. Anything else is left to
//! IP-based geolocation.

mod cities;
mod ip;

pub use cities::{CITIES, City};
pub use ip::{GeoIpClient, IpLocation};

/// A place on Earth the night sky is observed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    fn from_city(city: &City) -> Self {
        Self {
            name: city.name.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

pub fn resolve_location(input: &str) -> Option<Place> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for city in CITIES {
        if city.name == input {
            tracing::info!(
                "Exact match: {input} -> ({}, {})",
                city.latitude,
                city.longitude
            );
            return Some(Place::from_city(city));
        }
    }

    let input_lower = input.to_lowercase();
    for city in CITIES {
        if city.name.to_lowercase() == input_lower {
            tracing::info!("Case-insensitive match: {input} -> {}", city.name);
            return Some(Place::from_city(city));
        }
    }

    for city in CITIES {
        let city_part = city
            .name
            .split(',')
            .next()
            .unwrap_or(city.name)
            .trim()
            .to_lowercase();
        if input_lower == city_part
            || input_lower.contains(&city_part)
            || city_part.contains(&input_lower)
        {
            tracing::info!("Partial match: {input} -> {}", city.name);
            return Some(Place::from_city(city));
        }
    }

    if let Some(place) = parse_coordinates(input) {
        return Some(place);
    }

    tracing::warn!("Could not parse location: {input}");
    None
}

fn parse_coordinates(input: &str) -> Option<Place> {
    let compact = input.replace(' ', "");
    let mut parts = compact.split(',');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let latitude: f64 = first.parse().ok()?;
    let longitude: f64 = second.parse().ok()?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    tracing::info!("Coordinates parsed: ({latitude}, {longitude})");
    Some(Place {
        name: format!("Location ({latitude:.2}, {longitude:.2})"),
        latitude,
        longitude,
    })
}
