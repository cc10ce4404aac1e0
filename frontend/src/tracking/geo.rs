use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::tracking::attribution::Geolocation;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geolocation request failed: {0}")]
    Transport(String),
    #[error("geolocation service answered {0}")]
    Status(u16),
    #[error("geolocation response unreadable: {0}")]
    Decode(String),
}

#[derive(Deserialize, Default)]
struct IpLookup {
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

impl From<IpLookup> for Geolocation {
    fn from(lookup: IpLookup) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Geolocation {
            country: present(lookup.country_name),
            city: present(lookup.city),
            region: present(lookup.region),
        }
    }
}

fn parse_lookup(body: &str) -> Result<Geolocation, GeoError> {
    serde_json::from_str::<IpLookup>(body)
        .map(Geolocation::from)
        .map_err(|e| GeoError::Decode(e.to_string()))
}

/// Single attempt against the IP geolocation service. No retry and no timeout.
pub async fn lookup() -> Result<Geolocation, GeoError> {
    let response = Request::get(config::GEOLOCATION_URL)
        .send()
        .await
        .map_err(|e| GeoError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(GeoError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| GeoError::Decode(e.to_string()))?;
    parse_lookup(&body)
}

/// [`lookup`] with every failure folded into `None`.
pub async fn lookup_or_none() -> Option<Geolocation> {
    match lookup().await {
        Ok(location) => Some(location),
        Err(e) => {
            log::warn!("Could not fetch location data: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_fields() {
        let location = parse_lookup(
            r#"{"ip":"1.2.3.4","city":"Helsinki","region":"Uusimaa","country_name":"Finland"}"#,
        )
        .unwrap();
        assert_eq!(location.country.as_deref(), Some("Finland"));
        assert_eq!(location.city.as_deref(), Some("Helsinki"));
        assert_eq!(location.region.as_deref(), Some("Uusimaa"));
    }

    #[test]
    fn missing_or_blank_fields_are_absent() {
        let location = parse_lookup(r#"{"city":"","region":null}"#).unwrap();
        assert_eq!(location, Geolocation::default());
    }

    #[test]
    fn error_body_is_a_decode_error() {
        assert!(matches!(parse_lookup("<html>"), Err(GeoError::Decode(_))));
    }
}
