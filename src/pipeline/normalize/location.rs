use std::sync::Arc;

use tracing::warn;

use crate::app::ports::GeocoderPort;
use crate::domain::{LocationParts, UNKNOWN};

/// Country names and ISO codes recognized by the offline heuristic when a
/// location string has a single part. Lowercase for case-insensitive lookup.
const KNOWN_COUNTRIES: &[&str] = &[
    "argentina", "ar", "australia", "au", "bolivia", "bo", "brazil", "br",
    "canada", "ca", "chile", "cl", "china", "cn", "colombia", "co",
    "ecuador", "ec", "france", "fr", "germany", "de", "india", "in",
    "italy", "it", "japan", "jp", "mexico", "mx", "netherlands", "nl",
    "paraguay", "py", "peru", "pe", "portugal", "pt", "spain", "es",
    "united kingdom", "uk", "gb", "united states", "united states of america",
    "usa", "us", "uruguay", "uy", "venezuela", "ve",
];

fn is_known_country(part: &str) -> bool {
    let lower = part.to_lowercase();
    KNOWN_COUNTRIES.contains(&lower.as_str())
}

/// Comma-splitting heuristic, no network access.
///
/// Zero parts: all unknown. One part: country if it matches the known-country
/// table, city otherwise. Two or more parts: first is the city, second is the
/// state (kept verbatim, even when it looks like a 2-3 letter code), and the
/// last part becomes the country when it is at least 3 characters. A postal
/// code is never derived offline.
pub fn decompose_offline(location: &str) -> LocationParts {
    let parts: Vec<&str> = location
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let mut decomposed = LocationParts::unknown();
    match parts.as_slice() {
        [] => {}
        [only] => {
            if is_known_country(only) {
                decomposed.country = (*only).to_string();
            } else {
                decomposed.city = (*only).to_string();
            }
        }
        [city, state, rest @ ..] => {
            decomposed.city = (*city).to_string();
            decomposed.state = (*state).to_string();
            let last = rest.last().unwrap_or(state);
            if last.len() >= 3 {
                decomposed.country = (*last).to_string();
            }
        }
    }
    decomposed
}

/// Location decomposition strategy for a run: either the offline heuristic
/// or an injected geocoding collaborator.
#[derive(Clone)]
pub enum LocationResolver {
    Offline,
    Geocode(Arc<dyn GeocoderPort>),
}

impl LocationResolver {
    /// Decomposes a free-text location. Never fails past this point: an empty
    /// input, a geocoder timeout, or any lookup error degrades to all-unknown
    /// parts instead of aborting the row.
    pub async fn resolve(&self, location: &str) -> LocationParts {
        if location.trim().is_empty() {
            return LocationParts::unknown();
        }
        match self {
            LocationResolver::Offline => decompose_offline(location),
            LocationResolver::Geocode(geocoder) => match geocoder.geocode(location).await {
                Ok(Some(address)) => LocationParts {
                    city: address
                        .city
                        .or(address.town)
                        .or(address.village)
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                    state: address.state.unwrap_or_else(|| UNKNOWN.to_string()),
                    country: address.country.unwrap_or_else(|| UNKNOWN.to_string()),
                    postal_code: address.postcode.unwrap_or_else(|| UNKNOWN.to_string()),
                },
                Ok(None) => LocationParts::unknown(),
                Err(err) => {
                    warn!(%location, error = %err, "geocoding failed, using unknown parts");
                    LocationParts::unknown()
                }
            },
        }
    }
}
