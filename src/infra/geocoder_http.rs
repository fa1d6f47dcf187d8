use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::ports::{GeocoderPort, StructuredAddress};
use crate::error::Result;

/// Nominatim-style geocoding client. The per-call timeout is baked into the
/// client so no lookup can stall the row loop; callers treat any error as an
/// all-unknown result.
pub struct HttpGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGeocoder {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("contact_scrubber/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postcode: Option<String>,
}

#[async_trait]
impl GeocoderPort for HttpGeocoder {
    async fn geocode(&self, query: &str) -> std::result::Result<Option<StructuredAddress>, String> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(|e| format!("geocoding request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("geocoding service returned {}", response.status()));
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| format!("geocoding response was not valid JSON: {e}"))?;

        Ok(places
            .into_iter()
            .next()
            .and_then(|place| place.address)
            .map(|address| StructuredAddress {
                city: address.city,
                town: address.town,
                village: address.village,
                state: address.state,
                country: address.country,
                postcode: address.postcode,
            }))
    }
}
