use std::env;
use std::time::Duration;

use crate::error::{Result, ScrubberError};

/// Which strategy the location decomposer uses for free-text locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStrategy {
    /// Comma-splitting heuristic, no network access.
    Offline,
    /// External geocoding lookup with a bounded per-call timeout.
    Geocode,
}

/// Runtime configuration, read once at startup from the environment.
///
/// Every destination identifier and credential comes from the environment
/// (a `.env` file is honored); a missing required key is a fatal startup
/// error naming the key, never a mid-run failure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Opaque handle the row source reads from.
    pub source_handle: String,
    /// Opaque handle the cleaned rows are written to.
    pub sink_handle: String,
    /// Destination folder identifier for the archival export.
    pub archive_folder: String,
    pub location_strategy: LocationStrategy,
    /// Base URL of the geocoding service. Required when the strategy is `Geocode`.
    pub geocoder_url: Option<String>,
    pub geocoder_timeout: Duration,
    /// Port for the HTTP trigger server.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let location_strategy = parse_location_strategy(env::var("LOCATION_STRATEGY"))?;

        let geocoder_url = env::var("GEOCODER_URL").ok();
        if location_strategy == LocationStrategy::Geocode && geocoder_url.is_none() {
            return Err(ScrubberError::Config(
                "missing required environment variable: GEOCODER_URL (required when LOCATION_STRATEGY=geocode)".to_string(),
            ));
        }

        let geocoder_timeout_secs: u64 = env::var("GEOCODER_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse().map_err(|_| {
                    ScrubberError::Config(format!(
                        "GEOCODER_TIMEOUT_SECS must be an integer, got '{v}'"
                    ))
                })
            })
            .transpose()?
            .unwrap_or(10);

        let port: u16 = env::var("PORT")
            .ok()
            .map(|v| {
                v.parse().map_err(|_| {
                    ScrubberError::Config(format!("PORT must be a number, got '{v}'"))
                })
            })
            .transpose()?
            .unwrap_or(5000);

        Ok(Self {
            source_handle: required("SOURCE_SHEET")?,
            sink_handle: required("CLEAN_SHEET")?,
            archive_folder: required("ARCHIVE_FOLDER")?,
            location_strategy,
            geocoder_url,
            geocoder_timeout: Duration::from_secs(geocoder_timeout_secs),
            port,
        })
    }
}

/// Unset defaults to offline; anything else that is not a recognized value,
/// including a non-UTF-8 value, fails fast like any other bad configuration.
fn parse_location_strategy(
    value: std::result::Result<String, env::VarError>,
) -> Result<LocationStrategy> {
    match value {
        Ok(raw) => match raw.as_str() {
            "offline" => Ok(LocationStrategy::Offline),
            "geocode" => Ok(LocationStrategy::Geocode),
            other => Err(ScrubberError::Config(format!(
                "LOCATION_STRATEGY must be 'offline' or 'geocode', got '{other}'"
            ))),
        },
        Err(env::VarError::NotPresent) => Ok(LocationStrategy::Offline),
        Err(env::VarError::NotUnicode(_)) => Err(ScrubberError::Config(
            "LOCATION_STRATEGY must be valid UTF-8".to_string(),
        )),
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| {
        ScrubberError::Config(format!("missing required environment variable: {key}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_key_names_the_key() {
        let err = required("CONTACT_SCRUBBER_NO_SUCH_KEY").unwrap_err();
        assert!(err.to_string().contains("CONTACT_SCRUBBER_NO_SUCH_KEY"));
    }

    #[test]
    fn unset_strategy_defaults_to_offline() {
        let strategy = parse_location_strategy(Err(env::VarError::NotPresent)).unwrap();
        assert_eq!(strategy, LocationStrategy::Offline);
    }

    #[test]
    fn recognized_strategy_values_parse() {
        assert_eq!(
            parse_location_strategy(Ok("offline".to_string())).unwrap(),
            LocationStrategy::Offline
        );
        assert_eq!(
            parse_location_strategy(Ok("geocode".to_string())).unwrap(),
            LocationStrategy::Geocode
        );
    }

    #[test]
    fn unknown_strategy_value_is_fatal() {
        let err = parse_location_strategy(Ok("mystery".to_string())).unwrap_err();
        assert!(err.to_string().contains("mystery"));
    }

    #[test]
    fn non_unicode_strategy_value_is_fatal() {
        let err = parse_location_strategy(Err(env::VarError::NotUnicode(
            std::ffi::OsString::from("\u{fffd}"),
        )))
        .unwrap_err();
        assert!(err.to_string().contains("LOCATION_STRATEGY"));
    }
}
