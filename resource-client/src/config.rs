use chrono::NaiveDateTime;
use directory::utils::schedule::parse_hour;
use directory::{day_and_time, ListingFilter};
use dotenv::dotenv;
use shared_types::{Category, GeoPoint, Weekday};
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Please set a API_URL in your .env file. For local testing, you must forward the port 8000 and copy the forwarded address.")]
    MissingApiUrl,

    #[error("invalid value {value:?} for {name}")]
    InvalidVar { name: &'static str, value: String },
}

/// What the binary prints after fetching the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Map,
    Hours,
}

impl Action {
    pub fn new(action: &str) -> Result<Self, ConfigError> {
        match action.trim().to_ascii_uppercase().as_str() {
            "" | "LIST" => Ok(Self::List),
            "MAP" => Ok(Self::Map),
            "HOURS" => Ok(Self::Hours),
            _ => Err(ConfigError::InvalidVar {
                name: "ACTION",
                value: action.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub action: Action,
    /// Where distances are measured from; unknown when not configured.
    pub origin: GeoPoint,
    pub filter: ListingFilter,
    /// `AT_DAY` / `AT_TIME`: evaluate opening hours at this day or time
    /// instead of the local clock.
    pub at_day: Option<Weekday>,
    pub at_time: Option<String>,
}

impl ClientConfig {
    /// Reads the process environment after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let action = match lookup("ACTION") {
            Some(action) => Action::new(&action)?,
            None => Action::List,
        };

        let origin = GeoPoint {
            latitude: parse_var(&lookup, "ORIGIN_LAT")?,
            longitude: parse_var(&lookup, "ORIGIN_LON")?,
        };

        let filter = ListingFilter {
            category: parse_var::<Category, _>(&lookup, "CATEGORY")?,
            open_only: parse_var::<bool, _>(&lookup, "OPEN_ONLY")?.unwrap_or(false),
            max_distance_miles: parse_var(&lookup, "MAX_DISTANCE_MILES")?,
        };

        let at_day = parse_var::<Weekday, _>(&lookup, "AT_DAY")?;
        let at_time = parse_var::<String, _>(&lookup, "AT_TIME")?;
        if let Some(time) = &at_time {
            if !matches!(parse_hour(time), Ok(hour) if hour < 24) {
                return Err(ConfigError::InvalidVar {
                    name: "AT_TIME",
                    value: time.clone(),
                });
            }
        }

        Ok(Self {
            api_url,
            action,
            origin,
            filter,
            at_day,
            at_time,
        })
    }

    /// Day and `HH:MM` to evaluate opening hours at: the clock reading, with
    /// any configured override applied.
    pub fn clock(&self, now: NaiveDateTime) -> (Weekday, String) {
        let (day, time) = day_and_time(now);
        (
            self.at_day.unwrap_or(day),
            self.at_time.clone().unwrap_or(time),
        )
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn api_url_is_required() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiUrl)
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[("API_URL", "  ")])),
            Err(ConfigError::MissingApiUrl)
        );
    }

    #[test]
    fn defaults_when_only_api_url_is_set() {
        let config =
            ClientConfig::from_lookup(lookup(&[("API_URL", "http://localhost:8000/")])).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000/");
        assert_eq!(config.action, Action::List);
        assert!(!config.origin.is_known());
        assert_eq!(config.filter, ListingFilter::default());
        assert_eq!(config.at_day, None);
        assert_eq!(config.at_time, None);
    }

    #[test]
    fn reads_origin_and_filter() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "http://localhost:8000/"),
            ("ACTION", "map"),
            ("ORIGIN_LAT", "36.1627"),
            ("ORIGIN_LON", "-86.7816"),
            ("CATEGORY", "Health & Wellness"),
            ("OPEN_ONLY", "true"),
            ("MAX_DISTANCE_MILES", "10"),
        ]))
        .unwrap();

        assert_eq!(config.action, Action::Map);
        assert_eq!(config.origin, GeoPoint::new(36.1627, -86.7816));
        assert_eq!(config.filter.category, Some(Category::HealthWellness));
        assert!(config.filter.open_only);
        assert_eq!(config.filter.max_distance_miles, Some(10.0));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_origin = lookup(&[("API_URL", "http://x/"), ("ORIGIN_LAT", "north")]);
        assert_eq!(
            ClientConfig::from_lookup(bad_origin),
            Err(ConfigError::InvalidVar {
                name: "ORIGIN_LAT",
                value: "north".to_string()
            })
        );
        let bad_action = lookup(&[("API_URL", "http://x/"), ("ACTION", "SCRAPE")]);
        assert_eq!(
            ClientConfig::from_lookup(bad_action),
            Err(ConfigError::InvalidVar {
                name: "ACTION",
                value: "SCRAPE".to_string()
            })
        );
        let bad_category = lookup(&[("API_URL", "http://x/"), ("CATEGORY", "Pets")]);
        assert!(ClientConfig::from_lookup(bad_category).is_err());

        for time in ["24:00", "noon"] {
            let bad_time = lookup(&[("API_URL", "http://x/"), ("AT_TIME", time)]);
            assert_eq!(
                ClientConfig::from_lookup(bad_time),
                Err(ConfigError::InvalidVar {
                    name: "AT_TIME",
                    value: time.to_string()
                })
            );
        }
    }

    #[test]
    fn clock_overrides_replace_the_reading() {
        // 2024-03-15 was a Friday
        let now = chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();

        let plain = ClientConfig::from_lookup(lookup(&[("API_URL", "http://x/")])).unwrap();
        assert_eq!(plain.clock(now), (Weekday::Friday, "14:05".to_string()));

        let day_only =
            ClientConfig::from_lookup(lookup(&[("API_URL", "http://x/"), ("AT_DAY", "sun")]))
                .unwrap();
        assert_eq!(day_only.clock(now), (Weekday::Sunday, "14:05".to_string()));

        let both = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "http://x/"),
            ("AT_DAY", "Tuesday"),
            ("AT_TIME", "08:30"),
        ]))
        .unwrap();
        assert_eq!(both.clock(now), (Weekday::Tuesday, "08:30".to_string()));
    }
}
