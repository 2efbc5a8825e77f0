use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::schedule::WeeklySchedule;

/// Latitude/longitude in decimal degrees. Either side may be unknown;
/// `Some(0.0)` is a real coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.coordinates().is_some()
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Urgent Needs")]
    UrgentNeeds,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
    #[serde(rename = "Family & Pets")]
    FamilyPets,
    #[serde(rename = "Specialized")]
    Specialized,
    #[serde(rename = "Help")]
    Help,
    #[serde(rename = "Find Work")]
    FindWork,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::UrgentNeeds,
        Category::HealthWellness,
        Category::FamilyPets,
        Category::Specialized,
        Category::Help,
        Category::FindWork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::UrgentNeeds => "Urgent Needs",
            Category::HealthWellness => "Health & Wellness",
            Category::FamilyPets => "Family & Pets",
            Category::Specialized => "Specialized",
            Category::Help => "Help",
            Category::FindWork => "Find Work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ScheduleError::UnknownCategory(s.to_string()))
    }
}

/// Phone numbers arrive either as a JSON number (backend schema) or as a
/// formatted string such as `(615) 555-0100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Phone {
    Number(u64),
    Text(String),
}

impl Phone {
    pub fn digits(&self) -> String {
        match self {
            Phone::Number(n) => n.to_string(),
            Phone::Text(s) => s.chars().filter(char::is_ascii_digit).collect(),
        }
    }
}

/// A directory entry as served by the resources endpoint.
///
/// Decoding is lenient so one odd record cannot sink a whole listing: an
/// unrecognised `category` becomes `None`, a null `hours` becomes an empty
/// schedule, and the legacy `lattitude` spelling is read when `latitude` is
/// absent or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRecord")]
pub struct ResourceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub org_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Phone>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<Category>,
    pub id_required: bool,
    pub hours: WeeklySchedule,
}

impl ResourceRecord {
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Deserialize)]
struct WireRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    org_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<Phone>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    lattitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_category")]
    category: Option<Category>,
    #[serde(default)]
    id_required: bool,
    #[serde(default)]
    hours: Option<WeeklySchedule>,
}

impl From<WireRecord> for ResourceRecord {
    fn from(wire: WireRecord) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            org_name: wire.org_name,
            email: wire.email,
            phone: wire.phone,
            address: wire.address,
            latitude: wire.latitude.or(wire.lattitude),
            longitude: wire.longitude,
            category: wire.category,
            id_required: wire.id_required,
            hours: wire.hours.unwrap_or_default(),
        }
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CategoryField {
        Known(Category),
        Other(IgnoredAny),
    }

    Ok(match Option::<CategoryField>::deserialize(deserializer)? {
        Some(CategoryField::Known(category)) => Some(category),
        Some(CategoryField::Other(_)) | None => None,
    })
}

/// Body of a successful `GET resources` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub success: bool,
    pub resources: Vec<ResourceRecord>,
}

/// Body the backend sends alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}
