// record.rs - one row of the source table, before validation
use serde::Deserialize;
use std::fmt;

/// Raw row. Source column names are accepted as aliases; `id` and any other
/// column are ignored.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "geolocation_lng", alias = "lng")]
    pub longitude: f64,
    #[serde(alias = "geolocation_lat", alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "object")]
    pub category: Label,
    #[serde(alias = "state", alias = "geolocation_state")]
    pub region: Label,
}

/// Text column that may arrive as a string or a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}
