mod error;


pub use error::PointError;

use serde::{Deserialize, Serialize};

pub const MAX_LONGITUDE: f64 = 180.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// A position on the flat longitude/latitude plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// True when neither component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Longitude within [-180, 180] and latitude within [-90, 90]
    pub fn in_range(&self) -> bool {
        (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
            && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
    }
}

/// Anything the clusterer can place on the plane
pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// A demand point tagged with its category and region.
///
/// Built only through [`Point::new`] (or deserialization, which runs the same
/// check), so a `Point` always sits on the longitude/latitude grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointFields")]
pub struct Point {
    longitude: f64,
    latitude: f64,
    category: String,
    region: String,
}

/// Ordered point collection; output labels follow this order
pub type PointSet = Vec<Point>;

impl Point {
    /// Create a validated point
    pub fn new(
        longitude: f64,
        latitude: f64,
        category: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, PointError> {
        let coordinate = Coordinate::new(longitude, latitude);
        if !coordinate.is_finite() {
            return Err(PointError::NonFinite {
                longitude,
                latitude,
            });
        }
        if !coordinate.in_range() {
            return Err(PointError::OutOfRange {
                longitude,
                latitude,
            });
        }

        Ok(Self {
            longitude,
            latitude,
            category: category.into(),
            region: region.into(),
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl Located for Point {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.longitude, self.latitude)
    }
}

/// Canonical form of a category label: first character upper-case, the rest
/// lower-case.
///
/// Surrounding whitespace is trimmed first, unlike a plain capitalize, so
/// `" toys"` and `"toys"` land in the same category.
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[derive(Deserialize)]
struct PointFields {
    longitude: f64,
    latitude: f64,
    category: String,
    region: String,
}

impl TryFrom<PointFields> for Point {
    type Error = PointError;

    fn try_from(fields: PointFields) -> Result<Self, Self::Error> {
        Point::new(
            fields.longitude,
            fields.latitude,
            fields.category,
            fields.region,
        )
    }
}
