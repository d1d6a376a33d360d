use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointError {
    #[error("Non-finite coordinate: longitude={longitude}, latitude={latitude}")]
    NonFinite { longitude: f64, latitude: f64 },

    #[error("Coordinate out of range: longitude={longitude} (expected -180..=180), latitude={latitude} (expected -90..=90)")]
    OutOfRange { longitude: f64, latitude: f64 },
}
