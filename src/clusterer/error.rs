use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Insufficient data: need at least {required} points, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Non-finite coordinate at index {index}: longitude={longitude}, latitude={latitude}")]
    NonFiniteCoordinate {
        index: usize,
        longitude: f64,
        latitude: f64,
    },

    #[error("Coordinate out of range at index {index}: longitude={longitude}, latitude={latitude}")]
    CoordinateOutOfRange {
        index: usize,
        longitude: f64,
        latitude: f64,
    },
}
