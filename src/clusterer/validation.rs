use crate::clusterer::error::ClusterError;
use crate::clusterer::types::KMeansOptions;
use crate::point::Coordinate;

pub fn validate_options(options: &KMeansOptions) -> Result<(), ClusterError> {
    validate_n_clusters(options.k)?;
    if options.max_iter == 0 {
        return Err(ClusterError::InvalidParameter {
            name: "max_iter",
            reason: "must be at least 1".to_string(),
        });
    }
    if options.n_init == 0 {
        return Err(ClusterError::InvalidParameter {
            name: "n_init",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_n_clusters(k: usize) -> Result<(), ClusterError> {
    if k == 0 {
        return Err(ClusterError::InvalidParameter {
            name: "k",
            reason: "cluster count must be at least 1, got 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_coordinates(coords: &[Coordinate], k: usize) -> Result<(), ClusterError> {
    if coords.is_empty() {
        return Err(ClusterError::InsufficientData {
            required: k,
            got: 0,
        });
    }

    validate_grid(coords)?;

    if coords.len() < k {
        return Err(ClusterError::InsufficientData {
            required: k,
            got: coords.len(),
        });
    }

    Ok(())
}

/// First non-finite, then first out-of-range coordinate
pub fn validate_grid(coords: &[Coordinate]) -> Result<(), ClusterError> {
    if let Some((index, c)) = coords.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(ClusterError::NonFiniteCoordinate {
            index,
            longitude: c.longitude,
            latitude: c.latitude,
        });
    }

    if let Some((index, c)) = coords.iter().enumerate().find(|(_, c)| !c.in_range()) {
        return Err(ClusterError::CoordinateOutOfRange {
            index,
            longitude: c.longitude,
            latitude: c.latitude,
        });
    }

    Ok(())
}
