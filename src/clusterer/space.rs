use crate::point::Coordinate;

/// Distance and averaging rules the clusterer runs on.
///
/// The iteration logic only talks to this trait, so a geodesic variant can
/// replace [`FlatPlane`] without touching assignment or update code.
pub trait CoordinateSpace: Send + Sync {
    fn distance_sq(&self, a: Coordinate, b: Coordinate) -> f64;

    /// Representative location of a group, `None` when the group is empty
    fn centroid(&self, members: &[Coordinate]) -> Option<Coordinate>;
}

/// Longitude/latitude treated as a Euclidean plane.
///
/// Accurate enough for regional siting; no antimeridian wraparound or polar
/// correction is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatPlane;

impl CoordinateSpace for FlatPlane {
    fn distance_sq(&self, a: Coordinate, b: Coordinate) -> f64 {
        squared_euclidean(a, b)
    }

    fn centroid(&self, members: &[Coordinate]) -> Option<Coordinate> {
        mean_coordinate(members)
    }
}

pub fn squared_euclidean(a: Coordinate, b: Coordinate) -> f64 {
    let dlon = a.longitude - b.longitude;
    let dlat = a.latitude - b.latitude;
    dlon * dlon + dlat * dlat
}

/// Arithmetic mean of longitudes and latitudes.
///
/// Kept as a running mean so the partial sums never leave the input's range.
pub fn mean_coordinate(members: &[Coordinate]) -> Option<Coordinate> {
    let (first, rest) = members.split_first()?;

    let mut mean = *first;
    for (i, c) in rest.iter().enumerate() {
        let n = (i + 2) as f64;
        mean.longitude += (c.longitude - mean.longitude) / n;
        mean.latitude += (c.latitude - mean.latitude) / n;
    }

    Some(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_euclidean() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(squared_euclidean(a, b), 25.0);
        assert_eq!(squared_euclidean(b, a), 25.0);
        assert_eq!(squared_euclidean(a, a), 0.0);
    }

    #[test]
    fn test_mean_coordinate() {
        let members = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(2.0, 4.0),
            Coordinate::new(4.0, 2.0),
        ];
        let mean = mean_coordinate(&members).unwrap();
        assert!((mean.longitude - 2.0).abs() < 1e-12);
        assert!((mean.latitude - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_nothing_is_none() {
        assert!(mean_coordinate(&[]).is_none());
        assert!(FlatPlane.centroid(&[]).is_none());
    }

    #[test]
    fn test_mean_of_huge_values_stays_finite() {
        let members = vec![
            Coordinate::new(1.0e308, 0.0),
            Coordinate::new(1.5e308, 0.0),
            Coordinate::new(1.2e308, 0.0),
        ];
        let mean = mean_coordinate(&members).unwrap();
        assert!(mean.is_finite());
        assert!((mean.longitude / 1.0e308 - 1.2333333333333334).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_one_is_itself() {
        let c = Coordinate::new(-46.63, -23.55);
        assert_eq!(mean_coordinate(&[c]), Some(c));
    }
}
