use crate::clusterer::space::CoordinateSpace;
use crate::clusterer::types::KMeansInit;
use crate::point::Coordinate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick `k` starting centroids from `coords`.
///
/// Callers guarantee `1 <= k <= coords.len()`.
pub fn initial_centroids<S, R>(
    space: &S,
    coords: &[Coordinate],
    k: usize,
    init: KMeansInit,
    rng: &mut R,
) -> Vec<Coordinate>
where
    S: CoordinateSpace + ?Sized,
    R: Rng,
{
    match init {
        KMeansInit::KMeansPlusPlus => kmeans_plus_plus(space, coords, k, rng),
        KMeansInit::Random => coords.choose_multiple(rng, k).copied().collect(),
    }
}

/// K-means++ seeding: each new centroid is drawn with probability
/// proportional to its squared distance from the nearest chosen one.
fn kmeans_plus_plus<S, R>(space: &S, coords: &[Coordinate], k: usize, rng: &mut R) -> Vec<Coordinate>
where
    S: CoordinateSpace + ?Sized,
    R: Rng,
{
    let n = coords.len();
    let mut centroids = Vec::with_capacity(k);

    let first = coords[rng.gen_range(0..n)];
    centroids.push(first);

    let mut min_dist: Vec<f64> = coords.iter().map(|&c| space.distance_sq(c, first)).collect();

    while centroids.len() < k {
        let total: f64 = min_dist.iter().sum();

        let next = if total > 0.0 && total.is_finite() {
            let threshold = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            min_dist
                .iter()
                .position(|&d| {
                    cumulative += d;
                    cumulative > threshold
                })
                // rounding can leave the running sum just short of the threshold
                .or_else(|| min_dist.iter().rposition(|&d| d > 0.0))
                .unwrap_or(0)
        } else {
            // every point sits on a chosen centroid
            rng.gen_range(0..n)
        };

        let chosen = coords[next];
        centroids.push(chosen);

        for (d, &c) in min_dist.iter_mut().zip(coords) {
            let candidate = space.distance_sq(c, chosen);
            if candidate < *d {
                *d = candidate;
            }
        }
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clusterer::space::FlatPlane;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid() -> Vec<Coordinate> {
        (0..10)
            .flat_map(|x| (0..10).map(move |y| Coordinate::new(x as f64, y as f64)))
            .collect()
    }

    #[test]
    fn test_plus_plus_returns_k_input_points() {
        let coords = grid();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let centroids =
            initial_centroids(&FlatPlane, &coords, 5, KMeansInit::KMeansPlusPlus, &mut rng);

        assert_eq!(centroids.len(), 5);
        for c in &centroids {
            assert!(coords.contains(c));
        }
    }

    #[test]
    fn test_plus_plus_picks_distinct_points_when_possible() {
        let coords = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(5.0, 5.0),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let centroids =
            initial_centroids(&FlatPlane, &coords, 2, KMeansInit::KMeansPlusPlus, &mut rng);

        // a zero-weight point can never be sampled while another has weight
        assert_ne!(centroids[0], centroids[1]);
    }

    #[test]
    fn test_plus_plus_all_duplicates() {
        let coords = vec![Coordinate::new(1.0, 1.0); 4];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let centroids =
            initial_centroids(&FlatPlane, &coords, 3, KMeansInit::KMeansPlusPlus, &mut rng);

        assert_eq!(centroids, vec![Coordinate::new(1.0, 1.0); 3]);
    }

    #[test]
    fn test_random_init_distinct_indices() {
        let coords = grid();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let centroids = initial_centroids(&FlatPlane, &coords, 10, KMeansInit::Random, &mut rng);

        assert_eq!(centroids.len(), 10);
        for (i, a) in centroids.iter().enumerate() {
            for b in &centroids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_same_seed_same_centroids() {
        let coords = grid();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);

        assert_eq!(
            initial_centroids(&FlatPlane, &coords, 4, KMeansInit::KMeansPlusPlus, &mut a),
            initial_centroids(&FlatPlane, &coords, 4, KMeansInit::KMeansPlusPlus, &mut b),
        );
    }
}
