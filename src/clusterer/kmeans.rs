use crate::clusterer::{
    DEFAULT_MAX_ITER, DEFAULT_N_INIT,
    centroid::centers_in,
    error::ClusterError,
    init::initial_centroids,
    space::{CoordinateSpace, FlatPlane},
    types::{ClusterAssignment, ClusteringResult, KMeansInit, KMeansOptions},
    validation::{validate_coordinates, validate_grid, validate_options},
};
use crate::point::{Coordinate, Located, Point};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Cluster `points` into `k` groups with Lloyd's algorithm.
///
/// A fixed `seed` gives a fixed result for a fixed input. With `None` a seed
/// is drawn from the OS and reported in [`ClusteringResult::seed`].
pub fn cluster(
    points: &[Point],
    k: usize,
    seed: Option<u64>,
) -> Result<ClusteringResult, ClusterError> {
    KMeans::new(k).seed(seed).fit(points)
}

pub fn cluster_coordinates(
    coords: &[Coordinate],
    k: usize,
    seed: Option<u64>,
) -> Result<ClusteringResult, ClusterError> {
    KMeans::new(k).seed(seed).fit(coords)
}

#[derive(Debug, Clone)]
pub struct KMeans<S = FlatPlane> {
    options: KMeansOptions,
    space: S,
}

impl KMeans<FlatPlane> {
    pub fn new(k: usize) -> Self {
        Self {
            options: KMeansOptions {
                k,
                max_iter: DEFAULT_MAX_ITER,
                n_init: DEFAULT_N_INIT,
                seed: None,
                init: KMeansInit::KMeansPlusPlus,
            },
            space: FlatPlane,
        }
    }

    pub fn from_options(options: KMeansOptions) -> Self {
        Self {
            options,
            space: FlatPlane,
        }
    }
}

impl<S: CoordinateSpace> KMeans<S> {
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.options.max_iter = max_iter;
        self
    }

    pub fn n_init(mut self, n_init: usize) -> Self {
        self.options.n_init = n_init;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.options.seed = seed;
        self
    }

    pub fn init(mut self, init: KMeansInit) -> Self {
        self.options.init = init;
        self
    }

    pub fn with_space<T: CoordinateSpace>(self, space: T) -> KMeans<T> {
        KMeans {
            options: self.options,
            space,
        }
    }

    pub fn options(&self) -> &KMeansOptions {
        &self.options
    }

    /// Run the clustering. Every check happens before the first iteration.
    pub fn fit<P: Located>(&self, points: &[P]) -> Result<ClusteringResult, ClusterError> {
        validate_options(&self.options)?;

        let k = self.options.k;
        let coords: Vec<Coordinate> = points.iter().map(Located::coordinate).collect();
        validate_coordinates(&coords, k)?;

        let seed = self.options.seed.unwrap_or_else(|| rand::rngs::OsRng.next_u64());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut best: Option<LloydRun> = None;
        for run in 0..self.options.n_init {
            let start = initial_centroids(&self.space, &coords, k, self.options.init, &mut rng);
            let outcome = lloyd(&self.space, &coords, start, self.options.max_iter);

            debug!(
                run,
                inertia = outcome.inertia,
                iterations = outcome.iterations,
                "k-means run finished"
            );

            if best.as_ref().map_or(true, |b| outcome.inertia < b.inertia) {
                best = Some(outcome);
            }
        }

        let best = best.ok_or_else(|| ClusterError::InvalidParameter {
            name: "n_init",
            reason: "must be at least 1".to_string(),
        })?;

        if !best.converged {
            warn!(
                max_iter = self.options.max_iter,
                "k-means did not converge, returning last assignment"
            );
        }

        let centers = centers_in(&self.space, &coords, &best.labels, k);
        let empty = centers.iter().filter(|c| c.is_empty()).count();
        if empty > 0 {
            warn!(empty, k, "some clusters ended with no members");
        }

        info!(
            k,
            n = coords.len(),
            seed,
            iterations = best.iterations,
            converged = best.converged,
            inertia = best.inertia,
            "k-means complete"
        );

        Ok(ClusteringResult {
            assignment: ClusterAssignment::new(best.labels, k),
            centers,
            centroids: best.centroids,
            inertia: best.inertia,
            inertia_history: best.inertia_history,
            iterations: best.iterations,
            converged: best.converged,
            seed,
        })
    }

    pub fn predict<P: Located>(
        &self,
        centroids: &[Coordinate],
        points: &[P],
    ) -> Result<Vec<usize>, ClusterError> {
        if centroids.is_empty() {
            return Err(ClusterError::InvalidParameter {
                name: "centroids",
                reason: "at least one centroid is required".to_string(),
            });
        }

        let coords: Vec<Coordinate> = points.iter().map(Located::coordinate).collect();
        validate_grid(&coords)?;

        Ok(coords
            .iter()
            .map(|&c| nearest(&self.space, c, centroids).0)
            .collect())
    }
}

struct LloydRun {
    labels: Vec<usize>,
    centroids: Vec<Coordinate>,
    inertia: f64,
    inertia_history: Vec<f64>,
    iterations: usize,
    converged: bool,
}

fn lloyd<S: CoordinateSpace>(
    space: &S,
    coords: &[Coordinate],
    mut centroids: Vec<Coordinate>,
    max_iter: usize,
) -> LloydRun {
    let n = coords.len();
    let k = centroids.len();

    // usize::MAX marks "not yet assigned" so the first pass always counts as a change
    let mut labels = vec![usize::MAX; n];
    let mut inertia_history = Vec::new();
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iter {
        iterations += 1;

        // 1. Assign each point to the nearest centroid
        let mut moved = 0;
        let mut inertia = 0.0;
        for (label, &c) in labels.iter_mut().zip(coords) {
            let (best, dist) = nearest(space, c, &centroids);
            inertia += dist;
            if *label != best {
                moved += 1;
                *label = best;
            }
        }
        inertia_history.push(inertia);

        debug!(iteration = iterations, inertia, moved, "lloyd iteration");

        if moved == 0 {
            converged = true;
            break;
        }

        // 2. Recompute centroids; an empty cluster keeps its position
        let mut members: Vec<Vec<Coordinate>> = vec![Vec::new(); k];
        for (&label, &c) in labels.iter().zip(coords) {
            members[label].push(c);
        }
        for (centroid, group) in centroids.iter_mut().zip(&members) {
            if let Some(updated) = space.centroid(group) {
                *centroid = updated;
            }
        }
    }

    let inertia = labels
        .iter()
        .zip(coords)
        .map(|(&label, &c)| space.distance_sq(c, centroids[label]))
        .sum::<f64>();

    LloydRun {
        labels,
        centroids,
        inertia,
        inertia_history,
        iterations,
        converged,
    }
}

/// Index of the closest centroid and its squared distance; ties go to the lowest index
fn nearest<S: CoordinateSpace>(space: &S, c: Coordinate, centroids: &[Coordinate]) -> (usize, f64) {
    let mut best = 0;
    let mut best_dist = space.distance_sq(c, centroids[0]);

    for (i, &centroid) in centroids.iter().enumerate().skip(1) {
        let dist = space.distance_sq(c, centroid);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }

    (best, best_dist)
}
