use crate::point::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KMeansInit {
    #[default]
    #[serde(rename = "kmeans++")]
    KMeansPlusPlus,
    #[serde(rename = "random")]
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansOptions {
    pub k: usize,
    pub max_iter: usize,
    /// Independent initializations; the lowest-inertia run is kept
    pub n_init: usize,
    /// Seed for the initialization RNG; a fresh one is drawn when absent
    pub seed: Option<u64>,
    pub init: KMeansInit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterAssignment {
    labels: Vec<usize>,
    k: usize,
}

impl ClusterAssignment {
    pub(crate) fn new(labels: Vec<usize>, k: usize) -> Self {
        debug_assert!(labels.iter().all(|&l| l < k));
        Self { labels, k }
    }

    pub fn label(&self, index: usize) -> Option<usize> {
        self.labels.get(index).copied()
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Input indices belonging to `cluster_id`, in input order
    pub fn members(&self, cluster_id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == cluster_id)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub cluster_id: usize,
    pub size: usize,
    /// `None` marks an empty cluster
    pub location: Option<Coordinate>,
}

impl Center {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusteringResult {
    pub assignment: ClusterAssignment,
    /// One entry per cluster id, ascending
    pub centers: Vec<Center>,
    /// Final engine centroids; empty clusters keep their last position here
    pub centroids: Vec<Coordinate>,
    pub inertia: f64,
    /// Inertia measured at every assignment step of the winning run
    pub inertia_history: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// Seed the initialization actually used
    pub seed: u64,
}

impl ClusteringResult {
    pub fn occupied_centers(&self) -> impl Iterator<Item = &Center> {
        self.centers.iter().filter(|c| !c.is_empty())
    }

    pub fn empty_cluster_count(&self) -> usize {
        self.centers.iter().filter(|c| c.is_empty()).count()
    }
}
