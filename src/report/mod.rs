//! Warehouse placement report built from a clustering result.

#[cfg(test)]
mod tests;

use crate::clusterer::{ClusteringResult, KMeansOptions};
use crate::point::Point;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// One proposed warehouse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseSite {
    /// 1-based, in cluster-id order over non-empty clusters
    pub number: usize,
    pub label: String,
    pub cluster_id: usize,
    pub longitude: f64,
    pub latitude: f64,
    /// Demand points served by this site
    pub demand_points: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    pub generated_at: String,
    /// SHA-256 over the inputs, k and seed
    pub fingerprint: String,
    /// Options as run, with the seed actually used
    pub options: KMeansOptions,
    pub point_count: usize,
    pub iterations: usize,
    pub converged: bool,
    pub inertia: f64,
    pub sites: Vec<WarehouseSite>,
    pub empty_clusters: usize,
    /// Cluster id per input point
    pub labels: Vec<usize>,
}

impl PlacementReport {
    /// Build a report stamped with the current time
    pub fn build(points: &[Point], result: &ClusteringResult, options: &KMeansOptions) -> Self {
        Self::build_at(points, result, options, Utc::now())
    }

    pub fn build_at(
        points: &[Point],
        result: &ClusteringResult,
        options: &KMeansOptions,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let sites = result
            .occupied_centers()
            .enumerate()
            .filter_map(|(i, center)| {
                center.location.map(|location| WarehouseSite {
                    number: i + 1,
                    label: format!("Warehouse {}", i + 1),
                    cluster_id: center.cluster_id,
                    longitude: location.longitude,
                    latitude: location.latitude,
                    demand_points: center.size,
                })
            })
            .collect();

        let mut options = options.clone();
        options.seed = Some(result.seed);

        Self {
            generated_at: generated_at.to_rfc3339(),
            fingerprint: fingerprint(points, options.k, result.seed),
            options,
            point_count: points.len(),
            iterations: result.iterations,
            converged: result.converged,
            inertia: result.inertia,
            sites,
            empty_clusters: result.empty_cluster_count(),
            labels: result.assignment.labels().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PlacementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Warehouse plan: {} sites for {} demand points (k={}, seed={})",
            self.sites.len(),
            self.point_count,
            self.options.k,
            self.options.seed.unwrap_or_default()
        )?;

        let status = if self.converged {
            "Converged"
        } else {
            "Stopped without converging"
        };
        writeln!(
            f,
            "{} after {} iterations, inertia {:.4}",
            status, self.iterations, self.inertia
        )?;

        for site in &self.sites {
            writeln!(
                f,
                "  {:<14} Lat: {:.4}  Lon: {:.4}  ({} points)",
                site.label, site.latitude, site.longitude, site.demand_points
            )?;
        }

        if self.empty_clusters > 0 {
            writeln!(f, "  {} clusters had no members", self.empty_clusters)?;
        }

        write!(f, "Fingerprint: {}", self.fingerprint)
    }
}

/// Hex SHA-256 identifying an (input, k, seed) combination
pub fn fingerprint(points: &[Point], k: usize, seed: u64) -> String {
    let mut hasher = Sha256::new();

    for point in points {
        hasher.update(point.longitude().to_bits().to_le_bytes());
        hasher.update(point.latitude().to_bits().to_le_bytes());
        hasher.update(point.category().as_bytes());
        hasher.update([0u8]);
        hasher.update(point.region().as_bytes());
        hasher.update([0u8]);
    }
    hasher.update((k as u64).to_le_bytes());
    hasher.update(seed.to_le_bytes());

    hex::encode(hasher.finalize())
}
