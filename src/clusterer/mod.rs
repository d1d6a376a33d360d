mod centroid;
mod error;
mod init;
mod kmeans;
mod space;
mod types;
mod validation;


pub use centroid::{centers_from, centers_in};
pub use error::ClusterError;
pub use kmeans::{KMeans, cluster, cluster_coordinates};
pub use space::{CoordinateSpace, FlatPlane, mean_coordinate, squared_euclidean};
pub use types::{Center, ClusterAssignment, ClusteringResult, KMeansInit, KMeansOptions};

pub const DEFAULT_MAX_ITER: usize = 300;

pub const DEFAULT_N_INIT: usize = 1;
