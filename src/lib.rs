// Public API exports
pub mod clusterer;
pub mod dataset;
pub mod point;
pub mod report;
pub mod selection;

// Re-export main types for convenience
pub use point::{Coordinate, Located, Point, PointError, PointSet, normalize_label};

pub use clusterer::{
    Center, ClusterAssignment, ClusterError, ClusteringResult, CoordinateSpace, DEFAULT_MAX_ITER,
    DEFAULT_N_INIT, FlatPlane, KMeans, KMeansInit, KMeansOptions, centers_from, cluster,
    cluster_coordinates,
};

pub use dataset::{Dataset, DatasetError, DatasetFormat, load_points, load_points_from_reader};

pub use selection::{Selection, SelectionError};

pub use report::{PlacementReport, WarehouseSite, fingerprint};
