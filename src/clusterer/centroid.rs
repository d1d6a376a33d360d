use crate::clusterer::space::{CoordinateSpace, FlatPlane};
use crate::clusterer::types::Center;
use crate::point::{Coordinate, Located};

/// Mean coordinate of every cluster id in `0..k`.
///
/// Always returns `k` entries in ascending cluster-id order. A cluster with
/// no members gets `location: None`. Points pair with labels by index and
/// labels outside `0..k` are skipped.
pub fn centers_from<P: Located>(points: &[P], labels: &[usize], k: usize) -> Vec<Center> {
    centers_in(&FlatPlane, points, labels, k)
}

pub fn centers_in<S, P>(space: &S, points: &[P], labels: &[usize], k: usize) -> Vec<Center>
where
    S: CoordinateSpace + ?Sized,
    P: Located,
{
    let mut groups: Vec<Vec<Coordinate>> = vec![Vec::new(); k];

    for (point, &label) in points.iter().zip(labels) {
        if let Some(group) = groups.get_mut(label) {
            group.push(point.coordinate());
        }
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(cluster_id, members)| Center {
            cluster_id,
            size: members.len(),
            location: space.centroid(&members),
        })
        .collect()
}
