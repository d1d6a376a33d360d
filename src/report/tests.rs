use super::*;
use crate::clusterer::KMeans;
use chrono::TimeZone;

fn demand() -> Vec<Point> {
    vec![
        Point::new(-46.60, -23.50, "Toys", "SP").unwrap(),
        Point::new(-46.62, -23.52, "Toys", "SP").unwrap(),
        Point::new(-43.20, -22.90, "Toys", "RJ").unwrap(),
        Point::new(-43.22, -22.92, "Toys", "RJ").unwrap(),
    ]
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_sites_numbered_from_one() {
    let points = demand();
    let km = KMeans::new(2).seed(Some(42));
    let result = km.fit(&points).unwrap();
    let report = PlacementReport::build_at(&points, &result, km.options(), fixed_time());

    assert_eq!(report.sites.len(), 2);
    assert_eq!(report.sites[0].number, 1);
    assert_eq!(report.sites[0].label, "Warehouse 1");
    assert_eq!(report.sites[1].label, "Warehouse 2");
    assert_eq!(
        report.sites.iter().map(|s| s.demand_points).sum::<usize>(),
        4
    );
    assert_eq!(report.empty_clusters, 0);
    assert_eq!(report.labels.len(), 4);
    assert_eq!(report.options.seed, Some(42));
    assert_eq!(report.generated_at, "2024-05-01T12:00:00+00:00");
}

#[test]
fn test_empty_clusters_are_not_sites() {
    let points = vec![Point::new(1.0, 1.0, "Toys", "SP").unwrap(); 4];
    let km = KMeans::new(3).seed(Some(1));
    let result = km.fit(&points).unwrap();
    let report = PlacementReport::build_at(&points, &result, km.options(), fixed_time());

    assert_eq!(report.sites.len(), 1);
    assert_eq!(report.sites[0].cluster_id, 0);
    assert_eq!(report.empty_clusters, 2);
    assert!(report.to_string().contains("2 clusters had no members"));
}

#[test]
fn test_fingerprint_tracks_inputs() {
    let points = demand();
    let base = fingerprint(&points, 2, 42);

    assert_eq!(base.len(), 64);
    assert_eq!(base, fingerprint(&points, 2, 42));
    assert_ne!(base, fingerprint(&points, 2, 43));
    assert_ne!(base, fingerprint(&points, 3, 42));
    assert_ne!(base, fingerprint(&points[..3], 2, 42));
}

#[test]
fn test_generated_seed_recorded() {
    let points = demand();
    let km = KMeans::new(2);
    let result = km.fit(&points).unwrap();
    let report = PlacementReport::build(&points, &result, km.options());

    assert_eq!(report.options.seed, Some(result.seed));
    assert_eq!(report.fingerprint, fingerprint(&points, 2, result.seed));
}

#[test]
fn test_text_rendering() {
    let points = demand();
    let km = KMeans::new(1).seed(Some(5));
    let result = km.fit(&points).unwrap();
    let text = PlacementReport::build_at(&points, &result, km.options(), fixed_time()).to_string();

    assert!(text.starts_with("Warehouse plan: 1 sites for 4 demand points (k=1, seed=5)"));
    assert!(text.contains("Warehouse 1"));
    assert!(text.contains("Lat: -23.2100"));
    assert!(text.contains("Lon: -44.9100"));
    assert!(text.contains("Fingerprint: "));
}

#[test]
fn test_json_rendering() {
    let points = demand();
    let km = KMeans::new(2).seed(Some(42));
    let result = km.fit(&points).unwrap();
    let report = PlacementReport::build_at(&points, &result, km.options(), fixed_time());

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["point_count"], 4);
    assert_eq!(value["options"]["k"], 2);
    assert_eq!(value["options"]["init"], "kmeans++");
    assert_eq!(value["sites"].as_array().unwrap().len(), 2);
    assert_eq!(value["sites"][0]["label"], "Warehouse 1");
}
