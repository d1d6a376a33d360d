use super::*;

fn sample() -> Vec<Point> {
    vec![
        Point::new(-46.6, -23.5, "Toys", "SP").unwrap(),
        Point::new(-43.2, -22.9, "Toys", "RJ").unwrap(),
        Point::new(-46.7, -23.6, "Books", "SP").unwrap(),
        Point::new(-49.3, -25.4, "Toys", "PR").unwrap(),
        Point::new(-46.5, -23.4, "Toys", "SP").unwrap(),
    ]
}

#[test]
fn test_apply_keeps_matching_points_in_order() {
    let selection = Selection::new(["Toys"], ["SP", "PR"]).unwrap();
    let selected = selection.apply(&sample());

    assert_eq!(selected.len(), 3);
    assert_eq!(selected[0].longitude(), -46.6);
    assert_eq!(selected[1].region(), "PR");
    assert_eq!(selected[2].longitude(), -46.5);
}

#[test]
fn test_category_matching_is_normalized() {
    let selection = Selection::new(["tOYS"], ["SP"]).unwrap();
    assert_eq!(selection.categories().collect::<Vec<_>>(), vec!["Toys"]);

    let lowercase = Point::new(0.0, 0.0, "toys", "SP").unwrap();
    assert!(selection.matches(&lowercase));
}

#[test]
fn test_region_is_trimmed_and_exact() {
    let selection = Selection::new(["Books"], [" SP "]).unwrap();
    assert_eq!(selection.regions().collect::<Vec<_>>(), vec!["SP"]);

    let other_case = Point::new(0.0, 0.0, "Books", "sp").unwrap();
    assert!(!selection.matches(&other_case));
}

#[test]
fn test_empty_categories_rejected() {
    let none: [&str; 0] = [];
    assert_eq!(
        Selection::new(none, ["SP"]),
        Err(SelectionError::EmptyCategories)
    );
    assert_eq!(
        Selection::new(["  "], ["SP"]),
        Err(SelectionError::EmptyCategories)
    );
}

#[test]
fn test_empty_regions_rejected() {
    let none: Vec<String> = Vec::new();
    assert_eq!(
        Selection::new(vec!["Toys".to_string()], none),
        Err(SelectionError::EmptyRegions)
    );
}

#[test]
fn test_no_match_yields_empty() {
    let selection = Selection::new(["Garden"], ["SP"]).unwrap();
    assert!(selection.apply(&sample()).is_empty());
}
