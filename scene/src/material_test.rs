use super::*;

#[test]
fn catalog_ids_are_unique_and_cover_every_category() {
    let materials = catalog();
    let mut ids: Vec<&str> = materials.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), materials.len());
    for category in MaterialCategory::ALL {
        assert!(materials.iter().any(|m| m.category == category), "{category:?} missing");
    }
}

#[test]
fn catalog_contains_default_material() {
    let materials = catalog();
    assert!(find_material(&materials, crate::properties::DEFAULT_MATERIAL).is_some());
}

#[test]
fn empty_filter_keeps_catalog_order() {
    let materials = catalog();
    let shelf = MaterialShelf::default();
    let visible = MaterialFilter::default().apply(&materials, &shelf);
    assert_eq!(visible.len(), materials.len());
    assert_eq!(visible[0].id, materials[0].id);
}

#[test]
fn query_matches_name_case_insensitively() {
    let materials = catalog();
    let filter = MaterialFilter {
        query: "  GLASS ".to_owned(),
        ..MaterialFilter::default()
    };
    let visible = filter.apply(&materials, &MaterialShelf::default());
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|m| m.category == MaterialCategory::Glass));
}

#[test]
fn category_and_favorites_combine() {
    let materials = catalog();
    let mut shelf = MaterialShelf::default();
    shelf.toggle_favorite("wood-oak");
    shelf.toggle_favorite("metal-steel");
    let filter = MaterialFilter {
        category: Some(MaterialCategory::Wood),
        favorites_only: true,
        ..MaterialFilter::default()
    };
    let visible = filter.apply(&materials, &shelf);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "wood-oak");
}

#[test]
fn toggle_favorite_round_trips() {
    let mut shelf = MaterialShelf::default();
    assert!(shelf.toggle_favorite("glass-clear"));
    assert!(shelf.is_favorite("glass-clear"));
    assert!(!shelf.toggle_favorite("glass-clear"));
    assert!(!shelf.is_favorite("glass-clear"));
}

#[test]
fn mark_downloaded_reports_first_download_only() {
    let mut shelf = MaterialShelf::default();
    assert!(shelf.mark_downloaded("brick-red"));
    assert!(!shelf.mark_downloaded("brick-red"));
    assert!(shelf.is_downloaded("brick-red"));
}
