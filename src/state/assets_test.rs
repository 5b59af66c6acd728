use super::*;

fn laptop() -> Asset {
    Asset {
        asset_id: Some(AssetId::from(1)),
        asset_name: "Laptop".to_owned(),
        status: "Active".to_owned(),
        health: "Good".to_owned(),
        installed_date: "2023-01-01".to_owned(),
        location: "HQ".to_owned(),
    }
}

#[test]
fn default_is_empty_and_idle() {
    let state = AssetsState::default();
    assert!(state.items.is_empty());
    assert!(state.rows().is_empty());
}

#[test]
fn row_view_contains_every_field() {
    let row = AssetRowView::from_asset(&laptop());
    assert_eq!(row.name, "Laptop");
    assert_eq!(row.condition, "(Active, Good)");
    assert_eq!(row.installed, "Installed: 2023-01-01");
    assert_eq!(row.location, "Location: HQ");
    assert_eq!(row.delete_target, Some(AssetId::new("1")));
    let text = [row.name, row.condition, row.installed, row.location].join(" ");
    for needle in ["Laptop", "Active", "Good", "2023-01-01", "HQ"] {
        assert!(text.contains(needle), "missing {needle}");
    }
}

#[test]
fn row_without_id_has_no_delete_target() {
    let mut asset = laptop();
    asset.asset_id = None;
    assert_eq!(AssetRowView::from_asset(&asset).delete_target, None);
}

#[test]
fn replace_discards_previous_items() {
    let mut state = AssetsState::default();
    state.replace(vec![laptop(), laptop()]);
    let mut pump = laptop();
    pump.asset_name = "Pump".to_owned();
    state.replace(vec![pump]);
    let names: Vec<String> = state.rows().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Pump"]);
}

#[test]
fn replace_with_empty_clears_rows() {
    let mut state = AssetsState::default();
    state.replace(vec![laptop()]);
    state.replace(Vec::new());
    assert!(state.rows().is_empty());
}

#[test]
fn rendering_same_list_twice_is_identical() {
    let mut state = AssetsState::default();
    state.replace(vec![laptop()]);
    let first = state.rows();
    state.replace(vec![laptop()]);
    assert_eq!(state.rows(), first);
}

#[test]
fn fetch_tracker_stays_loading_until_last_fetch_settles() {
    let mut tracker = FetchTracker::default();
    assert!(!tracker.is_loading());
    tracker.begin();
    tracker.begin();
    tracker.end();
    assert!(tracker.is_loading());
    tracker.end();
    assert!(!tracker.is_loading());
}

#[test]
fn fetch_tracker_end_without_begin_is_idle() {
    let mut tracker = FetchTracker::default();
    tracker.end();
    assert!(!tracker.is_loading());
    tracker.begin();
    assert!(tracker.is_loading());
}
