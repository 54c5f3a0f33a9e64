use container_pack_core::prelude::*;

#[test]
fn over_capacity_manifest_reports_unplaced_by_name() {
    let container = Container::new("TRUCK", Dimensions::new(100.0, 100.0, 100.0));
    let manifest = vec![CargoItem {
        stable_id: "crate-b".into(),
        display_name: "Crate B".into(),
        kind: CargoKind::Box,
        quantity: 10,
        color_tag: None,
        dimensions: Dimensions::new(60.0, 60.0, 60.0),
        allowed_rotation: AllowedRotation::default(),
        stackable: true,
    }];

    let result = pack(&container, &manifest).expect("valid manifest");
    assert!(result.placed.len() <= 1);
    let unplaced = result.unplaced_summary.get("Crate B").copied().unwrap_or(0);
    assert_eq!(result.placed.len() as u32 + unplaced, 10);
    assert_eq!(unplaced, 10 - result.placed.len() as u32);
}
