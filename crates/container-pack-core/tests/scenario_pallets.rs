use container_pack_core::prelude::*;

#[test]
fn twenty_pallets_pack_onto_the_floor_with_gap() {
    let container = Container::new("TRUCK", Dimensions::new(600.0, 400.0, 300.0));
    let manifest = vec![CargoItem {
        stable_id: "pallet-a".into(),
        display_name: "Pallet A".into(),
        kind: CargoKind::Pallet,
        quantity: 20,
        color_tag: None,
        dimensions: Dimensions::new(80.0, 120.0, 15.0),
        allowed_rotation: AllowedRotation {
            x: false,
            y: true,
            z: false,
        },
        stackable: false,
    }];

    let cfg = EngineConfig::builder()
        .object_margin(2.0)
        .pallet_routing(PalletRouting::Guillotine)
        .build();
    let result = pack_with_config(&container, &manifest, &cfg).expect("valid manifest");
    assert!(result.placed.len() >= 20);
    assert!(result.unplaced_summary.is_empty());

    for p in &result.placed {
        assert_eq!(p.position.z, 0.0);
    }

    // First pallet claims the free list's initial rectangle at the
    // container origin, so its corner must sit at half the configured gap
    // on each axis (the guillotine pallet optimizer's own invariant).
    let first = &result.placed[0];
    assert_eq!(first.position.x, 1.0);
    assert_eq!(first.position.y, 1.0);

    for i in 0..result.placed.len() {
        for j in (i + 1)..result.placed.len() {
            let a = &result.placed[i];
            let b = &result.placed[j];
            assert!(!container_pack_core::geometry::aabb_intersect(
                a.position,
                a.effective_dimensions,
                b.position,
                b.effective_dimensions,
                0.0
            ));
        }
    }
}
