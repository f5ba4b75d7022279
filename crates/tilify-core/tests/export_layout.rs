use tilify_core::export::to_json_layout;
use tilify_core::model::Region;
use tilify_core::{TilifyConfig, pack_layout};

#[test]
fn json_layout_lists_canvas_and_placements() {
    let cfg = TilifyConfig::builder().with_dimensions(400, 400).build();
    let out = pack_layout(
        vec![("big", 300, 300), ("small", 100, 100), ("column", 100, 300)],
        cfg,
    )
    .unwrap();

    let json = to_json_layout(&out.layout);
    assert_eq!(json["canvas"]["w"], 400);
    assert_eq!(json["canvas"]["h"], 400);

    let placements = json["placements"].as_array().unwrap();
    assert_eq!(placements.len(), 3);
    assert_eq!(placements[0]["key"], "big");
    assert_eq!(placements[0]["x"], 0);
    assert_eq!(placements[0]["y"], 0);
    assert!(placements.iter().all(|p| p["w"].is_u64() && p["h"].is_u64()));
}

#[test]
fn region_tree_round_trips_through_serde() {
    let cfg = TilifyConfig::builder().with_dimensions(256, 256).build();
    let out = pack_layout(vec![("a", 64, 128), ("b", 32, 32)], cfg).unwrap();

    let json = serde_json::to_string(&out.layout).unwrap();
    let back: Region<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, out.layout);
}
