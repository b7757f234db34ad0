//! End-to-end layouts for known rooms.

use roomplan_layout::{
    generate_layout, ClearancePolicy, Concern, ItemKind, KeepOutKind, LayoutDocument, PlanOptions, PlanRequest, Rect,
    Side, UnderWindowUse, WallSide, WardrobeConfig,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn request(width: f64, depth: f64) -> PlanRequest {
    let mut request = PlanRequest::default();
    request.room.width = width;
    request.room.depth = depth;
    request
}

fn assert_valid(doc: &LayoutDocument, request: &PlanRequest) {
    assert!(doc.overlapping_pairs().is_empty(), "overlaps: {:?}", doc.overlapping_pairs());
    for item in doc.items() {
        assert!(item.rect.inside(&doc.walls.internal), "{} outside the room", item.kind);
        for zone in &doc.keep_outs {
            assert!(!item.rect.intersects(&zone.rect), "{} intersects {:?}", item.kind, zone.kind);
        }
    }
    for kind in [ItemKind::Bed, ItemKind::Headboard, ItemKind::Wardrobe] {
        assert!(doc.has(kind), "{kind} missing");
    }
    assert_eq!(doc.has(ItemKind::BedsideLeft), request.bedside.count >= 1);
    assert_eq!(doc.has(ItemKind::BedsideRight), request.bedside.count == 2);
}

#[test]
fn test_default_room() {
    init_logger();
    let request = PlanRequest::default();
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.bed_wall, WallSide::Bottom);
    assert_eq!(doc.metadata.wardrobe_wall, WallSide::Left);
    assert_eq!(doc.metadata.wardrobe_mode, WardrobeConfig::Centered);
    let bed = doc.item(ItemKind::Bed).unwrap();
    assert!((bed.rect.x - 1975.0).abs() < 0.001);
    let wardrobe = doc.item(ItemKind::Wardrobe).unwrap();
    assert!((wardrobe.rect.y - 1150.0).abs() < 0.001);
    assert!((wardrobe.rect.depth - 1800.0).abs() < 0.001);
    assert_eq!(doc.room.id, "ROOM-ROOM");
    assert_eq!(bed.id, "FUR-ROOM-BED");
}

#[test]
fn test_scenario_a_standard_room() {
    init_logger();
    let request = request(4500.0, 4000.0);
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_ne!(doc.metadata.bed_wall, WallSide::Top);
    assert_ne!(doc.metadata.bed_wall, WallSide::Right);
    assert!(doc.has(ItemKind::BedsideLeft));
    assert!(doc.has(ItemKind::BedsideRight));
    assert_eq!(doc.metadata.bedside_table_size, Some((450.0, 400.0)));
}

#[test]
fn test_scenario_b_full_wall_on_window_wall() {
    init_logger();
    let mut request = request(4500.0, 4000.0);
    request.wardrobe.config = WardrobeConfig::FullWall;
    request.wardrobe.wall = Some(WallSide::Right);
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    let issues = doc.issues();
    assert!(issues
        .iter()
        .any(|issue| issue == "Wardrobe cannot use the right wall: it carries the window."));
    assert_ne!(doc.metadata.wardrobe_wall, WallSide::Right);
    match doc.metadata.wardrobe_mode {
        WardrobeConfig::FullWall => {}
        WardrobeConfig::Centered => assert!(issues
            .iter()
            .any(|issue| issue == "Wardrobe configuration 'full_wall' could not be placed; using 'centered' instead.")),
        other => panic!("unexpected wardrobe mode {other:?}"),
    }
}

#[test]
fn test_full_wall_without_fallback_is_a_wardrobe_error() {
    let mut request = request(4500.0, 4000.0);
    request.wardrobe.config = WardrobeConfig::FullWall;
    request.wardrobe.allow_fallback = false;
    let err = generate_layout(&request, &PlanOptions::default()).unwrap_err();
    assert_eq!(err.concern(), Some(Concern::Wardrobe));
}

#[test]
fn test_scenario_c_low_sill_study_table() {
    init_logger();
    let mut request = PlanRequest::default();
    request.window.sill_height = 500.0;
    request.under_window_use = UnderWindowUse::StudyTable;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_ne!(doc.metadata.under_window_use, UnderWindowUse::StudyTable);
    assert_eq!(doc.metadata.requested_under_window_use, UnderWindowUse::StudyTable);
    assert!(!doc.has(ItemKind::StudyTable));
    assert!(doc.keep_outs.iter().any(|zone| zone.kind == KeepOutKind::WindowStrip));
    assert_eq!(
        doc.issues()[0],
        "Under-window use 'study_table' is not allowed with a 500mm sill; using 'none'."
    );
}

#[test]
fn test_study_table_with_chair() {
    init_logger();
    let mut request = request(6000.0, 5000.0);
    request.window.sill_height = 750.0;
    request.under_window_use = UnderWindowUse::StudyTable;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.under_window_use, UnderWindowUse::StudyTable);
    let desk = doc.item(ItemKind::StudyTable).unwrap();
    let chair = doc.item(ItemKind::Chair).unwrap();
    assert!((desk.rect.depth - 1600.0).abs() < 0.001);
    assert!((chair.rect.max_x() - (desk.rect.x - 50.0)).abs() < 0.001);
    assert!(!doc.keep_outs.iter().any(|zone| zone.kind == KeepOutKind::WindowStrip));
}

#[test]
fn test_scenario_d_wardrobe_width_reduced() {
    init_logger();
    let mut request = request(4500.0, 4000.0);
    request.door.wall = WallSide::Left;
    request.door.offset = 2200.0;
    request.door.width = 900.0;
    request.wardrobe.width = 2400.0;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.bed_wall, WallSide::Top);
    assert_eq!(doc.metadata.wardrobe_wall, WallSide::Left);
    let wardrobe = doc.item(ItemKind::Wardrobe).unwrap();
    assert!((wardrobe.rect.depth - 2000.0).abs() < 0.001);
    insta::assert_snapshot!(
        doc.issues().join("\n"),
        @"Wardrobe width was reduced from 2400mm to 2000mm to avoid conflicts."
    );
}

#[test]
fn test_scenario_e_bedside_tables_shrink() {
    init_logger();
    let mut request = request(2400.0, 5000.0);
    request.door.offset = 1300.0;
    request.window.width = 1200.0;
    request.bed.wall = Some(WallSide::Bottom);
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.bed_wall, WallSide::Bottom);
    assert_eq!(doc.metadata.bedside_table_size, Some((400.0, 400.0)));
    assert!(doc
        .issues()
        .iter()
        .any(|issue| issue == "Bedside tables were reduced from 450x400mm to 400x400mm to fit beside the bed."));
    let wardrobe = doc.item(ItemKind::Wardrobe).unwrap();
    assert_eq!(wardrobe.wall, Some(WallSide::Left));
    assert!((wardrobe.rect.y - 2250.0).abs() < 0.001);
    assert!(doc
        .issues()
        .iter()
        .any(|issue| issue == "Wardrobe was placed at 2000mm along the left wall instead of centred to avoid conflicts."));
}

#[test]
fn test_built_in_with_one_return_wall() {
    init_logger();
    let mut request = PlanRequest::default();
    request.wardrobe.config = WardrobeConfig::BuiltIn;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.wardrobe_mode, WardrobeConfig::BuiltIn);
    assert!(doc.has(ItemKind::WardrobeReturnWallStart));
    assert!(!doc.has(ItemKind::WardrobeReturnWallEnd));
    assert_eq!(doc.walls.wardrobe_enclosure.len(), 1);
    assert!(doc
        .issues()
        .iter()
        .any(|issue| issue == "Built-in wardrobe on the left wall is closed by a return wall at one end only."));
}

#[test]
fn test_tv_faces_bed_with_mount_height() {
    let request = request(4500.0, 4000.0);
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    let tv = doc.item(ItemKind::TvUnit).unwrap();
    assert_eq!(doc.metadata.tv_wall, Some(WallSide::Top));
    assert_eq!(doc.metadata.tv_size_inches, 55);
    assert_eq!(tv.mount_z, Some(doc.metadata.tv_center_z - tv.height / 2.0));
}

#[test]
fn test_optional_items_can_be_disabled() {
    let mut request = PlanRequest::default();
    request.tv.enabled = false;
    request.banquet.enabled = false;
    request.bedside.count = 0;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);
    assert!(!doc.has(ItemKind::TvUnit));
    assert!(!doc.has(ItemKind::DressingTable));
    assert!(!doc.has(ItemKind::Banquet));
    assert_eq!(doc.metadata.tv_wall, None);
}

#[test]
fn test_advisory_clearance_is_reported() {
    let options = PlanOptions {
        bed_wardrobe_clearance: ClearancePolicy::Advisory(1000.0),
        ..PlanOptions::default()
    };
    let request = PlanRequest::default();
    let doc = generate_layout(&request, &options).unwrap();
    assert!(doc
        .issues()
        .iter()
        .any(|issue| issue == "Bed group is 675mm from the wardrobe; 1000mm clearance is required."));
}

#[test]
fn test_generation_is_deterministic() {
    let mut request = request(4500.0, 4000.0);
    request.under_window_use = UnderWindowUse::Bench;
    request.window.sill_height = 500.0;
    request.dresser.enabled = true;
    let options = PlanOptions::default();
    let first = generate_layout(&request, &options);
    let second = generate_layout(&request, &options);
    match (first, second) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        _ => panic!("results differ between identical calls"),
    }
}

#[test]
fn test_strict_bed_group_fails_standard_room() {
    init_logger();
    let request = request(4500.0, 4000.0);
    let strict = PlanOptions {
        bed_group_backtracking: false,
        ..PlanOptions::default()
    };
    let err = generate_layout(&request, &strict).unwrap_err();
    assert_eq!(err.concern(), Some(Concern::Wardrobe));
    assert!(generate_layout(&request, &PlanOptions::default()).is_ok());
}

#[test]
fn test_strict_bed_group_matches_when_first_position_works() {
    let request = request(6000.0, 4000.0);
    let strict = PlanOptions {
        bed_group_backtracking: false,
        ..PlanOptions::default()
    };
    let doc = generate_layout(&request, &strict).unwrap();
    assert_valid(&doc, &request);
    assert_eq!(doc, generate_layout(&request, &PlanOptions::default()).unwrap());
}

#[test]
fn test_tv_beside_window_clears_the_opening() {
    init_logger();
    let mut request = PlanRequest::default();
    request.bed.wall = Some(WallSide::Left);
    request.window.offset = Some(200.0);
    request.window.width = 1200.0;
    request.dresser.enabled = true;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.bed_wall, WallSide::Left);
    assert_eq!(doc.metadata.tv_wall, Some(WallSide::Right));
    let tv = doc.item(ItemKind::TvUnit).unwrap();
    // window runs 450..1650 along the right wall
    assert!(tv.rect.y >= 1900.0 - 0.001);
    assert!(!doc.has(ItemKind::DressingTable));

    assert_eq!(doc.metadata.wardrobe_wall, WallSide::Top);
    let dresser = doc.item(ItemKind::Dresser).unwrap();
    assert_eq!(dresser.wall, Some(WallSide::Bottom));
    assert!((dresser.rect.x - 1600.0).abs() < 0.001);
    assert!((dresser.rect.y - 250.0).abs() < 0.001);
}

#[test]
fn test_tv_falls_back_to_door_free_wall() {
    init_logger();
    let mut request = PlanRequest::default();
    request.bed.wall = Some(WallSide::Left);
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.tv_wall, Some(WallSide::Bottom));
    let tv = doc.item(ItemKind::TvUnit).unwrap();
    assert!((tv.rect.x - 1600.0).abs() < 0.001);
    let dressing = doc.item(ItemKind::DressingTable).unwrap();
    assert!((dressing.rect.x - 2800.0).abs() < 0.001);
}

#[test]
fn test_dressing_table_on_left_is_skipped_when_blocked() {
    let mut request = PlanRequest::default();
    request.bed.wall = Some(WallSide::Left);
    request.dressing_table.side = Side::Left;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert!(doc.has(ItemKind::TvUnit));
    assert!(!doc.has(ItemKind::DressingTable));
    assert!(!doc.issues().iter().any(|issue| issue.contains("ressing")));
}

#[test]
fn test_dressing_table_on_left_of_tv() {
    let mut request = request(6000.0, 4000.0);
    request.dressing_table.side = Side::Left;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.tv_wall, Some(WallSide::Top));
    let tv = doc.item(ItemKind::TvUnit).unwrap();
    let dressing = doc.item(ItemKind::DressingTable).unwrap();
    assert!((tv.rect.x - 2650.0).abs() < 0.001);
    assert!((dressing.rect.x - 1450.0).abs() < 0.001);
    assert!((dressing.rect.max_x() - tv.rect.x).abs() < 0.001);
}

fn window_band_room() -> PlanRequest {
    let mut request = request(4000.0, 4500.0);
    request.door.wall = WallSide::Right;
    request.door.offset = 500.0;
    request.door.width = 900.0;
    request.window.wall = WallSide::Bottom;
    request.window.offset = Some(0.0);
    request.window.width = 1000.0;
    request.window.sill_height = 300.0;
    request.bed.wall = Some(WallSide::Top);
    request.wardrobe.width = 2000.0;
    request
}

#[test]
fn test_tall_wardrobe_stays_out_of_window_band() {
    init_logger();
    let request = window_band_room();
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    let wardrobe = doc.item(ItemKind::Wardrobe).unwrap();
    assert_eq!(wardrobe.wall, Some(WallSide::Left));
    assert!((wardrobe.rect.depth - 1900.0).abs() < 0.001);
    assert!((wardrobe.rect.y - 850.0).abs() < 0.001);
    assert!(!wardrobe.rect.intersects(&Rect::new(250.0, 250.0, 1000.0, 600.0)));
    let issues = doc.issues();
    assert!(issues
        .iter()
        .any(|issue| issue == "Wardrobe width was reduced from 2000mm to 1900mm to avoid conflicts."));
    assert!(issues
        .iter()
        .any(|issue| issue == "Wardrobe was placed at 600mm along the left wall instead of centred to avoid conflicts."));
}

#[test]
fn test_window_band_can_be_switched_off() {
    let request = window_band_room();
    let options = PlanOptions {
        tall_item_window_clear: None,
        ..PlanOptions::default()
    };
    let doc = generate_layout(&request, &options).unwrap();
    let wardrobe = doc.item(ItemKind::Wardrobe).unwrap();
    assert!((wardrobe.rect.depth - 2000.0).abs() < 0.001);
    assert!((wardrobe.rect.y - 700.0).abs() < 0.001);
}

#[test]
fn test_chair_skipped_inside_window_band() {
    init_logger();
    let mut request = request(6000.0, 5000.0);
    request.window.sill_height = 750.0;
    request.under_window_use = UnderWindowUse::StudyTable;
    let options = PlanOptions {
        tall_item_height: 800.0,
        tall_item_window_clear: Some(1000.0),
        ..PlanOptions::default()
    };
    let doc = generate_layout(&request, &options).unwrap();
    assert_valid(&doc, &request);

    assert_eq!(doc.metadata.under_window_use, UnderWindowUse::StudyTable);
    assert!(doc.has(ItemKind::StudyTable));
    assert!(!doc.has(ItemKind::Chair));
    assert!(doc
        .issues()
        .iter()
        .any(|issue| issue == "Chair could not be placed in the study table pull-back zone."));
}

#[test]
fn test_oversized_wardrobe_request_is_capped() {
    let mut request = PlanRequest::default();
    request.wardrobe.width = 2_000_000.0;
    let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
    assert_valid(&doc, &request);

    let wardrobe = doc.item(ItemKind::Wardrobe).unwrap();
    assert!(wardrobe.rect.depth >= 1200.0 && wardrobe.rect.depth <= 3900.0);
    assert!(doc
        .issues()
        .iter()
        .any(|issue| issue.starts_with("Wardrobe width was reduced from 2000000mm")));
}
