//! Collaborators reading a solved default room.

use roomplan_export::{exporter_for, CostAggregator, LayoutExporter, UnitRateAggregator};
use roomplan_layout::{generate_layout, LayoutDocument, PlanOptions, PlanRequest};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn default_layout() -> LayoutDocument {
    generate_layout(&PlanRequest::default(), &PlanOptions::default()).unwrap()
}

#[test]
fn test_default_room_bill_of_quantities() {
    init_logger();
    let boq = UnitRateAggregator::default().aggregate(&default_layout());
    let listing: Vec<String> = boq
        .lines
        .iter()
        .map(|line| format!("{} | {} | {}", line.item, line.specification, line.total_cost))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r###"
    Bed | 1600x2000x500mm - Upholstered | 1500
    Headboard | 1600x50x1000mm - Fabric | 300
    Bedside Table Left | 450x400x600mm - Wood | 150
    Bedside Table Right | 450x400x600mm - Wood | 150
    Wardrobe | 1800x600x2200mm - Engineered Wood | 800
    Tv Unit | 1200x250x500mm - MDF | 400
    Dressing Table | 1200x500x800mm - Engineered Wood | 350
    Banquet | 1400x500x400mm - Upholstered | 200
    5-pin socket | tv_wall | 50
    5-pin socket | bedside_left | 25
    5-pin socket | bedside_right | 25
    5-pin socket | dressing_table | 25
    recessed - 15W | LED downlight | 50
    recessed - 15W | LED downlight | 50
    recessed - 15W | LED downlight | 50
    recessed - 15W | LED downlight | 50
    recessed - 15W | LED downlight | 50
    split - 1.5 HP | 12000 BTU | 750
    "###);
    assert!((boq.total_cost - 4975.0).abs() < 0.001);
}

#[test]
fn test_exporters_read_the_same_document() {
    init_logger();
    let doc = default_layout();
    for format in ["json", "svg"] {
        let exporter = exporter_for(format).unwrap();
        let bytes = exporter.export(&doc).unwrap();
        assert!(!bytes.is_empty(), "{format} produced nothing");
    }
}

#[test]
fn test_bill_serializes() {
    let boq = UnitRateAggregator::default().aggregate(&default_layout());
    let value = serde_json::to_value(&boq).unwrap();
    assert_eq!(value["currency"], "USD");
    assert_eq!(value["lines"][0]["unit"], "nos");
    assert_eq!(value["lines"][0]["category"], "Furniture");
    let categories: Vec<_> = boq.lines.iter().map(|line| line.category).collect();
    for category in ["Electrical", "Lighting", "AC"] {
        assert!(categories.contains(&category), "{category} missing");
    }
}
