//! Bill of quantities for the placed furniture and room services.

use roomplan_core::WallSide;
use roomplan_layout::{ItemKind, LayoutDocument, PlacedItem};
use serde::Serialize;

use crate::systems::{take_off, SystemsOptions, SystemsTakeoff};

/// Turns a solved layout into priced lines.
pub trait CostAggregator {
    fn aggregate(&self, layout: &LayoutDocument) -> BillOfQuantities;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoqLine {
    pub id: String,
    pub category: &'static str,
    pub item: String,
    /// `WxDxHmm - material`, width measured along the item's wall
    pub specification: String,
    pub quantity: u32,
    pub unit: &'static str,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillOfQuantities {
    pub lines: Vec<BoqLine>,
    pub total_cost: f64,
    pub currency: String,
}

/// Flat per-item rates. Return-wall stubs are partition work, not furniture,
/// and are left out.
#[derive(Debug, Clone)]
pub struct UnitRateAggregator {
    pub currency: String,
    /// Services priced after the furniture; `None` bills furniture only
    pub systems: Option<SystemsOptions>,
}

impl Default for UnitRateAggregator {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            systems: Some(SystemsOptions::default()),
        }
    }
}

/// `(unit cost, material)` for a furniture kind.
pub fn unit_rate(kind: ItemKind) -> Option<(f64, &'static str)> {
    let rate = match kind {
        ItemKind::Bed => (1500.0, "Upholstered"),
        ItemKind::Headboard => (300.0, "Fabric"),
        ItemKind::Wardrobe => (800.0, "Engineered Wood"),
        ItemKind::TvUnit => (400.0, "MDF"),
        ItemKind::DressingTable => (350.0, "Engineered Wood"),
        ItemKind::BedsideLeft | ItemKind::BedsideRight => (150.0, "Wood"),
        ItemKind::Banquet => (200.0, "Upholstered"),
        ItemKind::Bench => (250.0, "Upholstered"),
        ItemKind::StudyTable => (300.0, "Engineered Wood"),
        ItemKind::Chair => (120.0, "Upholstered"),
        ItemKind::Dresser => (350.0, "MDF"),
        ItemKind::WardrobeReturnWallStart | ItemKind::WardrobeReturnWallEnd => return None,
    };
    Some(rate)
}

impl CostAggregator for UnitRateAggregator {
    fn aggregate(&self, layout: &LayoutDocument) -> BillOfQuantities {
        let mut lines: Vec<BoqLine> = layout
            .items()
            .filter_map(|item| unit_rate(item.kind).map(|(cost, material)| line(item, cost, material)))
            .collect();
        if let Some(options) = &self.systems {
            lines.extend(system_lines(&take_off(layout, options)));
        }
        let total_cost = lines.iter().map(|line| line.total_cost).sum();
        BillOfQuantities {
            lines,
            total_cost,
            currency: self.currency.clone(),
        }
    }
}

fn line(item: &PlacedItem, unit_cost: f64, material: &str) -> BoqLine {
    // side walls run along y, so the footprint is stored rotated
    let (width, depth) = match item.wall {
        Some(WallSide::Left | WallSide::Right) => (item.rect.depth, item.rect.width),
        _ => (item.rect.width, item.rect.depth),
    };
    BoqLine {
        id: item.id.clone(),
        category: "Furniture",
        item: title_case(item.kind.key()),
        specification: format!("{:.0}x{:.0}x{:.0}mm - {}", width, depth, item.height, material),
        quantity: 1,
        unit: "nos",
        unit_cost,
        total_cost: unit_cost,
    }
}

fn system_lines(takeoff: &SystemsTakeoff) -> Vec<BoqLine> {
    let sockets = takeoff.sockets.iter().map(|socket| BoqLine {
        id: socket.id.clone(),
        category: "Electrical",
        item: socket.kind.to_string(),
        specification: socket.location.to_string(),
        quantity: socket.quantity,
        unit: "nos",
        unit_cost: socket.unit_cost,
        total_cost: f64::from(socket.quantity) * socket.unit_cost,
    });
    let lights = takeoff.lights.iter().map(|light| BoqLine {
        id: light.id.clone(),
        category: "Lighting",
        item: format!("{} - {}W", light.kind, light.wattage),
        specification: "LED downlight".to_string(),
        quantity: 1,
        unit: "nos",
        unit_cost: light.unit_cost,
        total_cost: light.unit_cost,
    });
    let ac = takeoff.ac.iter().map(|ac| BoqLine {
        id: ac.id.clone(),
        category: "AC",
        item: format!("{} - {} HP", ac.kind, ac.capacity_hp),
        specification: format!("{} BTU", ac.capacity_btu),
        quantity: 1,
        unit: "nos",
        unit_cost: ac.unit_cost,
        total_cost: ac.unit_cost,
    });
    sockets.chain(lights).chain(ac).collect()
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomplan_layout::{generate_layout, PlanOptions, PlanRequest, WardrobeConfig};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bedside_table_left"), "Bedside Table Left");
        assert_eq!(title_case("bed"), "Bed");
    }

    #[test]
    fn test_return_walls_are_not_priced() {
        assert_eq!(unit_rate(ItemKind::WardrobeReturnWallStart), None);
        assert_eq!(unit_rate(ItemKind::Bed), Some((1500.0, "Upholstered")));
    }

    #[test]
    fn test_total_matches_lines() {
        let mut request = PlanRequest::default();
        request.wardrobe.config = WardrobeConfig::BuiltIn;
        let doc = generate_layout(&request, &PlanOptions::default()).unwrap();
        let boq = UnitRateAggregator::default().aggregate(&doc);

        assert!(doc.has(ItemKind::WardrobeReturnWallStart));
        let furniture = boq.lines.iter().filter(|line| line.category == "Furniture").count();
        assert_eq!(furniture, doc.furniture.len() - 1);
        let sum: f64 = boq.lines.iter().map(|line| line.total_cost).sum();
        assert!((boq.total_cost - sum).abs() < 0.001);
        assert_eq!(boq.currency, "USD");
    }

    #[test]
    fn test_specification_uses_wall_frame() {
        let doc = generate_layout(&PlanRequest::default(), &PlanOptions::default()).unwrap();
        let boq = UnitRateAggregator::default().aggregate(&doc);
        let wardrobe = boq.lines.iter().find(|line| line.item == "Wardrobe").unwrap();
        assert_eq!(wardrobe.specification, "1800x600x2200mm - Engineered Wood");
    }

    #[test]
    fn test_furniture_only_bill() {
        let doc = generate_layout(&PlanRequest::default(), &PlanOptions::default()).unwrap();
        let aggregator = UnitRateAggregator {
            systems: None,
            ..UnitRateAggregator::default()
        };
        let boq = aggregator.aggregate(&doc);
        assert!(boq.lines.iter().all(|line| line.category == "Furniture"));
        assert!((boq.total_cost - 3850.0).abs() < 0.001);
    }

    #[test]
    fn test_socket_line_multiplies_quantity() {
        let doc = generate_layout(&PlanRequest::default(), &PlanOptions::default()).unwrap();
        let boq = UnitRateAggregator::default().aggregate(&doc);
        let tv = boq.lines.iter().find(|line| line.specification == "tv_wall").unwrap();
        assert_eq!(tv.quantity, 2);
        assert!((tv.total_cost - 50.0).abs() < 0.001);
        assert_eq!(tv.category, "Electrical");
    }
}
