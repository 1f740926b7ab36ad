//! Built-in planning table used when no data file can be loaded
//!
//! Covers area and autoclave sizing only; equipment lists and budgets come
//! from the planning data file.

use super::data::{AreaRequirement, AutoclaveOption, AutoclaveRequirement, PlanningData};
use super::range::BedRange;

const AREAS: &[(u32, u32, f64)] = &[
    (0, 20, 150.0),
    (20, 30, 200.0),
    (30, 50, 350.0),
    (50, 70, 500.0),
    (70, 100, 700.0),
    (100, 150, 1000.0),
    (150, 200, 1500.0),
    (200, 300, 2000.0),
    (300, 500, 3500.0),
    (500, 800, 5000.0),
    (800, 1000, 7000.0),
    (1000, 1500, 9000.0),
    (1500, 2000, 12000.0),
];

enum Chamber {
    Cylindrical,
    Rectangular,
}

const AUTOCLAVES: &[(u32, u32, Chamber, &str, f64)] = &[
    (0, 20, Chamber::Cylindrical, "16×24 Single Door", 1.0),
    (20, 30, Chamber::Cylindrical, "20×36 Single Door", 1.0),
    (30, 50, Chamber::Cylindrical, "20×48 Double Door", 1.0),
    (50, 70, Chamber::Cylindrical, "20×48 Double Door", 2.0),
    (70, 100, Chamber::Cylindrical, "20×48 Double Door", 2.0),
    (100, 150, Chamber::Rectangular, "2×2×4 Double Door", 1.0),
    (150, 200, Chamber::Rectangular, "2×2×4 Double Door", 2.0),
    (200, 500, Chamber::Rectangular, "2×2×4 Double Door", 3.0),
];

fn range(min_beds: u32, max_beds: u32) -> BedRange {
    BedRange {
        min_beds,
        max_beds: Some(max_beds),
        label: format!("{}-{}", min_beds, max_beds),
    }
}

pub fn builtin() -> PlanningData {
    let areas = AREAS
        .iter()
        .map(|&(min, max, area)| AreaRequirement {
            range: range(min, max),
            area_sq_ft: Some(area),
            official_min_budget: None,
            official_max_budget: None,
            equipment: Vec::new(),
        })
        .collect();

    let autoclaves = AUTOCLAVES
        .iter()
        .map(|(min, max, chamber, spec, quantity)| {
            let option = Some(AutoclaveOption {
                spec: spec.to_string(),
                quantity: *quantity,
            });
            let (cylindrical, rectangular) = match chamber {
                Chamber::Cylindrical => (option, None),
                Chamber::Rectangular => (None, option),
            };
            AutoclaveRequirement {
                range: range(*min, *max),
                cylindrical,
                rectangular,
            }
        })
        .collect();

    PlanningData { areas, autoclaves }
}
