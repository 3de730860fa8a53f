//! Cross-product aggregation of a query plan against the dataset.

use crate::conversion::ConversionTable;
use crate::dataset::{format_path, DatasetRead};
use crate::errors::{CalcError, CalcResult};
use crate::query::QueryPlan;
use serde::{Deserialize, Serialize};

/// The two totals produced by one aggregation query.
///
/// Energy is in the dataset's site-consumption units (MMBtu equivalent for
/// both schemas after conversion); CO2 is in million metric tons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub total_energy: f64,
    pub total_co2: f64,
}

impl QueryResult {
    /// Total energy converted from MMBtu to quads and rounded to at most
    /// three decimals, as displayed.
    pub fn energy_quads(&self) -> f64 {
        (self.total_energy / 1e6).round() / 1e3
    }

    /// Total CO2 rounded to at most three decimals, as displayed.
    pub fn co2_rounded(&self) -> f64 {
        (self.total_co2 * 1e3).round() / 1e3
    }
}

/// Walk the plan's full cross-product of climate zones, building types,
/// fuel steps, and technologies, fetching each leaf from `dataset` and
/// accumulating the converted energy and CO2 totals.
///
/// A missing leaf for any combination is a data-integrity failure: the
/// aggregation aborts with [`CalcError::DatasetKeyMissing`] naming the path
/// rather than folding a silent non-value into the totals.
pub fn aggregate(
    plan: &QueryPlan,
    dataset: &impl DatasetRead,
    conversions: &ConversionTable,
) -> CalcResult<QueryResult> {
    let year_key = plan.year.to_string();
    let divisor = plan.class.co2_unit_divisor();

    // One slot per technology, or a single slot when the path has no
    // technology level.
    let tech_slots: Vec<Option<&str>> = match &plan.tech_axis {
        Some(techs) => techs.iter().map(|tech| Some(tech.as_str())).collect(),
        None => vec![None],
    };

    let mut total_energy = 0.0;
    let mut total_co2 = 0.0;
    for step in &plan.fuel_steps {
        let energy_conv = conversions.primary_energy(plan.class, step.conversion, plan.year)?;
        let co2_conv = conversions.co2_intensity(plan.class, step.conversion, plan.year)?;
        for zone in &plan.zones {
            for building in &plan.building_types {
                for tech in &tech_slots {
                    let mut path: Vec<&str> =
                        vec![zone, building, step.dataset_key, plan.end_use_key];
                    if let Some(mode) = plan.mode_key {
                        path.push(mode);
                    }
                    if let Some(tech) = tech {
                        path.push(tech);
                    }
                    if plan.class.has_energy_leaf() {
                        path.push("energy");
                    }
                    path.push(&year_key);

                    let leaf = dataset.leaf(&path).ok_or_else(|| {
                        CalcError::DatasetKeyMissing {
                            path: format_path(&path),
                        }
                    })?;
                    let amount = leaf * energy_conv;
                    total_energy += amount;
                    total_co2 += amount / divisor * co2_conv;
                }
            }
        }
    }

    Ok(QueryResult {
        total_energy,
        total_co2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildingClass, EndUse, Mode};
    use crate::selection::SelectionState;
    use is_close::is_close;
    use serde_json::json;

    /// A dataset that returns the same value for every leaf.
    struct ConstantDataset(f64);

    impl DatasetRead for ConstantDataset {
        fn leaf(&self, _path: &[&str]) -> Option<f64> {
            Some(self.0)
        }
    }

    fn conversions() -> ConversionTable {
        ConversionTable::from_json_str(
            r#"{
                "electricity (grid)": {
                    "site to source conversion": {"2030": 3.0},
                    "CO2 intensity": {"2030": 0.5}
                },
                "natural gas": {
                    "site to source conversion": {"2030": 1.0},
                    "CO2 intensity": {"2030": 0.05}
                },
                "other": {
                    "site to source conversion": {"2030": 1.0},
                    "CO2 intensity": {"2030": 0.07}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn constant_dataset_round_trip() {
        let mut state = SelectionState::new();
        state.set_building_class(BuildingClass::Residential);
        state.set_climate_zones(vec!["AIA_CZ1".to_string(), "AIA_CZ2".to_string()]);
        state.set_building_types(vec!["single family home".to_string()]);
        state.set_end_use(EndUse::Lighting);
        state.set_technologies(vec![
            "general service".to_string(),
            "reflector".to_string(),
        ]);

        let plan = crate::query::resolve(&state).unwrap();
        assert_eq!(plan.lookup_count(), 4);

        let result = aggregate(&plan, &ConstantDataset(10.0), &conversions()).unwrap();
        // 4 leaves x 10.0 x ss_el(3.0)
        assert!(is_close!(result.total_energy, 120.0));
        assert!(is_close!(result.total_co2, 120.0 / 1e9 * 0.5));
    }

    #[test]
    fn demand_sums_over_every_legal_fuel() {
        let mut state = SelectionState::new();
        state.set_building_class(BuildingClass::Residential);
        state.set_climate_zones(vec!["AIA_CZ1".to_string()]);
        state.set_building_types(vec!["single family home".to_string()]);
        state.set_end_use(EndUse::Cooling);
        state.set_mode(Mode::Demand);
        state.set_technologies(vec!["wall".to_string()]);

        let leaf = json!({"energy": {"2030": 100.0}});
        let dataset = json!({
            "AIA_CZ1": {"single family home": {
                "electricity (grid)": {"cooling": {"demand": {"wall": leaf.clone()}}},
                "natural gas": {"cooling": {"demand": {"wall": leaf}}}
            }}
        });

        let plan = crate::query::resolve(&state).unwrap();
        let result = aggregate(&plan, &dataset, &conversions()).unwrap();
        // electricity: 100 * 3.0; natural gas: 100 * 1.0
        assert!(is_close!(result.total_energy, 400.0));
        assert!(is_close!(
            result.total_co2,
            300.0 / 1e9 * 0.5 + 100.0 / 1e9 * 0.05
        ));
    }

    #[test]
    fn commercial_totals_use_the_smaller_divisor() {
        let mut state = SelectionState::new();
        state.set_building_class(BuildingClass::Commercial);
        state.set_climate_zones(vec!["AIA_CZ1".to_string()]);
        state.set_building_types(vec!["small office".to_string()]);
        state.set_end_use(EndUse::Pcs);

        // Commercial schema: year directly under the end use, no "energy".
        let dataset = json!({
            "AIA_CZ1": {"small office": {"electricity": {"PCs": {"2030": 50.0}}}}
        });

        let plan = crate::query::resolve(&state).unwrap();
        let result = aggregate(&plan, &dataset, &conversions()).unwrap();
        assert!(is_close!(result.total_energy, 150.0));
        assert!(is_close!(result.total_co2, 150.0 / 1e3 * 0.5));
    }

    #[test]
    fn missing_leaf_aborts_with_the_failed_path() {
        let mut state = SelectionState::new();
        state.set_building_class(BuildingClass::Residential);
        state.set_climate_zones(vec!["AIA_CZ1".to_string()]);
        state.set_building_types(vec!["single family home".to_string()]);
        state.set_end_use(EndUse::CeilingFan);

        let dataset = json!({"AIA_CZ1": {"single family home": {}}});
        let plan = crate::query::resolve(&state).unwrap();
        let err = aggregate(&plan, &dataset, &conversions()).unwrap_err();
        match err {
            CalcError::DatasetKeyMissing { path } => {
                assert_eq!(
                    path,
                    "[AIA_CZ1][single family home][electricity (grid)][ceiling fan][energy][2030]"
                );
            }
            err => panic!("expected DatasetKeyMissing, got {err:?}"),
        }
    }

    #[test]
    fn display_helpers_round_to_three_decimals() {
        let result = QueryResult {
            total_energy: 1_234_567_890.0,
            total_co2: 0.123456,
        };
        assert!(is_close!(result.energy_quads(), 1.235));
        assert!(is_close!(result.co2_rounded(), 0.123));
    }
}
