//! Resolution of a completed selection into an executable query plan.

use crate::catalog::{self, BuildingClass, EndUse, FuelType, Mode, Shape};
use crate::errors::{CalcError, CalcResult};
use crate::selection::SelectionState;
use log::debug;
use serde::Serialize;

/// One fuel iteration of the aggregation.
///
/// Usually the dataset key and the conversion fuel agree; residential solar
/// water heating is the exception, where the data lives under the grid
/// electricity branch but converts at solar rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FuelStep {
    pub dataset_key: &'static str,
    pub conversion: FuelType,
}

impl FuelStep {
    fn for_fuel(class: BuildingClass, fuel: FuelType) -> Self {
        Self {
            dataset_key: fuel.dataset_key(class),
            conversion: fuel,
        }
    }

    fn electricity(class: BuildingClass) -> Self {
        Self::for_fuel(class, FuelType::Electricity)
    }
}

/// The exact dataset paths and conversion rules for one aggregation query.
///
/// A path is assembled per cross-product element as
/// `[zone][building type][fuel][end use][mode?][tech?]["energy"?][year]`,
/// where the mode segment exists only for HVAC end uses, the technology
/// segment only when `tech_axis` is present, and the `"energy"` segment only
/// in the residential schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    pub class: BuildingClass,
    pub zones: Vec<String>,
    pub building_types: Vec<String>,
    pub end_use_key: &'static str,
    pub mode_key: Option<&'static str>,
    pub fuel_steps: Vec<FuelStep>,
    pub tech_axis: Option<Vec<String>>,
    pub year: u16,
}

impl QueryPlan {
    /// Number of dataset leaves the aggregation will fetch.
    pub fn lookup_count(&self) -> usize {
        self.zones.len()
            * self.building_types.len()
            * self.fuel_steps.len()
            * self.tech_axis.as_ref().map_or(1, Vec::len)
    }
}

fn incomplete(missing: &'static str) -> CalcError {
    CalcError::IncompleteSelection { missing }
}

fn require_technologies(state: &SelectionState) -> CalcResult<Vec<String>> {
    if state.technologies().is_empty() {
        return Err(incomplete("technology"));
    }
    Ok(state.technologies().to_vec())
}

/// Compute the query plan for the current selection.
///
/// Fails with [`CalcError::IncompleteSelection`] if any dimension required
/// by the end use's shape (or the always-required climate zones and building
/// types) is unset, so the aggregation can never index into a half-built
/// selection.
pub fn resolve(state: &SelectionState) -> CalcResult<QueryPlan> {
    let class = state.building_class().ok_or(incomplete("building class"))?;
    if state.climate_zones().is_empty() {
        return Err(incomplete("climate zone"));
    }
    if state.building_types().is_empty() {
        return Err(incomplete("building type"));
    }
    let end_use = state.end_use().ok_or(incomplete("end use"))?;

    let (fuel_steps, tech_axis, mode_key) = match end_use.shape(class) {
        Shape::Hvac => resolve_hvac(state, class, end_use)?,
        Shape::FuelOnly => {
            let fuel = state.fuel_type().ok_or(incomplete("fuel type"))?;
            resolve_fuel_only(class, end_use, fuel)
        }
        Shape::FuelPlusTech => {
            let fuel = state.fuel_type().ok_or(incomplete("fuel type"))?;
            let techs = require_technologies(state)?;
            (vec![FuelStep::for_fuel(class, fuel)], Some(techs), None)
        }
        Shape::TechOnly => {
            let techs = require_technologies(state)?;
            let axis = if class == BuildingClass::Commercial && end_use == EndUse::Lighting {
                expand_lighting_groups(&techs)?
            } else {
                techs
            };
            (vec![FuelStep::electricity(class)], Some(axis), None)
        }
        Shape::SubtypeOnly => {
            let subtypes = require_technologies(state)?;
            (vec![FuelStep::electricity(class)], Some(subtypes), None)
        }
        Shape::Direct => (vec![FuelStep::electricity(class)], None, None),
    };

    let plan = QueryPlan {
        class,
        zones: state.climate_zones().to_vec(),
        building_types: state.building_types().to_vec(),
        end_use_key: end_use.key(),
        mode_key,
        fuel_steps,
        tech_axis,
        year: state.year(),
    };
    debug!(
        "resolved {:?} {} query: {} leaf lookups",
        plan.class,
        plan.end_use_key,
        plan.lookup_count()
    );
    Ok(plan)
}

type ResolvedAxes = (Vec<FuelStep>, Option<Vec<String>>, Option<&'static str>);

fn resolve_hvac(
    state: &SelectionState,
    class: BuildingClass,
    end_use: EndUse,
) -> CalcResult<ResolvedAxes> {
    let mode = state.mode().ok_or(incomplete("equipment/envelope mode"))?;
    match mode {
        Mode::Supply => {
            let fuel = state.fuel_type().ok_or(incomplete("fuel type"))?;
            // For every fuel except "other fuel" the secondary heating
            // technology is the sentinel, whatever was selected before.
            let techs = if class == BuildingClass::Residential
                && end_use == EndUse::SecondaryHeating
                && fuel != FuelType::OtherFuel
            {
                vec![catalog::NON_SPECIFIC.key.to_string()]
            } else {
                require_technologies(state)?
            };
            Ok((
                vec![FuelStep::for_fuel(class, fuel)],
                Some(techs),
                Some(Mode::Supply.key()),
            ))
        }
        Mode::Demand => {
            // Envelope loads are charged against every fuel type legal for
            // the end use; the selected technology set is reused across the
            // whole fuel loop.
            let techs = require_technologies(state)?;
            let steps = end_use
                .fuels(class)
                .iter()
                .map(|&fuel| FuelStep::for_fuel(class, fuel))
                .collect();
            Ok((steps, Some(techs), Some(Mode::Demand.key())))
        }
    }
}

fn resolve_fuel_only(class: BuildingClass, end_use: EndUse, fuel: FuelType) -> ResolvedAxes {
    if class == BuildingClass::Residential && end_use == EndUse::WaterHeating {
        // Electric and solar water heating both live under the grid
        // electricity branch, distinguished by a sub-key in the technology
        // slot. Solar still converts at solar rates.
        match fuel {
            FuelType::Electricity => (
                vec![FuelStep::for_fuel(class, fuel)],
                Some(vec![catalog::ELECTRIC_WH.to_string()]),
                None,
            ),
            FuelType::Solar => (
                vec![FuelStep {
                    dataset_key: FuelType::Electricity.dataset_key(class),
                    conversion: FuelType::Solar,
                }],
                Some(vec![catalog::SOLAR_WH.to_string()]),
                None,
            ),
            fuel => (vec![FuelStep::for_fuel(class, fuel)], None, None),
        }
    } else {
        (vec![FuelStep::for_fuel(class, fuel)], None, None)
    }
}

fn expand_lighting_groups(groups: &[String]) -> CalcResult<Vec<String>> {
    let mut items = Vec::new();
    for group in groups {
        let expanded = catalog::lighting_group_items(group).ok_or_else(|| {
            CalcError::StaleCatalogReference {
                field: "lighting technology group",
                value: group.clone(),
            }
        })?;
        items.extend(expanded.iter().map(|item| item.to_string()));
    }
    Ok(items)
}
