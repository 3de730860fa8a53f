//! The cascading selection state machine.
//!
//! Each user choice is one transition: it mutates the owned
//! [`SelectionState`], clearing everything strictly downstream of the
//! changed dimension, and returns the widget side effects the display
//! surface must apply. The side effects are data, never executed here.
//! Widgets carry class tags so a whole cascade tail can be destroyed in one
//! intent.
//!
//! Selector inputs are membership-checked against the catalog before any
//! state changes; a value that is no longer legal (a late event from an
//! already-destroyed widget, say) is rejected with
//! [`CalcError::StaleCatalogReference`] and leaves the state untouched.

use crate::catalog::{
    self, BuildingClass, EndUse, FuelType, Mode, Opt, Shape, MODE_OPTIONS,
};
use crate::errors::{CalcError, CalcResult};
use crate::selection::SelectionState;
use log::debug;
use serde::Serialize;

pub const BUILDING_TYPES_ID: &str = "building-types";
pub const END_USE_ID: &str = "end-use";
pub const MODE_RADIO_ID: &str = "eq-env-radio";
pub const FUEL_TYPE_ID: &str = "fuel-type";
pub const FUEL_ONLY_ID: &str = "ft-only";
pub const EQUIPMENT_ID: &str = "eq-buttons";
pub const ENVELOPE_ID: &str = "env-buttons";
pub const TECHNOLOGY_ID: &str = "tech-buttons";
pub const MEL_SUBTYPE_ID: &str = "mel-type";

pub const CLASS_ROW: &str = "bldg-class-row";
pub const BUILDING_TYPES_ROW: &str = "building-type-row";
pub const END_USE_ROW: &str = "end-use-row";

/// Class tag attached to created widgets, used for bulk removal when an
/// upstream change invalidates a whole tail of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetTag {
    BuildingTypes,
    EndUseList,
    /// Everything downstream of the end-use control.
    Subtype,
    /// Supply-side widgets, removed when the mode flips to demand.
    Supply,
    /// Demand-side widgets, removed when the mode flips to supply.
    Demand,
    /// The equipment button group, replaced on every fuel change.
    Equipment,
}

/// One widget side effect for the display surface to apply, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WidgetIntent {
    /// Remove every widget carrying the tag.
    Destroy { tag: WidgetTag },
    CreateDropdown {
        id: &'static str,
        anchor: &'static str,
        tags: Vec<WidgetTag>,
        options: Vec<Opt>,
    },
    CreateMultiSelect {
        id: &'static str,
        anchor: &'static str,
        tags: Vec<WidgetTag>,
        options: Vec<Opt>,
    },
    CreateRadioGroup {
        id: &'static str,
        anchor: &'static str,
        tags: Vec<WidgetTag>,
        options: Vec<Opt>,
    },
    CreateButtonGroup {
        id: &'static str,
        anchor: &'static str,
        tags: Vec<WidgetTag>,
        options: Vec<Opt>,
    },
}

/// Owner of the selection state and the only thing that mutates it.
#[derive(Debug, Default)]
pub struct CascadeController {
    state: SelectionState,
    /// Whether a non-empty building-type selection has already emitted the
    /// end-use list. Re-selecting further building types must not
    /// regenerate it.
    buildings_selected: bool,
}

impl CascadeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Select the building sector, resetting every downstream dimension
    /// whether or not the sector actually changed.
    pub fn select_building_class(&mut self, class: BuildingClass) -> Vec<WidgetIntent> {
        debug!("building class -> {class:?}");
        self.state.set_building_class(class);
        self.buildings_selected = false;
        vec![
            WidgetIntent::Destroy {
                tag: WidgetTag::Subtype,
            },
            WidgetIntent::Destroy {
                tag: WidgetTag::EndUseList,
            },
            WidgetIntent::Destroy {
                tag: WidgetTag::BuildingTypes,
            },
            WidgetIntent::CreateMultiSelect {
                id: BUILDING_TYPES_ID,
                anchor: CLASS_ROW,
                tags: vec![WidgetTag::BuildingTypes],
                options: catalog::building_types(class).to_vec(),
            },
        ]
    }

    /// Replace the building-type set. An empty set counts as "none
    /// selected" and clears the cascade below it.
    pub fn select_building_types(&mut self, keys: Vec<String>) -> CalcResult<Vec<WidgetIntent>> {
        let class = self.require_class()?;
        for key in &keys {
            require_member(catalog::building_types(class), key, "building type")?;
        }

        if keys.is_empty() {
            debug!("building types cleared");
            self.state.clear_building_types();
            self.buildings_selected = false;
            return Ok(vec![
                WidgetIntent::Destroy {
                    tag: WidgetTag::Subtype,
                },
                WidgetIntent::Destroy {
                    tag: WidgetTag::EndUseList,
                },
            ]);
        }

        debug!("building types -> {keys:?}");
        self.state.set_building_types(keys);
        if self.buildings_selected {
            return Ok(vec![]);
        }
        self.buildings_selected = true;
        Ok(vec![WidgetIntent::CreateDropdown {
            id: END_USE_ID,
            anchor: BUILDING_TYPES_ROW,
            tags: vec![WidgetTag::EndUseList],
            options: catalog::end_use_options(class),
        }])
    }

    /// Select the end use and emit the next input its shape requires.
    pub fn select_end_use(&mut self, key: &str) -> CalcResult<Vec<WidgetIntent>> {
        let class = self.require_class()?;
        if self.state.building_types().is_empty() {
            return Err(CalcError::IncompleteSelection {
                missing: "building type",
            });
        }
        let end_use = EndUse::from_key(class, key).ok_or_else(|| {
            CalcError::StaleCatalogReference {
                field: "end use",
                value: key.to_string(),
            }
        })?;

        debug!("end use -> {}", end_use.key());
        self.state.set_end_use(end_use);

        let mut intents = vec![WidgetIntent::Destroy {
            tag: WidgetTag::Subtype,
        }];
        match end_use.shape(class) {
            Shape::Hvac => intents.push(WidgetIntent::CreateRadioGroup {
                id: MODE_RADIO_ID,
                anchor: END_USE_ROW,
                tags: vec![WidgetTag::Subtype],
                options: MODE_OPTIONS.to_vec(),
            }),
            Shape::FuelOnly => intents.push(WidgetIntent::CreateDropdown {
                id: FUEL_ONLY_ID,
                anchor: END_USE_ROW,
                tags: vec![WidgetTag::Subtype],
                options: catalog::fuel_options(class, end_use),
            }),
            Shape::FuelPlusTech => intents.push(WidgetIntent::CreateDropdown {
                id: FUEL_TYPE_ID,
                anchor: END_USE_ROW,
                tags: vec![WidgetTag::Subtype],
                options: catalog::fuel_options(class, end_use),
            }),
            Shape::TechOnly => intents.push(WidgetIntent::CreateButtonGroup {
                id: TECHNOLOGY_ID,
                anchor: END_USE_ROW,
                tags: vec![WidgetTag::Subtype],
                options: catalog::technology_options(class, end_use).to_vec(),
            }),
            Shape::SubtypeOnly => intents.push(WidgetIntent::CreateDropdown {
                id: MEL_SUBTYPE_ID,
                anchor: END_USE_ROW,
                tags: vec![WidgetTag::Subtype],
                options: catalog::mel_subtype_options().to_vec(),
            }),
            Shape::Direct => {}
        }
        Ok(intents)
    }

    /// Pick the supply (equipment) or demand (envelope) side of an HVAC
    /// end use, replacing any widgets belonging to the other side.
    pub fn select_mode(&mut self, mode: Mode) -> CalcResult<Vec<WidgetIntent>> {
        let (class, end_use) = self.require_end_use()?;
        if end_use.shape(class) != Shape::Hvac {
            return Err(CalcError::StaleCatalogReference {
                field: "equipment/envelope mode",
                value: mode.key().to_string(),
            });
        }

        debug!("mode -> {}", mode.key());
        self.state.set_mode(mode);
        Ok(match mode {
            Mode::Supply => vec![
                WidgetIntent::Destroy {
                    tag: WidgetTag::Demand,
                },
                WidgetIntent::CreateDropdown {
                    id: FUEL_TYPE_ID,
                    anchor: MODE_RADIO_ID,
                    tags: vec![WidgetTag::Subtype, WidgetTag::Supply],
                    options: catalog::fuel_options(class, end_use),
                },
            ],
            Mode::Demand => vec![
                WidgetIntent::Destroy {
                    tag: WidgetTag::Supply,
                },
                WidgetIntent::CreateButtonGroup {
                    id: ENVELOPE_ID,
                    anchor: MODE_RADIO_ID,
                    tags: vec![WidgetTag::Subtype, WidgetTag::Demand],
                    options: catalog::envelope_options(class).to_vec(),
                },
            ],
        })
    }

    /// Select a fuel type and emit the matching equipment choices, where
    /// the shape has any.
    pub fn select_fuel_type(&mut self, key: &str) -> CalcResult<Vec<WidgetIntent>> {
        let (class, end_use) = self.require_end_use()?;
        let stale = || CalcError::StaleCatalogReference {
            field: "fuel type",
            value: key.to_string(),
        };
        let shape = end_use.shape(class);
        if !matches!(shape, Shape::Hvac | Shape::FuelOnly | Shape::FuelPlusTech) {
            return Err(stale());
        }
        let fuel = FuelType::from_key(class, key)
            .filter(|fuel| end_use.fuels(class).contains(fuel))
            .ok_or_else(stale)?;

        match shape {
            Shape::Hvac => {
                if self.state.mode() != Some(Mode::Supply) {
                    return Err(stale());
                }
                debug!("fuel type -> {key}");
                self.state.set_fuel_type(fuel);
                let mut intents = vec![WidgetIntent::Destroy {
                    tag: WidgetTag::Equipment,
                }];
                if class == BuildingClass::Residential
                    && end_use == EndUse::SecondaryHeating
                    && fuel != FuelType::OtherFuel
                {
                    // No user choice: the technology is the sentinel.
                    self.state
                        .set_technologies(vec![catalog::NON_SPECIFIC.key.to_string()]);
                } else {
                    intents.push(WidgetIntent::CreateButtonGroup {
                        id: EQUIPMENT_ID,
                        anchor: FUEL_TYPE_ID,
                        tags: vec![WidgetTag::Subtype, WidgetTag::Supply, WidgetTag::Equipment],
                        options: catalog::equipment_options(class, end_use, fuel),
                    });
                }
                Ok(intents)
            }
            Shape::FuelOnly => {
                debug!("fuel type -> {key}");
                self.state.set_fuel_type(fuel);
                Ok(vec![])
            }
            Shape::FuelPlusTech => {
                debug!("fuel type -> {key}");
                self.state.set_fuel_type(fuel);
                Ok(vec![
                    WidgetIntent::Destroy {
                        tag: WidgetTag::Equipment,
                    },
                    WidgetIntent::CreateButtonGroup {
                        id: EQUIPMENT_ID,
                        anchor: FUEL_TYPE_ID,
                        tags: vec![WidgetTag::Subtype, WidgetTag::Equipment],
                        options: catalog::equipment_options(class, end_use, fuel),
                    },
                ])
            }
            _ => unreachable!("shape checked above"),
        }
    }

    /// Replace the technology set. Multi-select button groups submit the
    /// full checked set; single-valued dropdowns submit a one-element set.
    pub fn select_technologies(&mut self, keys: Vec<String>) -> CalcResult<()> {
        let legal = self.legal_technologies(&keys)?;
        for key in &keys {
            require_member(&legal, key, "technology")?;
        }
        debug!("technologies -> {keys:?}");
        self.state.set_technologies(keys);
        Ok(())
    }

    /// Single-valued convenience for the MELs subtype dropdown.
    pub fn select_mel_subtype(&mut self, key: &str) -> CalcResult<()> {
        self.select_technologies(vec![key.to_string()])
    }

    /// Climate zones are independent of the cascade; the keys are still
    /// membership-checked.
    pub fn select_climate_zones(&mut self, keys: Vec<String>) -> CalcResult<()> {
        for key in &keys {
            require_member(catalog::climate_zones(), key, "climate zone")?;
        }
        debug!("climate zones -> {keys:?}");
        self.state.set_climate_zones(keys);
        Ok(())
    }

    pub fn select_year(&mut self, year: u16) {
        debug!("projection year -> {year}");
        self.state.set_year(year);
    }

    fn require_class(&self) -> CalcResult<BuildingClass> {
        self.state
            .building_class()
            .ok_or(CalcError::IncompleteSelection {
                missing: "building class",
            })
    }

    fn require_end_use(&self) -> CalcResult<(BuildingClass, EndUse)> {
        let class = self.require_class()?;
        let end_use = self.state.end_use().ok_or(CalcError::IncompleteSelection {
            missing: "end use",
        })?;
        Ok((class, end_use))
    }

    /// The technology options currently legal, per the end use's shape and
    /// the upstream selections.
    fn legal_technologies(&self, keys: &[String]) -> CalcResult<Vec<Opt>> {
        let (class, end_use) = self.require_end_use()?;
        let stale = || CalcError::StaleCatalogReference {
            field: "technology",
            value: keys.first().cloned().unwrap_or_default(),
        };
        match end_use.shape(class) {
            Shape::Hvac => match self.state.mode() {
                Some(Mode::Demand) => Ok(catalog::envelope_options(class).to_vec()),
                Some(Mode::Supply) => {
                    let fuel = self.state.fuel_type().ok_or_else(stale)?;
                    Ok(catalog::equipment_options(class, end_use, fuel))
                }
                None => Err(stale()),
            },
            Shape::FuelPlusTech => {
                let fuel = self.state.fuel_type().ok_or_else(stale)?;
                Ok(catalog::equipment_options(class, end_use, fuel))
            }
            Shape::TechOnly => Ok(catalog::technology_options(class, end_use).to_vec()),
            Shape::SubtypeOnly => Ok(catalog::mel_subtype_options().to_vec()),
            Shape::FuelOnly | Shape::Direct => Err(stale()),
        }
    }
}

fn require_member(options: &[Opt], key: &str, field: &'static str) -> CalcResult<()> {
    if options.iter().any(|opt| opt.key == key) {
        return Ok(());
    }
    Err(CalcError::StaleCatalogReference {
        field,
        value: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residential_controller() -> CascadeController {
        let mut controller = CascadeController::new();
        controller.select_building_class(BuildingClass::Residential);
        controller
            .select_building_types(vec!["single family home".to_string()])
            .unwrap();
        controller
    }

    #[test]
    fn selecting_a_building_class_always_resets_downstream() {
        let mut controller = residential_controller();
        controller.select_end_use("heating").unwrap();
        controller.select_mode(Mode::Supply).unwrap();
        controller.select_fuel_type("natural gas").unwrap();
        controller
            .select_technologies(vec!["furnace (NG)".to_string()])
            .unwrap();

        // Re-selecting the same class is not a no-op.
        controller.select_building_class(BuildingClass::Residential);
        let state = controller.state();
        assert!(state.building_types().is_empty());
        assert_eq!(state.end_use(), None);
        assert_eq!(state.mode(), None);
        assert_eq!(state.fuel_type(), None);
        assert!(state.technologies().is_empty());
    }

    #[test]
    fn end_use_options_are_emitted_once_per_non_empty_edge() {
        let mut controller = CascadeController::new();
        controller.select_building_class(BuildingClass::Residential);

        let first = controller
            .select_building_types(vec!["single family home".to_string()])
            .unwrap();
        assert!(matches!(
            first.as_slice(),
            [WidgetIntent::CreateDropdown { id: END_USE_ID, .. }]
        ));

        // Adding a second building type keeps the existing end-use list.
        let second = controller
            .select_building_types(vec![
                "single family home".to_string(),
                "mobile home".to_string(),
            ])
            .unwrap();
        assert!(second.is_empty());

        // Emptying the selection clears downstream and re-arms the edge.
        let cleared = controller.select_building_types(vec![]).unwrap();
        assert!(cleared.contains(&WidgetIntent::Destroy {
            tag: WidgetTag::EndUseList
        }));
        assert_eq!(controller.state().end_use(), None);

        let again = controller
            .select_building_types(vec!["mobile home".to_string()])
            .unwrap();
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn changing_end_use_destroys_the_subtype_tail() {
        let mut controller = residential_controller();
        controller.select_end_use("heating").unwrap();
        let intents = controller.select_end_use("lighting").unwrap();
        assert_eq!(
            intents[0],
            WidgetIntent::Destroy {
                tag: WidgetTag::Subtype
            }
        );
        assert_eq!(controller.state().mode(), None);
    }

    #[test]
    fn mode_flip_replaces_the_other_side() {
        let mut controller = residential_controller();
        controller.select_end_use("cooling").unwrap();

        let demand = controller.select_mode(Mode::Demand).unwrap();
        assert_eq!(
            demand[0],
            WidgetIntent::Destroy {
                tag: WidgetTag::Supply
            }
        );
        assert!(matches!(
            &demand[1],
            WidgetIntent::CreateButtonGroup { id: ENVELOPE_ID, .. }
        ));

        let supply = controller.select_mode(Mode::Supply).unwrap();
        assert_eq!(
            supply[0],
            WidgetIntent::Destroy {
                tag: WidgetTag::Demand
            }
        );
        assert_eq!(controller.state().technologies(), &[] as &[String]);
    }

    #[test]
    fn secondary_heating_fuels_force_the_sentinel_without_a_widget() {
        let mut controller = residential_controller();
        controller.select_end_use("secondary heating").unwrap();
        controller.select_mode(Mode::Supply).unwrap();

        let intents = controller.select_fuel_type("natural gas").unwrap();
        assert_eq!(intents.len(), 1); // just the equipment destroy
        assert_eq!(
            controller.state().technologies(),
            vec!["non-specific".to_string()]
        );

        // "Other fuel" gets a real equipment choice.
        let intents = controller.select_fuel_type("other fuel").unwrap();
        assert!(matches!(
            &intents[1],
            WidgetIntent::CreateButtonGroup { id: EQUIPMENT_ID, options, .. }
                if options.len() == 4
        ));
        assert!(controller.state().technologies().is_empty());
    }

    #[test]
    fn stale_values_are_rejected_without_state_changes() {
        let mut controller = residential_controller();
        controller.select_end_use("lighting").unwrap();

        // A technology from the heating list is not legal for lighting.
        let err = controller
            .select_technologies(vec!["ASHP".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::StaleCatalogReference {
                field: "technology",
                value: "ASHP".to_string()
            }
        );
        assert!(controller.state().technologies().is_empty());

        // A fuel selection for a technology-only end use is stale.
        assert!(controller.select_fuel_type("natural gas").is_err());
    }

    #[test]
    fn demand_mode_rejects_fuel_selection() {
        let mut controller = residential_controller();
        controller.select_end_use("heating").unwrap();
        controller.select_mode(Mode::Demand).unwrap();
        assert!(matches!(
            controller.select_fuel_type("electricity (grid)").unwrap_err(),
            CalcError::StaleCatalogReference { .. }
        ));
    }

    #[test]
    fn commercial_mels_cascade() {
        let mut controller = CascadeController::new();
        controller.select_building_class(BuildingClass::Commercial);
        controller
            .select_building_types(vec!["health care".to_string()])
            .unwrap();
        let intents = controller.select_end_use("MELs").unwrap();
        assert!(matches!(
            &intents[1],
            WidgetIntent::CreateDropdown { id: MEL_SUBTYPE_ID, .. }
        ));
        controller.select_mel_subtype("medical imaging").unwrap();
        assert_eq!(
            controller.state().technologies(),
            vec!["medical imaging".to_string()]
        );
    }

    #[test]
    fn climate_zone_keys_are_membership_checked() {
        let mut controller = CascadeController::new();
        assert!(controller
            .select_climate_zones(vec!["AIA_CZ1".to_string()])
            .is_ok());
        assert!(controller
            .select_climate_zones(vec!["AIA_CZ9".to_string()])
            .is_err());
    }
}
