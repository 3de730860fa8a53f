//! Static reference data describing the selection dimensions.
//!
//! The catalog encodes, for each building class, the legal building types,
//! end uses, fuel types, and technology options, plus which fuel types and
//! technologies are valid per end use. It is pure data consulted by the
//! cascade controller and the query path resolver; it has no behavior beyond
//! lookups.
//!
//! Requesting options for a combination the catalog does not define (for
//! example, equipment for a fuel type that is not legal for the end use) is a
//! programming error and panics. A correctly driven cascade never reaches
//! those combinations.

mod commercial;
mod residential;

pub(crate) use residential::{ELECTRIC_WH, NON_SPECIFIC, SOLAR_WH};

use serde::{Deserialize, Serialize};

/// A single option offered by a selection widget: the text shown to the user
/// and the key used in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Opt {
    pub label: &'static str,
    pub key: &'static str,
}

impl Opt {
    pub const fn new(label: &'static str, key: &'static str) -> Self {
        Self { label, key }
    }
}

/// Subset a master option list by an index set.
///
/// Equipment lists are partitioned into fuel-specific sub-lists selected by
/// index-set membership, not by value equality.
fn pick(master: &'static [Opt], index: &[usize]) -> Vec<Opt> {
    index.iter().map(|&i| master[i]).collect()
}

/// Building sector. Selected once per query session; determines which
/// catalog subset and which dataset schema applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingClass {
    Residential,
    Commercial,
}

impl BuildingClass {
    pub fn label(&self) -> &'static str {
        match self {
            BuildingClass::Residential => "Residential",
            BuildingClass::Commercial => "Commercial",
        }
    }

    /// Divisor applied to converted energy amounts before multiplying by the
    /// CO2 intensity factor. The residential and commercial datasets carry
    /// their values at scales three orders of magnitude apart.
    pub fn co2_unit_divisor(&self) -> f64 {
        match self {
            BuildingClass::Residential => 1e9,
            BuildingClass::Commercial => 1e3,
        }
    }

    /// Whether the dataset nests an `"energy"` map between the technology
    /// level and the year leaf. The commercial dataset keys years directly.
    pub fn has_energy_leaf(&self) -> bool {
        matches!(self, BuildingClass::Residential)
    }
}

/// Equipment (supply) versus envelope (demand) side of an HVAC end use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Supply,
    Demand,
}

impl Mode {
    pub fn key(&self) -> &'static str {
        match self {
            Mode::Supply => "supply",
            Mode::Demand => "demand",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "supply" => Some(Mode::Supply),
            "demand" => Some(Mode::Demand),
            _ => None,
        }
    }
}

/// Options for the supply/demand radio control. The user-facing labels talk
/// about equipment and envelope; the dataset keys are supply and demand.
pub(crate) const MODE_OPTIONS: &[Opt] = &[
    Opt::new("Equipment", "supply"),
    Opt::new("Envelope", "demand"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Electricity,
    NaturalGas,
    Distillate,
    /// On-site generation (solar thermal). Residential water heating only;
    /// not a top-level fuel bucket in the dataset.
    Solar,
    OtherFuel,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Electricity => "Electricity",
            FuelType::NaturalGas => "Natural Gas",
            FuelType::Distillate => "Distillate",
            FuelType::Solar => "Solar",
            FuelType::OtherFuel => "Other",
        }
    }

    /// The key under which this fuel's branch is stored in the dataset for
    /// the given building class.
    pub fn dataset_key(&self, class: BuildingClass) -> &'static str {
        match (class, self) {
            (BuildingClass::Residential, FuelType::Electricity) => "electricity (grid)",
            (BuildingClass::Residential, FuelType::NaturalGas) => "natural gas",
            (BuildingClass::Residential, FuelType::Distillate) => "distillate",
            (BuildingClass::Residential, FuelType::Solar) => "electricity (on site)",
            (BuildingClass::Residential, FuelType::OtherFuel) => "other fuel",
            (BuildingClass::Commercial, FuelType::Electricity) => "electricity",
            (BuildingClass::Commercial, FuelType::NaturalGas) => "natural gas",
            (BuildingClass::Commercial, FuelType::Distillate) => "distillate",
            (BuildingClass::Commercial, fuel) => {
                panic!("fuel type {fuel:?} is not defined for commercial buildings")
            }
        }
    }

    pub fn from_key(class: BuildingClass, key: &str) -> Option<Self> {
        [
            FuelType::Electricity,
            FuelType::NaturalGas,
            FuelType::Distillate,
            FuelType::Solar,
            FuelType::OtherFuel,
        ]
        .into_iter()
        .find(|fuel| {
            !(class == BuildingClass::Commercial
                && matches!(fuel, FuelType::Solar | FuelType::OtherFuel))
                && fuel.dataset_key(class) == key
        })
    }
}

/// What further dimensions an end use requires once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Mode, then (Supply) fuel type and technology, or (Demand) technology
    /// only with the query looping every legal fuel type.
    Hvac,
    /// Fuel type only.
    FuelOnly,
    /// Fuel type, then technology from the fuel's equipment list.
    FuelPlusTech,
    /// Technology only, from an electricity-only device list.
    TechOnly,
    /// A single equipment subtype under the fixed electricity bucket
    /// (commercial MELs).
    SubtypeOnly,
    /// No further selection; the end use is queried directly.
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndUse {
    Heating,
    SecondaryHeating,
    Cooling,
    FansAndPumps,
    CeilingFan,
    Lighting,
    WaterHeating,
    Refrigeration,
    Cooking,
    Drying,
    HomeEntertainment,
    Computers,
    OtherLoads,
    Ventilation,
    Pcs,
    OfficeEquipment,
    Mels,
}

impl EndUse {
    /// The key under which this end use is stored in the dataset.
    pub fn key(&self) -> &'static str {
        match self {
            EndUse::Heating => "heating",
            EndUse::SecondaryHeating => "secondary heating",
            EndUse::Cooling => "cooling",
            EndUse::FansAndPumps => "fans & pumps",
            EndUse::CeilingFan => "ceiling fan",
            EndUse::Lighting => "lighting",
            EndUse::WaterHeating => "water heating",
            EndUse::Refrigeration => "refrigeration",
            EndUse::Cooking => "cooking",
            EndUse::Drying => "drying",
            EndUse::HomeEntertainment => "TVs",
            EndUse::Computers => "computers",
            EndUse::OtherLoads => "other",
            EndUse::Ventilation => "ventilation",
            EndUse::Pcs => "PCs",
            EndUse::OfficeEquipment => "non-PC office equipment",
            EndUse::Mels => "MELs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EndUse::Heating => "Heating",
            EndUse::SecondaryHeating => "Secondary Heating",
            EndUse::Cooling => "Cooling",
            EndUse::FansAndPumps => "Fans and Pumps",
            EndUse::CeilingFan => "Ceiling Fans",
            EndUse::Lighting => "Lighting",
            EndUse::WaterHeating => "Water Heating",
            EndUse::Refrigeration => "Refrigeration",
            EndUse::Cooking => "Cooking",
            EndUse::Drying => "Clothes Drying",
            EndUse::HomeEntertainment => "Home Entertainment",
            EndUse::Computers => "Computers",
            EndUse::OtherLoads => "Other",
            EndUse::Ventilation => "Ventilation",
            EndUse::Pcs => "PCs",
            EndUse::OfficeEquipment => "Non-PC Office Equipment",
            EndUse::Mels => "Miscellaneous Electric Loads",
        }
    }

    pub fn from_key(class: BuildingClass, key: &str) -> Option<Self> {
        end_uses(class).iter().copied().find(|eu| eu.key() == key)
    }

    /// The further dimensions this end use requires for the given class.
    ///
    /// Panics if the end use is not defined for the class.
    pub fn shape(&self, class: BuildingClass) -> Shape {
        use BuildingClass::*;
        use EndUse::*;
        match (class, *self) {
            (Residential, Heating | SecondaryHeating | Cooling) => Shape::Hvac,
            (Residential, WaterHeating | Cooking | Drying) => Shape::FuelOnly,
            (Residential, Lighting | HomeEntertainment | Computers | OtherLoads) => Shape::TechOnly,
            (Residential, FansAndPumps | CeilingFan | Refrigeration) => Shape::Direct,
            (Commercial, Heating | Cooling) => Shape::Hvac,
            (Commercial, Cooking) => Shape::FuelOnly,
            (Commercial, WaterHeating) => Shape::FuelPlusTech,
            (Commercial, Lighting | Ventilation | Refrigeration) => Shape::TechOnly,
            (Commercial, Pcs | OfficeEquipment) => Shape::Direct,
            (Commercial, Mels) => Shape::SubtypeOnly,
            (class, eu) => panic!("end use {eu:?} is not defined for {class:?} buildings"),
        }
    }

    /// The fuel types legal for this end use. For demand-mode HVAC queries
    /// this full list is looped over, not a single selected fuel.
    ///
    /// Panics for end uses whose shape has no fuel dimension.
    pub fn fuels(&self, class: BuildingClass) -> &'static [FuelType] {
        use BuildingClass::*;
        use EndUse::*;
        use FuelType::*;
        match (class, *self) {
            (Residential, Heating | SecondaryHeating) => {
                &[Electricity, NaturalGas, Distillate, OtherFuel]
            }
            (Residential, Cooling) => &[Electricity, NaturalGas],
            (Residential, WaterHeating) => {
                &[Electricity, NaturalGas, Distillate, Solar, OtherFuel]
            }
            (Residential, Cooking) => &[Electricity, NaturalGas, OtherFuel],
            (Residential, Drying) => &[Electricity, NaturalGas],
            (Commercial, Heating | WaterHeating) => &[Electricity, NaturalGas, Distillate],
            (Commercial, Cooling | Cooking) => &[Electricity, NaturalGas],
            (class, eu) => panic!("no fuel type list defined for {class:?} {}", eu.key()),
        }
    }
}

/// End uses offered for a building class, in display order.
pub fn end_uses(class: BuildingClass) -> &'static [EndUse] {
    match class {
        BuildingClass::Residential => residential::END_USES,
        BuildingClass::Commercial => commercial::END_USES,
    }
}

pub fn end_use_options(class: BuildingClass) -> Vec<Opt> {
    end_uses(class)
        .iter()
        .map(|eu| Opt::new(eu.label(), eu.key()))
        .collect()
}

pub fn building_types(class: BuildingClass) -> &'static [Opt] {
    match class {
        BuildingClass::Residential => residential::BUILDING_TYPES,
        BuildingClass::Commercial => commercial::BUILDING_TYPES,
    }
}

/// AIA climate zones, the dataset's top-level partition key.
pub fn climate_zones() -> &'static [Opt] {
    const CLIMATE_ZONES: &[Opt] = &[
        Opt::new("AIA Climate Zone 1", "AIA_CZ1"),
        Opt::new("AIA Climate Zone 2", "AIA_CZ2"),
        Opt::new("AIA Climate Zone 3", "AIA_CZ3"),
        Opt::new("AIA Climate Zone 4", "AIA_CZ4"),
        Opt::new("AIA Climate Zone 5", "AIA_CZ5"),
    ];
    CLIMATE_ZONES
}

/// Projection year selected when the calculator loads.
pub const DEFAULT_YEAR: u16 = 2030;
/// Last projection year available in the underlying datasets.
pub const MAX_YEAR: u16 = 2040;

/// Years offered by the projection-year control, from the caller's baseline
/// year through [`MAX_YEAR`].
pub fn year_options(baseline_year: u16) -> Vec<u16> {
    (baseline_year..=MAX_YEAR).collect()
}

pub fn fuel_options(class: BuildingClass, end_use: EndUse) -> Vec<Opt> {
    end_use
        .fuels(class)
        .iter()
        .map(|fuel| Opt::new(fuel.label(), fuel.dataset_key(class)))
        .collect()
}

/// Equipment options for an HVAC or fuel-plus-technology end use, scoped to
/// the selected fuel type.
///
/// Residential secondary heating is the special case: only "other fuel" has
/// an explicit equipment list; every other fuel collapses to the single
/// sentinel `non-specific`.
pub fn equipment_options(class: BuildingClass, end_use: EndUse, fuel: FuelType) -> Vec<Opt> {
    use BuildingClass::*;
    use EndUse::*;
    match (class, end_use) {
        (Residential, Heating) => match fuel {
            FuelType::Electricity => pick(residential::HEATING_EQUIP, residential::HEATING_EQUIP_EL),
            FuelType::NaturalGas => pick(residential::HEATING_EQUIP, residential::HEATING_EQUIP_NG),
            FuelType::Distillate => pick(residential::HEATING_EQUIP, residential::HEATING_EQUIP_DS),
            FuelType::OtherFuel => pick(residential::HEATING_EQUIP, residential::HEATING_EQUIP_OT),
            FuelType::Solar => panic!("no heating equipment list defined for solar"),
        },
        (Residential, SecondaryHeating) => match fuel {
            FuelType::OtherFuel => residential::SEC_HEATING_EQUIP.to_vec(),
            FuelType::Solar => panic!("no secondary heating equipment list defined for solar"),
            _ => vec![residential::NON_SPECIFIC],
        },
        (Residential, Cooling) => match fuel {
            FuelType::Electricity => pick(residential::COOLING_EQUIP, residential::COOLING_EQUIP_EL),
            FuelType::NaturalGas => pick(residential::COOLING_EQUIP, residential::COOLING_EQUIP_NG),
            fuel => panic!("no cooling equipment list defined for {fuel:?}"),
        },
        (Commercial, Heating) => match fuel {
            FuelType::Electricity => pick(commercial::HEATING_EQUIP, commercial::HEATING_EQUIP_EL),
            FuelType::NaturalGas => pick(commercial::HEATING_EQUIP, commercial::HEATING_EQUIP_NG),
            FuelType::Distillate => pick(commercial::HEATING_EQUIP, commercial::HEATING_EQUIP_DS),
            fuel => panic!("no commercial heating equipment list defined for {fuel:?}"),
        },
        (Commercial, Cooling) => match fuel {
            FuelType::Electricity => pick(commercial::COOLING_EQUIP, commercial::COOLING_EQUIP_EL),
            FuelType::NaturalGas => pick(commercial::COOLING_EQUIP, commercial::COOLING_EQUIP_NG),
            fuel => panic!("no commercial cooling equipment list defined for {fuel:?}"),
        },
        (Commercial, WaterHeating) => match fuel {
            FuelType::Electricity => pick(commercial::WATER_HEATING_EQUIP, commercial::WATER_HEATING_EQUIP_EL),
            FuelType::NaturalGas => pick(commercial::WATER_HEATING_EQUIP, commercial::WATER_HEATING_EQUIP_NG),
            FuelType::Distillate => pick(commercial::WATER_HEATING_EQUIP, commercial::WATER_HEATING_EQUIP_DS),
            fuel => panic!("no commercial water heating equipment list defined for {fuel:?}"),
        },
        (class, eu) => panic!("no equipment list defined for {class:?} {}", eu.key()),
    }
}

/// Envelope (demand) technology options for HVAC end uses.
pub fn envelope_options(class: BuildingClass) -> &'static [Opt] {
    match class {
        BuildingClass::Residential => residential::ENVELOPE,
        BuildingClass::Commercial => commercial::ENVELOPE,
    }
}

/// Device options for technology-only end uses.
pub fn technology_options(class: BuildingClass, end_use: EndUse) -> &'static [Opt] {
    use BuildingClass::*;
    use EndUse::*;
    match (class, end_use) {
        (Residential, Lighting) => residential::LIGHTING,
        (Residential, HomeEntertainment) => residential::ENTERTAINMENT,
        (Residential, Computers) => residential::COMPUTERS,
        (Residential, OtherLoads) => residential::OTHER_LOADS,
        (Commercial, Lighting) => commercial::LIGHTING_GROUPS,
        (Commercial, Ventilation) => commercial::VENTILATION,
        (Commercial, Refrigeration) => commercial::REFRIGERATION,
        (class, eu) => panic!("no technology list defined for {class:?} {}", eu.key()),
    }
}

/// Subtype options for the commercial MELs end use.
pub fn mel_subtype_options() -> &'static [Opt] {
    commercial::MEL_SUBTYPES
}

/// The raw dataset item keys a commercial lighting technology group expands
/// into. Returns `None` for a key that is not a lighting group.
pub fn lighting_group_items(group_key: &str) -> Option<&'static [&'static str]> {
    commercial::LIGHTING_ITEMS
        .iter()
        .find(|(group, _)| *group == group_key)
        .map(|(_, items)| *items)
}

/// Options for the next dimension required by the end use's shape, given the
/// selections made so far. Returns `None` once the shape is satisfied.
///
/// Panics when called with a selection the shape does not admit, e.g. a mode
/// for a fuel-only end use. The cascade controller only issues legal calls.
pub fn options_for(
    class: BuildingClass,
    end_use: EndUse,
    mode: Option<Mode>,
    fuel: Option<FuelType>,
) -> Option<Vec<Opt>> {
    match end_use.shape(class) {
        Shape::Hvac => match (mode, fuel) {
            (None, None) => Some(MODE_OPTIONS.to_vec()),
            (Some(Mode::Demand), None) => Some(envelope_options(class).to_vec()),
            (Some(Mode::Supply), None) => Some(fuel_options(class, end_use)),
            (Some(Mode::Supply), Some(fuel)) => Some(equipment_options(class, end_use, fuel)),
            (mode, fuel) => panic!(
                "no option mapping for {class:?} {} with mode {mode:?} and fuel {fuel:?}",
                end_use.key()
            ),
        },
        Shape::FuelOnly => {
            assert!(mode.is_none(), "{} takes no mode", end_use.key());
            match fuel {
                None => Some(fuel_options(class, end_use)),
                Some(_) => None,
            }
        }
        Shape::FuelPlusTech => {
            assert!(mode.is_none(), "{} takes no mode", end_use.key());
            match fuel {
                None => Some(fuel_options(class, end_use)),
                Some(fuel) => Some(equipment_options(class, end_use, fuel)),
            }
        }
        Shape::TechOnly => {
            assert!(
                mode.is_none() && fuel.is_none(),
                "{} takes neither mode nor fuel",
                end_use.key()
            );
            Some(technology_options(class, end_use).to_vec())
        }
        Shape::SubtypeOnly => {
            assert!(
                mode.is_none() && fuel.is_none(),
                "{} takes neither mode nor fuel",
                end_use.key()
            );
            Some(mel_subtype_options().to_vec())
        }
        Shape::Direct => {
            assert!(
                mode.is_none() && fuel.is_none(),
                "{} takes no further selection",
                end_use.key()
            );
            None
        }
    }
}
