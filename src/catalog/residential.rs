//! Residential dimension tables.

use super::{EndUse, Opt};

pub(crate) const BUILDING_TYPES: &[Opt] = &[
    Opt::new("Single Family Homes", "single family home"),
    Opt::new("Multi Family Homes", "multi family home"),
    Opt::new("Mobile Homes", "mobile home"),
];

pub(crate) const END_USES: &[EndUse] = &[
    EndUse::Heating,
    EndUse::SecondaryHeating,
    EndUse::Cooling,
    EndUse::FansAndPumps,
    EndUse::CeilingFan,
    EndUse::Lighting,
    EndUse::WaterHeating,
    EndUse::Refrigeration,
    EndUse::Cooking,
    EndUse::Drying,
    EndUse::HomeEntertainment,
    EndUse::Computers,
    EndUse::OtherLoads,
];

// Heating equipment is one master list partitioned into fuel-specific
// sub-lists by index set.
pub(crate) const HEATING_EQUIP: &[Opt] = &[
    Opt::new("Boiler", "boiler (electric)"),
    Opt::new("Air-Source Heat Pump", "ASHP"),
    Opt::new("Ground-Source Heat Pump", "GSHP"),
    Opt::new("Furnace", "furnace (NG)"),
    Opt::new("Boiler", "boiler (NG)"),
    Opt::new("Heat Pump", "NGHP"),
    Opt::new("Furnace", "furnace (distillate)"),
    Opt::new("Boiler", "boiler (distillate)"),
    Opt::new("Furnace (Kerosene)", "furnace (kerosene)"),
    Opt::new("Furnace (LPG)", "furnace (LPG)"),
    Opt::new("Wood Stove", "stove (wood)"),
    Opt::new("Resistance", "resistance"),
];
pub(crate) const HEATING_EQUIP_EL: &[usize] = &[0, 1, 2];
pub(crate) const HEATING_EQUIP_NG: &[usize] = &[3, 4, 5];
pub(crate) const HEATING_EQUIP_DS: &[usize] = &[6, 7];
pub(crate) const HEATING_EQUIP_OT: &[usize] = &[8, 9, 10, 11];

// For every fuel type except "other fuel" the secondary heating equipment is
// the single sentinel below.
pub(crate) const SEC_HEATING_EQUIP: &[Opt] = &[
    Opt::new("Kerosene Heater", "secondary heating (kerosene)"),
    Opt::new("Wood Heater", "secondary heating (wood)"),
    Opt::new("LPG Heater", "secondary heating (LPG)"),
    Opt::new("Coal Heater", "secondary heating (coal)"),
];
pub(crate) const NON_SPECIFIC: Opt = Opt::new("Non-Specific", "non-specific");

pub(crate) const COOLING_EQUIP: &[Opt] = &[
    Opt::new("Central AC", "central AC"),
    Opt::new("Room/Window AC", "room AC"),
    Opt::new("Air-Source Heat Pump", "ASHP"),
    Opt::new("Ground-Source Heat Pump", "GSHP"),
    Opt::new("Heat Pump", "NGHP"),
];
pub(crate) const COOLING_EQUIP_EL: &[usize] = &[0, 1, 2, 3];
pub(crate) const COOLING_EQUIP_NG: &[usize] = &[4];

pub(crate) const ENVELOPE: &[Opt] = &[
    Opt::new("Windows (Conduction)", "windows conduction"),
    Opt::new("Windows (Radiation)", "windows solar"),
    Opt::new("Walls", "wall"),
    Opt::new("Roof", "roof"),
    Opt::new("Ground", "ground"),
    Opt::new("Infiltration", "infiltration"),
];

pub(crate) const LIGHTING: &[Opt] = &[
    Opt::new("General Service Lamp", "general service"),
    Opt::new("Linear Fluorescent", "linear fluorescent"),
    Opt::new("Reflector", "reflector"),
    Opt::new("External/Outdoor Lighting", "external"),
];

pub(crate) const ENTERTAINMENT: &[Opt] = &[
    Opt::new("TVs", "TV"),
    Opt::new("Set-top Boxes", "set top box"),
    Opt::new("DVD Players", "DVD"),
    Opt::new("Home Theater Systems", "home theater & audio"),
    Opt::new("Video Game Systems", "video game consoles"),
];

pub(crate) const COMPUTERS: &[Opt] = &[
    Opt::new("Desktops", "desktop PC"),
    Opt::new("Laptops", "laptop PC"),
    Opt::new("Monitors/Displays", "monitors"),
    Opt::new("Network Equipment", "network equipment"),
];

pub(crate) const OTHER_LOADS: &[Opt] = &[
    Opt::new("Clothes Washing", "clothes washing"),
    Opt::new("Dishwashers", "dishwasher"),
    Opt::new("Freezers", "freezers"),
    Opt::new("Other Electric Loads", "other MELs"),
];

/// Sub-keys occupying the technology slot of the water heating path.
/// Electric and solar water heating are both stored under the grid
/// electricity branch, distinguished by these keys.
pub(crate) const ELECTRIC_WH: &str = "electric WH";
pub(crate) const SOLAR_WH: &str = "solar WH";
