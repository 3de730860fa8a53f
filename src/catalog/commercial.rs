//! Commercial dimension tables.

use super::{EndUse, Opt};

pub(crate) const BUILDING_TYPES: &[Opt] = &[
    Opt::new("Assembly", "assembly"),
    Opt::new("Education", "education"),
    Opt::new("Food Sales", "food sales"),
    Opt::new("Food Service", "food service"),
    Opt::new("Health Care", "health care"),
    Opt::new("Lodging", "lodging"),
    Opt::new("Large Office", "large office"),
    Opt::new("Small Office", "small office"),
    Opt::new("Mercantile/Service", "mercantile/service"),
    Opt::new("Warehouse", "warehouse"),
    Opt::new("Other", "other"),
];

pub(crate) const END_USES: &[EndUse] = &[
    EndUse::Heating,
    EndUse::Ventilation,
    EndUse::Cooling,
    EndUse::WaterHeating,
    EndUse::Lighting,
    EndUse::Cooking,
    EndUse::Refrigeration,
    EndUse::Pcs,
    EndUse::OfficeEquipment,
    EndUse::Mels,
];

pub(crate) const HEATING_EQUIP: &[Opt] = &[
    Opt::new("Electric Boiler", "elec_boiler"),
    Opt::new("Rooftop Heat Pump", "rooftop_ASHP-heat"),
    Opt::new("Ground-Source Heat Pump", "comm_GSHP-heat"),
    Opt::new("Gas Boiler", "gas_boiler"),
    Opt::new("Gas Furnace", "gas_furnace"),
    Opt::new("Gas Heat Pump", "gas_eng-driven_RTHP-heat"),
    Opt::new("Oil Boiler", "oil_boiler"),
    Opt::new("Oil Furnace", "oil_furnace"),
];
pub(crate) const HEATING_EQUIP_EL: &[usize] = &[0, 1, 2];
pub(crate) const HEATING_EQUIP_NG: &[usize] = &[3, 4, 5];
pub(crate) const HEATING_EQUIP_DS: &[usize] = &[6, 7];

pub(crate) const COOLING_EQUIP: &[Opt] = &[
    Opt::new("Rooftop AC", "rooftop_AC"),
    Opt::new("Reciprocating Chiller", "reciprocating_chiller"),
    Opt::new("Centrifugal Chiller", "centrifugal_chiller"),
    Opt::new("Scroll Chiller", "scroll_chiller"),
    Opt::new("Ground-Source Heat Pump", "comm_GSHP-cool"),
    Opt::new("Gas Engine-Driven Rooftop AC", "gas_eng-driven_RTAC"),
    Opt::new("Gas Absorption Chiller", "gas_chiller"),
];
pub(crate) const COOLING_EQUIP_EL: &[usize] = &[0, 1, 2, 3, 4];
pub(crate) const COOLING_EQUIP_NG: &[usize] = &[5, 6];

pub(crate) const WATER_HEATING_EQUIP: &[Opt] = &[
    Opt::new("Electric Resistance", "elec_water_heater"),
    Opt::new("Heat Pump Water Heater", "HP_water_heater"),
    Opt::new("Gas Water Heater", "gas_water_heater"),
    Opt::new("Gas Instantaneous", "gas_instantaneous_WH"),
    Opt::new("Oil Water Heater", "oil_water_heater"),
];
pub(crate) const WATER_HEATING_EQUIP_EL: &[usize] = &[0, 1];
pub(crate) const WATER_HEATING_EQUIP_NG: &[usize] = &[2, 3];
pub(crate) const WATER_HEATING_EQUIP_DS: &[usize] = &[4];

pub(crate) const ENVELOPE: &[Opt] = &[
    Opt::new("Windows (Conduction)", "windows conduction"),
    Opt::new("Windows (Radiation)", "windows solar"),
    Opt::new("Walls", "wall"),
    Opt::new("Roof", "roof"),
    Opt::new("Floor", "floor"),
    Opt::new("Infiltration", "infiltration"),
    Opt::new("Ventilation", "ventilation"),
];

pub(crate) const VENTILATION: &[Opt] = &[
    Opt::new("Constant Air Volume", "CAV_Vent"),
    Opt::new("Variable Air Volume", "VAV_Vent"),
];

pub(crate) const REFRIGERATION: &[Opt] = &[
    Opt::new("Supermarket Display Case", "Supermkt_display_case"),
    Opt::new("Supermarket Walk-In", "Supermkt_walk-in_refrig"),
    Opt::new("Supermarket Compressor Rack", "Supermkt_compressor_rack"),
    Opt::new("Reach-In Refrigerator", "Reach-in_refrig"),
    Opt::new("Reach-In Freezer", "Reach-in_freezer"),
    Opt::new("Ice Machine", "Ice_machine"),
    Opt::new("Vending Machine", "Vend_Machine"),
];

// Lighting selections are groups, not raw dataset items. Each group expands
// through LIGHTING_ITEMS into the concrete lamp/fixture keys that are summed
// individually.
pub(crate) const LIGHTING_GROUPS: &[Opt] = &[
    Opt::new("General Service", "general service"),
    Opt::new("Linear Fluorescent", "linear fluorescent"),
    Opt::new("Reflector", "reflector"),
    Opt::new("High-Intensity Discharge", "high-intensity discharge"),
];

pub(crate) const LIGHTING_ITEMS: &[(&str, &[&str])] = &[
    (
        "general service",
        &[
            "100W A19 Incandescent",
            "100W Equivalent A19 Halogen",
            "100W Equivalent CFL Bare Spiral",
            "100W Equivalent LED A Lamp",
        ],
    ),
    ("linear fluorescent", &["T5 F28", "T8 F28", "T8 F32", "T8 F96"]),
    (
        "reflector",
        &[
            "Halogen PAR38",
            "Halogen Infrared Reflector (HIR) PAR38",
            "LED PAR38",
        ],
    ),
    (
        "high-intensity discharge",
        &["Mercury Vapor", "Metal Halide", "Sodium Vapor"],
    ),
];

pub(crate) const MEL_SUBTYPES: &[Opt] = &[
    Opt::new("Distribution Transformers", "distribution transformers"),
    Opt::new("Security Systems", "security systems"),
    Opt::new("Elevators", "elevators"),
    Opt::new("Escalators", "escalators"),
    Opt::new("Non-Road Electric Vehicles", "non-road electric vehicles"),
    Opt::new("Coffee Brewers", "coffee brewers"),
    Opt::new("Kitchen Ventilation", "kitchen ventilation"),
    Opt::new("Laundry", "laundry"),
    Opt::new("Lab Fridges and Freezers", "lab fridges and freezers"),
    Opt::new("Fume Hoods", "fume hoods"),
    Opt::new("Medical Imaging", "medical imaging"),
    Opt::new("Video Displays", "video displays"),
    Opt::new("Large Video Displays", "large video displays"),
    Opt::new("Municipal Water Services", "municipal water services"),
];
