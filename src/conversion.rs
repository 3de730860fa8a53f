//! Site-to-source energy and CO2 intensity conversion factors.
//!
//! Loaded once from the external conversions JSON and read-only afterwards.
//! The wire shape is keyed by fuel name, each fuel carrying a
//! `"site to source conversion"` series and a `"CO2 intensity"` series
//! mapped from year to factor. Electricity's CO2 intensity varies by year
//! with the projected grid mix; the other series are looked up by year all
//! the same, for uniformity.

use crate::catalog::{BuildingClass, FuelType};
use crate::errors::{CalcError, CalcResult};
use serde::Deserialize;
use std::collections::HashMap;

const SERIES_ELECTRICITY: &str = "electricity (grid)";
const SERIES_NATURAL_GAS: &str = "natural gas";
const SERIES_OTHER: &str = "other";

#[derive(Debug, Clone, Deserialize)]
struct FuelSeries {
    #[serde(rename = "site to source conversion")]
    site_to_source: HashMap<String, f64>,
    #[serde(rename = "CO2 intensity")]
    co2_intensity: HashMap<String, f64>,
}

/// Per-fuel, per-year conversion factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ConversionTable {
    fuels: HashMap<String, FuelSeries>,
}

impl ConversionTable {
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Site-to-source conversion factor for the fuel in the given year.
    ///
    /// Electricity converts through the grid series. In the commercial
    /// schema every other fuel is already primary energy, factor 1. In the
    /// residential schema natural gas has its own series and the remaining
    /// combustion fuels share the "other" series. On-site solar has no
    /// upstream component, factor 1.
    pub fn primary_energy(
        &self,
        class: BuildingClass,
        fuel: FuelType,
        year: u16,
    ) -> CalcResult<f64> {
        match (class, fuel) {
            (_, FuelType::Solar) => Ok(1.0),
            (BuildingClass::Commercial, fuel) if fuel != FuelType::Electricity => Ok(1.0),
            (_, fuel) => {
                let series = self.series(series_name(fuel), fuel, year)?;
                lookup_year(&series.site_to_source, "site to source conversion", fuel, year)
            }
        }
    }

    /// CO2 intensity factor (million metric tons per unit of primary
    /// energy) for the fuel in the given year.
    ///
    /// Electricity and natural gas have dedicated series; every other fuel
    /// shares the "other" series. On-site solar emits nothing, factor 0.
    pub fn co2_intensity(
        &self,
        _class: BuildingClass,
        fuel: FuelType,
        year: u16,
    ) -> CalcResult<f64> {
        match fuel {
            FuelType::Solar => Ok(0.0),
            fuel => {
                let series = self.series(series_name(fuel), fuel, year)?;
                lookup_year(&series.co2_intensity, "CO2 intensity", fuel, year)
            }
        }
    }

    fn series(&self, name: &str, fuel: FuelType, year: u16) -> CalcResult<&FuelSeries> {
        self.fuels
            .get(name)
            .ok_or_else(|| CalcError::ConversionMissing {
                fuel: fuel.label().to_string(),
                series: "conversion",
                year,
            })
    }
}

fn series_name(fuel: FuelType) -> &'static str {
    match fuel {
        FuelType::Electricity => SERIES_ELECTRICITY,
        FuelType::NaturalGas => SERIES_NATURAL_GAS,
        _ => SERIES_OTHER,
    }
}

fn lookup_year(
    series: &HashMap<String, f64>,
    name: &'static str,
    fuel: FuelType,
    year: u16,
) -> CalcResult<f64> {
    series
        .get(&year.to_string())
        .copied()
        .ok_or_else(|| CalcError::ConversionMissing {
            fuel: fuel.label().to_string(),
            series: name,
            year,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ConversionTable {
        ConversionTable::from_json_str(
            r#"{
                "electricity (grid)": {
                    "site to source conversion": {"2030": 3.0},
                    "CO2 intensity": {"2030": 0.5}
                },
                "natural gas": {
                    "site to source conversion": {"2030": 1.09},
                    "CO2 intensity": {"2030": 0.053}
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
    fn electricity_uses_the_grid_series_in_both_classes() {
        let table = table();
        for class in [BuildingClass::Residential, BuildingClass::Commercial] {
            assert_eq!(
                table
                    .primary_energy(class, FuelType::Electricity, 2030)
                    .unwrap(),
                3.0
            );
            assert_eq!(
                table
                    .co2_intensity(class, FuelType::Electricity, 2030)
                    .unwrap(),
                0.5
            );
        }
    }

    #[test]
    fn commercial_non_electric_fuels_are_already_primary() {
        let table = table();
        for fuel in [FuelType::NaturalGas, FuelType::Distillate] {
            assert_eq!(
                table
                    .primary_energy(BuildingClass::Commercial, fuel, 2030)
                    .unwrap(),
                1.0
            );
        }
        // The CO2 series still applies.
        assert_eq!(
            table
                .co2_intensity(BuildingClass::Commercial, FuelType::NaturalGas, 2030)
                .unwrap(),
            0.053
        );
    }

    #[test]
    fn residential_combustion_fuels_share_the_other_series() {
        let table = table();
        for fuel in [FuelType::Distillate, FuelType::OtherFuel] {
            assert_eq!(
                table
                    .primary_energy(BuildingClass::Residential, fuel, 2030)
                    .unwrap(),
                1.0
            );
            assert_eq!(
                table
                    .co2_intensity(BuildingClass::Residential, fuel, 2030)
                    .unwrap(),
                0.07
            );
        }
    }

    #[test]
    fn solar_converts_at_unity_and_emits_nothing() {
        let table = table();
        assert_eq!(
            table
                .primary_energy(BuildingClass::Residential, FuelType::Solar, 2030)
                .unwrap(),
            1.0
        );
        assert_eq!(
            table
                .co2_intensity(BuildingClass::Residential, FuelType::Solar, 2030)
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn missing_year_is_reported() {
        let err = table()
            .primary_energy(BuildingClass::Residential, FuelType::Electricity, 2041)
            .unwrap_err();
        assert!(matches!(err, CalcError::ConversionMissing { year: 2041, .. }));
    }
}
