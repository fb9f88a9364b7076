//! # Calculator Constants
//!
//! Physical and financial assumptions behind the sizing pipeline.
//!
//! These values are fixed at compile time and cannot be edited through the
//! CMS. They live in an immutable [`CalculatorConstants`] value that is
//! handed to [`crate::SolarCalculator`] by reference, so no part of the
//! crate reads hidden global state.
//!
//! ```text
//! ┌──────────────────────────┬───────────┬──────────────────────────────┐
//! │ Constant                 │ Value     │ Meaning                      │
//! ├──────────────────────────┼───────────┼──────────────────────────────┤
//! │ electricity_rate         │ 4.5       │ THB per kWh (Thai average)   │
//! │ solar_cost_per_kw        │ 45,000    │ THB per kW installed         │
//! │ peak_sun_hours           │ 4.5       │ hours/day (Thai average)     │
//! │ system_efficiency        │ 0.85      │ inverter + wiring losses     │
//! │ days_per_month           │ 30        │ no calendar-aware counting   │
//! │ location multipliers     │ 1.0/1.2/1.5 │ res / com / ind            │
//! └──────────────────────────┴───────────┴──────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::types::LocationType;

/// Upper sanity bound on the monthly bill (THB). Catches unit-entry mistakes.
pub const MAX_MONTHLY_BILL: f64 = 1_000_000.0;

/// Inclusive bounds of the day/night ratio (percent).
pub const DAY_NIGHT_RATIO_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

// =============================================================================
// Location Multipliers
// =============================================================================

/// Capacity margin per installation category.
///
/// Commercial and industrial sites get a larger margin for shading and load
/// variability. This is a pricing simplification, not derived from load data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct LocationMultipliers {
    pub residential: f64,
    pub commercial: f64,
    pub industrial: f64,
}

impl LocationMultipliers {
    /// Multiplier for a location.
    ///
    /// A new `LocationType` variant fails to compile here until it gets a
    /// multiplier.
    #[inline]
    pub const fn for_location(&self, location: LocationType) -> f64 {
        match location {
            LocationType::Residential => self.residential,
            LocationType::Commercial => self.commercial,
            LocationType::Industrial => self.industrial,
        }
    }
}

// =============================================================================
// Calculator Constants
// =============================================================================

/// Fixed assumptions used by the sizing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConstants {
    /// THB per kWh.
    pub electricity_rate: f64,

    /// THB per kW installed.
    pub solar_cost_per_kw: f64,

    /// Hours per day at standard irradiance.
    pub peak_sun_hours: f64,

    /// Fraction of generated energy actually delivered (0-1).
    pub system_efficiency: f64,

    /// Days in a billing month.
    pub days_per_month: f64,

    pub location_multipliers: LocationMultipliers,
}

impl CalculatorConstants {
    /// The storefront's published assumptions.
    pub const STANDARD: CalculatorConstants = CalculatorConstants {
        electricity_rate: 4.5,
        solar_cost_per_kw: 45_000.0,
        peak_sun_hours: 4.5,
        system_efficiency: 0.85,
        days_per_month: 30.0,
        location_multipliers: LocationMultipliers {
            residential: 1.0,
            commercial: 1.2,
            industrial: 1.5,
        },
    };

    /// kWh produced per day by 1 kW of panels.
    #[inline]
    pub fn daily_yield_per_kw(&self) -> f64 {
        self.peak_sun_hours * self.system_efficiency
    }
}

impl Default for CalculatorConstants {
    fn default() -> Self {
        CalculatorConstants::STANDARD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
