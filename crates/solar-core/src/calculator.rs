//! # Sizing Calculator
//!
//! Turns a monthly bill and usage profile into a system recommendation.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  monthly bill (THB)                                                     │
//! │       │ ÷ electricity rate                                              │
//! │       ▼                                                                 │
//! │  monthly kWh ── ÷ 30 ──► daily kWh ── × day ratio ──► offsettable kWh   │
//! │                                                            │            │
//! │                          ÷ (peak sun hours × efficiency)   │            │
//! │                                                            ▼            │
//! │  raw kW ── × location multiplier ──► adjusted kW ── ceil 0.1 ──► kW     │
//! │                                                                  │      │
//! │       ┌──────────────────────────────────────────────────────────┤      │
//! │       ▼                                                          ▼      │
//! │  cost = kW × cost/kW                 generation = kW × sun × eff        │
//! │       │                              savings = generation × 30 × rate   │
//! │       └──────────────► payback = cost ÷ (savings × 12) ◄──────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Capacity is always rounded **up**: under-sizing an installation is worse
//! than over-sizing it by a fraction of a kilowatt. Savings are recomputed
//! from the rounded capacity so they match what is actually quoted.

use crate::constants::CalculatorConstants;
use crate::error::CoreResult;
use crate::types::{CalculatorInput, CalculatorRequest, CalculatorResult};

/// Intermediate values of one sizing run, kept for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingBreakdown {
    pub monthly_consumption_kwh: f64,
    pub daily_consumption_kwh: f64,
    pub offsettable_daily_kwh: f64,
    pub raw_capacity_kw: f64,
    pub adjusted_capacity_kw: f64,
    pub recommended_capacity_kw: f64,
    pub daily_generation_kwh: f64,
}

/// Runs the sizing pipeline against a fixed set of constants.
///
/// Holds no mutable state; share one instance freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarCalculator {
    constants: CalculatorConstants,
}

impl SolarCalculator {
    /// Calculator using the given constants.
    pub const fn new(constants: CalculatorConstants) -> Self {
        SolarCalculator { constants }
    }

    /// Calculator using [`CalculatorConstants::STANDARD`].
    pub const fn standard() -> Self {
        SolarCalculator::new(CalculatorConstants::STANDARD)
    }

    #[inline]
    pub fn constants(&self) -> &CalculatorConstants {
        &self.constants
    }

    /// Validates a raw request, then sizes it.
    ///
    /// ## Errors
    /// `CoreError::InvalidInput` with every violated rule when the request
    /// does not pass [`crate::validate_calculator_input`].
    ///
    /// ## Example
    /// ```rust
    /// use solar_core::{CalculatorRequest, CoreError, SolarCalculator};
    ///
    /// let request = CalculatorRequest {
    ///     location_type: "residential".to_string(),
    ///     monthly_bill: -100.0,
    ///     electric_system: "single-phase".to_string(),
    ///     day_night_ratio: 50.0,
    /// };
    ///
    /// let err = SolarCalculator::standard().calculate_request(&request).unwrap_err();
    /// assert!(matches!(err, CoreError::InvalidInput(_)));
    /// assert!(err.to_string().starts_with("Invalid input"));
    /// ```
    pub fn calculate_request(&self, request: &CalculatorRequest) -> CoreResult<CalculatorResult> {
        let input = CalculatorInput::try_from(request)?;
        Ok(self.calculate(&input))
    }

    /// Sizes a validated input.
    pub fn calculate(&self, input: &CalculatorInput) -> CalculatorResult {
        let breakdown = self.breakdown(input);
        let c = &self.constants;

        let estimated_cost = (breakdown.recommended_capacity_kw * c.solar_cost_per_kw).round();
        let monthly_savings =
            (breakdown.daily_generation_kwh * c.days_per_month * c.electricity_rate).round();

        let payback_period = if monthly_savings > 0.0 {
            Some(round_to_tenth(estimated_cost / (monthly_savings * 12.0)))
        } else {
            None
        };

        CalculatorResult {
            recommended_capacity: round_to_tenth(breakdown.recommended_capacity_kw),
            estimated_cost: estimated_cost as i64,
            payback_period,
            monthly_savings: monthly_savings as i64,
        }
    }

    /// Energy and capacity figures for a validated input, before any
    /// currency rounding.
    pub fn breakdown(&self, input: &CalculatorInput) -> SizingBreakdown {
        let c = &self.constants;

        let monthly_consumption_kwh = input.monthly_bill() / c.electricity_rate;
        let daily_consumption_kwh = monthly_consumption_kwh / c.days_per_month;
        // Only daytime usage can be displaced by an unbatteried system
        let offsettable_daily_kwh = daily_consumption_kwh * (input.day_night_ratio() / 100.0);
        let raw_capacity_kw = offsettable_daily_kwh / c.daily_yield_per_kw();
        let adjusted_capacity_kw =
            raw_capacity_kw * c.location_multipliers.for_location(input.location_type());
        let recommended_capacity_kw = ceil_to_tenth(adjusted_capacity_kw);
        let daily_generation_kwh = recommended_capacity_kw * c.peak_sun_hours * c.system_efficiency;

        SizingBreakdown {
            monthly_consumption_kwh,
            daily_consumption_kwh,
            offsettable_daily_kwh,
            raw_capacity_kw,
            adjusted_capacity_kw,
            recommended_capacity_kw,
            daily_generation_kwh,
        }
    }
}

/// Validates and sizes a request with the standard constants.
pub fn calculate_solar_system(request: &CalculatorRequest) -> CoreResult<CalculatorResult> {
    SolarCalculator::standard().calculate_request(request)
}

#[inline]
fn ceil_to_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{ElectricSystem, LocationType};

    fn input(location: LocationType, bill: f64, ratio: f64) -> CalculatorInput {
        CalculatorInput::new(location, bill, ElectricSystem::SinglePhase, ratio).unwrap()
    }

    fn calculator() -> SolarCalculator {
        SolarCalculator::standard()
    }

    #[test]
    fn test_reference_scenario() {
        let request = CalculatorRequest::new(
            LocationType::Residential,
            3000.0,
            ElectricSystem::SinglePhase,
            60.0,
        );
        let result = calculate_solar_system(&request).unwrap();

        // 3000 / 4.5 / 30 × 0.6 / 3.825 = 3.4858 kW → 3.5 kW
        assert_eq!(result.recommended_capacity, 3.5);
        assert_eq!(result.estimated_cost, 157_500);
        // 3.5 × 3.825 × 30 × 4.5 = 1807.3
        assert!((result.monthly_savings - 1808).abs() <= 1);
        assert_eq!(result.payback_period, Some(7.3));
    }

    #[test]
    fn test_breakdown_follows_formula() {
        let b = calculator().breakdown(&input(LocationType::Residential, 3000.0, 60.0));
        assert!((b.monthly_consumption_kwh - 666.6667).abs() < 1e-3);
        assert!((b.daily_consumption_kwh - 22.2222).abs() < 1e-3);
        assert!((b.offsettable_daily_kwh - 13.3333).abs() < 1e-3);
        assert!((b.raw_capacity_kw - 3.4858).abs() < 1e-3);
        assert_eq!(b.adjusted_capacity_kw, b.raw_capacity_kw);
        assert_eq!(b.recommended_capacity_kw, 3.5);
    }

    #[test]
    fn test_location_multipliers_are_monotonic() {
        let residential = calculator().calculate(&input(LocationType::Residential, 5000.0, 60.0));
        let commercial = calculator().calculate(&input(LocationType::Commercial, 5000.0, 60.0));
        let industrial = calculator().calculate(&input(LocationType::Industrial, 5000.0, 60.0));

        assert!(commercial.recommended_capacity > residential.recommended_capacity);
        assert!(industrial.recommended_capacity > commercial.recommended_capacity);
    }

    #[test]
    fn test_capacity_is_ceiling_to_tenth() {
        for bill in [1.0, 999.0, 3333.0, 12_345.0, 987_654.0] {
            for ratio in [5.0, 33.0, 55.0, 100.0] {
                for location in LocationType::ALL {
                    let i = input(location, bill, ratio);
                    let b = calculator().breakdown(&i);
                    let r = calculator().calculate(&i);

                    assert!(r.recommended_capacity >= b.adjusted_capacity_kw - 1e-9);
                    assert!(r.recommended_capacity - b.adjusted_capacity_kw < 0.1 + 1e-9);
                    let tenths = r.recommended_capacity * 10.0;
                    assert!((tenths - tenths.round()).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_savings_match_recommended_capacity() {
        let c = CalculatorConstants::STANDARD;
        for bill in [1500.0, 5000.0, 48_000.0] {
            let r = calculator().calculate(&input(LocationType::Commercial, bill, 70.0));
            let generation = r.recommended_capacity * c.peak_sun_hours * c.system_efficiency;
            let savings = (generation * 30.0 * c.electricity_rate).round() as i64;
            assert_eq!(r.monthly_savings, savings);
        }
    }

    #[test]
    fn test_payback_matches_cost_and_savings() {
        let r = calculator().calculate(&input(LocationType::Residential, 5000.0, 70.0));
        let expected = r.estimated_cost as f64 / (r.monthly_savings as f64 * 12.0);
        let payback = r.payback_period.unwrap();
        assert!((payback - expected).abs() < 0.2);
        assert!(payback > 0.0 && payback < 30.0);
    }

    #[test]
    fn test_zero_day_usage_has_no_payback() {
        let r = calculator().calculate(&input(LocationType::Residential, 3000.0, 0.0));
        assert_eq!(r.recommended_capacity, 0.0);
        assert_eq!(r.estimated_cost, 0);
        assert_eq!(r.monthly_savings, 0);
        assert_eq!(r.payback_period, None);
    }

    #[test]
    fn test_full_day_usage() {
        let r = calculator().calculate(&input(LocationType::Residential, 3000.0, 100.0));
        assert!(r.recommended_capacity > 0.0);
        assert!(r.estimated_cost > 0);
        assert!(r.monthly_savings > 0);
    }

    #[test]
    fn test_large_bill_stays_finite() {
        let r = calculator().calculate(&input(LocationType::Industrial, 1_000_000.0, 100.0));
        assert!(r.recommended_capacity.is_finite());
        assert!(r.estimated_cost > 0);
        assert!(r.payback_period.is_some_and(f64::is_finite));
    }

    #[test]
    fn test_result_rounding() {
        let r = calculator().calculate(&input(LocationType::Residential, 3333.0, 55.0));
        assert_eq!(r.recommended_capacity, (r.recommended_capacity * 10.0).round() / 10.0);
        let payback = r.payback_period.unwrap();
        assert_eq!(payback, (payback * 10.0).round() / 10.0);
    }

    #[test]
    fn test_electric_system_does_not_change_result() {
        let single = CalculatorInput::new(
            LocationType::Commercial,
            10_000.0,
            ElectricSystem::SinglePhase,
            70.0,
        )
        .unwrap();
        let three = CalculatorInput::new(
            LocationType::Commercial,
            10_000.0,
            ElectricSystem::ThreePhase,
            70.0,
        )
        .unwrap();
        assert_eq!(calculator().calculate(&single), calculator().calculate(&three));
    }

    #[test]
    fn test_is_idempotent() {
        let i = input(LocationType::Industrial, 50_000.0, 80.0);
        assert_eq!(calculator().calculate(&i), calculator().calculate(&i));
    }

    #[test]
    fn test_invalid_request_is_rejected_with_all_errors() {
        let request = CalculatorRequest {
            location_type: "residential".to_string(),
            monthly_bill: -100.0,
            electric_system: "single-phase".to_string(),
            day_night_ratio: 150.0,
        };
        match calculate_solar_system(&request) {
            Err(CoreError::InvalidInput(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
