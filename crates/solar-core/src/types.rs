//! # Domain Types
//!
//! Calculator records shared by the core and the HTTP layer.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Calculator Types                                │
//! │                                                                         │
//! │  ┌───────────────────┐    validate     ┌───────────────────┐           │
//! │  │ CalculatorRequest │ ──────────────► │  CalculatorInput  │           │
//! │  │  (raw wire data)  │   TryFrom       │  (typed, checked) │           │
//! │  │  location: String │                 │  LocationType     │           │
//! │  │  system:   String │                 │  ElectricSystem   │           │
//! │  └───────────────────┘                 └─────────┬─────────┘           │
//! │                                                  │ calculate           │
//! │                                        ┌─────────▼─────────┐           │
//! │                                        │ CalculatorResult  │           │
//! │                                        │  kW, THB, years   │           │
//! │                                        └───────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse, Don't Validate
//! `CalculatorInput` has private fields and can only be built through the
//! validator, so the calculator never sees an out-of-range value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{self, validate_calculator_input};

// =============================================================================
// Location Type
// =============================================================================

/// Installation category. Determines the capacity multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Homes.
    Residential,
    /// Shops, offices.
    Commercial,
    /// Factories, warehouses.
    Industrial,
}

impl LocationType {
    /// All variants in display order.
    pub const ALL: [LocationType; 3] = [
        LocationType::Residential,
        LocationType::Commercial,
        LocationType::Industrial,
    ];

    /// Wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LocationType::Residential => "residential",
            LocationType::Commercial => "commercial",
            LocationType::Industrial => "industrial",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationType::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

// =============================================================================
// Electric System
// =============================================================================

/// Grid connection type.
///
/// Carried through for display and quoting; it does not change the sizing
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ElectricSystem {
    SinglePhase,
    ThreePhase,
}

impl ElectricSystem {
    /// All variants in display order.
    pub const ALL: [ElectricSystem; 2] = [ElectricSystem::SinglePhase, ElectricSystem::ThreePhase];

    /// Wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ElectricSystem::SinglePhase => "single-phase",
            ElectricSystem::ThreePhase => "three-phase",
        }
    }
}

impl fmt::Display for ElectricSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElectricSystem {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElectricSystem::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A string that names no variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

// =============================================================================
// Calculator Request (raw)
// =============================================================================

/// Raw calculator form data as submitted by the storefront.
///
/// Enum-like fields stay strings here so the validator can report an
/// unknown value as a field error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    /// `residential | commercial | industrial`
    pub location_type: String,

    /// Average monthly electricity bill in THB.
    pub monthly_bill: f64,

    /// `single-phase | three-phase`
    pub electric_system: String,

    /// Share of consumption during daylight, 0-100.
    pub day_night_ratio: f64,
}

impl CalculatorRequest {
    /// Builds a request from typed values (tests, CLI callers).
    pub fn new(
        location_type: LocationType,
        monthly_bill: f64,
        electric_system: ElectricSystem,
        day_night_ratio: f64,
    ) -> Self {
        CalculatorRequest {
            location_type: location_type.as_str().to_string(),
            monthly_bill,
            electric_system: electric_system.as_str().to_string(),
            day_night_ratio,
        }
    }
}

// =============================================================================
// Calculator Input (validated)
// =============================================================================

/// Calculator input that has passed every validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    location_type: LocationType,
    monthly_bill: f64,
    electric_system: ElectricSystem,
    day_night_ratio: f64,
}

impl CalculatorInput {
    /// Validates typed values and builds an input.
    ///
    /// ## Example
    /// ```rust
    /// use solar_core::{CalculatorInput, ElectricSystem, LocationType};
    ///
    /// let ok = CalculatorInput::new(LocationType::Commercial, 10_000.0, ElectricSystem::ThreePhase, 70.0);
    /// assert!(ok.is_ok());
    ///
    /// let bad = CalculatorInput::new(LocationType::Commercial, 0.0, ElectricSystem::ThreePhase, 170.0);
    /// assert_eq!(bad.unwrap_err().field_errors().len(), 2);
    /// ```
    pub fn new(
        location_type: LocationType,
        monthly_bill: f64,
        electric_system: ElectricSystem,
        day_night_ratio: f64,
    ) -> CoreResult<Self> {
        let mut errors = validation::validate_monthly_bill(monthly_bill);
        errors.extend(validation::validate_day_night_ratio(day_night_ratio));
        if !errors.is_empty() {
            return Err(CoreError::InvalidInput(errors));
        }

        Ok(CalculatorInput {
            location_type,
            monthly_bill,
            electric_system,
            day_night_ratio,
        })
    }

    #[inline]
    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    #[inline]
    pub fn monthly_bill(&self) -> f64 {
        self.monthly_bill
    }

    #[inline]
    pub fn electric_system(&self) -> ElectricSystem {
        self.electric_system
    }

    #[inline]
    pub fn day_night_ratio(&self) -> f64 {
        self.day_night_ratio
    }
}

impl TryFrom<&CalculatorRequest> for CalculatorInput {
    type Error = CoreError;

    fn try_from(request: &CalculatorRequest) -> Result<Self, Self::Error> {
        let errors = validate_calculator_input(request);
        if !errors.is_empty() {
            return Err(CoreError::InvalidInput(errors));
        }

        // Both parses succeed once the validator passed
        match (
            request.location_type.parse::<LocationType>(),
            request.electric_system.parse::<ElectricSystem>(),
        ) {
            (Ok(location_type), Ok(electric_system)) => Ok(CalculatorInput {
                location_type,
                monthly_bill: request.monthly_bill,
                electric_system,
                day_night_ratio: request.day_night_ratio,
            }),
            _ => Err(CoreError::InvalidInput(errors)),
        }
    }
}

impl From<CalculatorInput> for CalculatorRequest {
    fn from(input: CalculatorInput) -> Self {
        CalculatorRequest::new(
            input.location_type,
            input.monthly_bill,
            input.electric_system,
            input.day_night_ratio,
        )
    }
}

// =============================================================================
// Calculator Result
// =============================================================================

/// Sizing recommendation returned to the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    /// kW, rounded up to the next 0.1.
    pub recommended_capacity: f64,

    /// THB, whole units.
    pub estimated_cost: i64,

    /// Years, one decimal. `None` when the system saves nothing
    /// (0% daytime usage), since no payback exists.
    pub payback_period: Option<f64>,

    /// THB per month, whole units.
    pub monthly_savings: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request(location: &str, system: &str) -> CalculatorRequest {
        CalculatorRequest {
            location_type: location.to_string(),
            monthly_bill: 3000.0,
            electric_system: system.to_string(),
            day_night_ratio: 60.0,
        }
    }

    #[test]
    fn test_enum_round_trip_through_wire_names() {
        for location in LocationType::ALL {
            assert_eq!(location.as_str().parse::<LocationType>(), Ok(location));
        }
        for system in ElectricSystem::ALL {
            assert_eq!(system.as_str().parse::<ElectricSystem>(), Ok(system));
        }
        assert!("Residential".parse::<LocationType>().is_err());
        assert!("single_phase".parse::<ElectricSystem>().is_err());
    }

    #[test]
    fn test_enum_serde_names_match_as_str() {
        let json = serde_json::to_string(&ElectricSystem::ThreePhase).unwrap();
        assert_eq!(json, "\"three-phase\"");
        let json = serde_json::to_string(&LocationType::Industrial).unwrap();
        assert_eq!(json, "\"industrial\"");
    }

    #[test]
    fn test_try_from_request() {
        let input = CalculatorInput::try_from(&request("commercial", "three-phase")).unwrap();
        assert_eq!(input.location_type(), LocationType::Commercial);
        assert_eq!(input.electric_system(), ElectricSystem::ThreePhase);
        assert_eq!(input.monthly_bill(), 3000.0);
        assert_eq!(input.day_night_ratio(), 60.0);
    }

    #[test]
    fn test_try_from_rejects_unknown_enums() {
        let err = CalculatorInput::try_from(&request("farm", "two-phase")).unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["locationType", "electricSystem"]);
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{"locationType":"residential","monthlyBill":3000,"electricSystem":"single-phase","dayNightRatio":60}"#;
        let parsed: CalculatorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, request("residential", "single-phase"));
    }

    #[test]
    fn test_result_serializes_null_payback() {
        let result = CalculatorResult {
            recommended_capacity: 0.0,
            estimated_cost: 0,
            payback_period: None,
            monthly_savings: 0,
        };
        let json = serde_json::to_value(result).unwrap();
        assert!(json["paybackPeriod"].is_null());
        assert_eq!(json["recommendedCapacity"], 0.0);
    }
}
