//! # Validation Module
//!
//! Calculator input rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront form (TypeScript)                                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: solar-api handler                                            │
//! │  ├── Required keys present (HTTP 400 "Missing required fields")        │
//! │  └── THIS MODULE: domain rules (HTTP 400 "Validation failed")          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CalculatorInput                                              │
//! │  └── Only constructible through this module                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules run in a fixed order and every violation is collected; the order
//! only affects the order of the returned list.
//!
//! | # | Rule                                   | Field            |
//! |---|----------------------------------------|------------------|
//! | 1 | bill must be greater than 0            | `monthlyBill`    |
//! | 2 | bill must not exceed 1,000,000         | `monthlyBill`    |
//! | 3 | ratio must be within 0-100             | `dayNightRatio`  |
//! | 4 | location must be a known type          | `locationType`   |
//! | 5 | system must be a known type            | `electricSystem` |

use crate::constants::{DAY_NIGHT_RATIO_RANGE, MAX_MONTHLY_BILL};
use crate::error::FieldError;
use crate::types::{CalculatorRequest, ElectricSystem, LocationType};

// =============================================================================
// Field Names & Messages
// =============================================================================

/// Wire names of the calculator fields.
pub mod fields {
    pub const LOCATION_TYPE: &str = "locationType";
    pub const MONTHLY_BILL: &str = "monthlyBill";
    pub const ELECTRIC_SYSTEM: &str = "electricSystem";
    pub const DAY_NIGHT_RATIO: &str = "dayNightRatio";

    /// Every field a calculator request must carry.
    pub const REQUIRED: [&str; 4] = [LOCATION_TYPE, MONTHLY_BILL, ELECTRIC_SYSTEM, DAY_NIGHT_RATIO];
}

/// User-facing messages, shown verbatim by the storefront.
pub mod messages {
    /// "Please enter an electricity bill greater than 0"
    pub const BILL_NOT_POSITIVE: &str = "กรุณากรอกค่าไฟฟ้าที่มากกว่า 0";
    /// "Electricity bill is too high, please verify"
    pub const BILL_TOO_HIGH: &str = "ค่าไฟฟ้าสูงเกินไป กรุณาตรวจสอบอีกครั้ง";
    /// "Usage ratio must be between 0-100%"
    pub const RATIO_OUT_OF_RANGE: &str = "สัดส่วนการใช้ไฟต้องอยู่ระหว่าง 0-100%";
    /// "Please select an installation location type"
    pub const LOCATION_REQUIRED: &str = "กรุณาเลือกประเภทสถานที่ติดตั้ง";
    /// "Please select an electric system"
    pub const SYSTEM_REQUIRED: &str = "กรุณาเลือกระบบไฟฟ้า";
}

// =============================================================================
// Calculator Validators
// =============================================================================

/// Validates a raw calculator request.
///
/// Returns every violated rule (empty = valid). Never panics, whatever the
/// numbers are: NaN fails both numeric rules it touches.
///
/// ## Example
/// ```rust
/// use solar_core::{validate_calculator_input, CalculatorRequest};
///
/// let request = CalculatorRequest {
///     location_type: "residential".to_string(),
///     monthly_bill: -100.0,
///     electric_system: "single-phase".to_string(),
///     day_night_ratio: 150.0,
/// };
///
/// let errors = validate_calculator_input(&request);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].field, "monthlyBill");
/// assert_eq!(errors[1].field, "dayNightRatio");
/// ```
pub fn validate_calculator_input(request: &CalculatorRequest) -> Vec<FieldError> {
    let mut errors = validate_monthly_bill(request.monthly_bill);
    errors.extend(validate_day_night_ratio(request.day_night_ratio));

    if request.location_type.parse::<LocationType>().is_err() {
        errors.push(FieldError::new(
            fields::LOCATION_TYPE,
            messages::LOCATION_REQUIRED,
        ));
    }

    if request.electric_system.parse::<ElectricSystem>().is_err() {
        errors.push(FieldError::new(
            fields::ELECTRIC_SYSTEM,
            messages::SYSTEM_REQUIRED,
        ));
    }

    errors
}

/// Rules 1 and 2: the bill must be positive and below the sanity bound.
pub fn validate_monthly_bill(bill: f64) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Written as !(> 0) so NaN is rejected too
    if !(bill > 0.0) {
        errors.push(FieldError::new(
            fields::MONTHLY_BILL,
            messages::BILL_NOT_POSITIVE,
        ));
    }

    if bill > MAX_MONTHLY_BILL {
        errors.push(FieldError::new(fields::MONTHLY_BILL, messages::BILL_TOO_HIGH));
    }

    errors
}

/// Rule 3: the ratio is a percentage, bounds inclusive.
pub fn validate_day_night_ratio(ratio: f64) -> Option<FieldError> {
    if DAY_NIGHT_RATIO_RANGE.contains(&ratio) {
        None
    } else {
        Some(FieldError::new(
            fields::DAY_NIGHT_RATIO,
            messages::RATIO_OUT_OF_RANGE,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
