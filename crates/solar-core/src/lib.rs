//! # solar-core: Pure Business Logic for the Solar Calculator
//!
//! This crate holds the sizing calculator behind the storefront's
//! "how big a system do I need?" widget, plus the lead form rules and the
//! slug formatter used by the content pages. Everything here is a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Solar Calculator Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront (Next.js)                           │   │
//! │  │    Calculator widget ──► Result card ──► Lead form             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    solar-api (axum)                             │   │
//! │  │    POST /api/calculator, POST /api/leads                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ solar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │calculator │  │validation │  │   lead    │  │   │
//! │  │   │   Input   │  │  sizing   │  │  rules    │  │   slug    │  │   │
//! │  │   │  Result   │  │ constants │  │  errors   │  │  format   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Calculator request/input/result and the location/system enums
//! - [`constants`] - Fixed physical and financial assumptions
//! - [`validation`] - Field-level calculator input rules
//! - [`calculator`] - The sizing pipeline
//! - [`format`] - Display strings for results
//! - [`lead`] - Contact form rules and accepted leads
//! - [`slug`] - URL slugs from Thai/English titles
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use solar_core::{CalculatorRequest, SolarCalculator};
//!
//! let request = CalculatorRequest {
//!     location_type: "residential".to_string(),
//!     monthly_bill: 3000.0,
//!     electric_system: "single-phase".to_string(),
//!     day_night_ratio: 60.0,
//! };
//!
//! let result = SolarCalculator::standard().calculate_request(&request).unwrap();
//! assert_eq!(result.recommended_capacity, 3.5);
//! assert_eq!(result.estimated_cost, 157_500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod constants;
pub mod error;
pub mod format;
pub mod lead;
pub mod slug;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate_solar_system, SolarCalculator};
pub use constants::{CalculatorConstants, LocationMultipliers};
pub use error::{CoreError, CoreResult, FieldError};
pub use lead::{Lead, LeadForm};
pub use types::*;
pub use validation::validate_calculator_input;
