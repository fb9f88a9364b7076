//! HTTP route handlers.

pub mod calculator;
pub mod health;
pub mod leads;
