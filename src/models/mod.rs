//! Modelos de dominio

pub mod automobile;
pub mod automobile_usage;
pub mod driver;

pub use automobile::Automobile;
pub use automobile_usage::{
    AutomobileSnapshot, AutomobileUsage, DriverSnapshot, NewAutomobileUsage, UsageDate, UsagePatch,
};
pub use driver::Driver;
