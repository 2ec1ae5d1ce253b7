pub mod automobile_controller;
pub mod driver_controller;
