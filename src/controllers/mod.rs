pub mod result_controller;
pub mod status_controller;
