pub mod diagnostics_service;
pub mod result_service;
