pub mod chart_service;
pub mod progress_service;
