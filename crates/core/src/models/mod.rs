pub mod chart;
pub mod settings;
pub mod transaction;
pub mod user;
pub mod view;
