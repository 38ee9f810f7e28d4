pub mod config;
pub mod customization;
pub mod error;
pub mod sunrise;
