// Library exports for testing
pub mod config;
pub mod constants;
pub mod manifest;
pub mod splash;
pub mod tone;
