//! Brand palette, logo and theme extraction for documentation sites

pub mod color;
pub mod config;
pub mod errors;
pub mod logo_assets;
pub mod models;
pub mod services;
pub mod sources;
pub mod utils;
