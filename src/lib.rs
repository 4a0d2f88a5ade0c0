//! Color normalization service.
//!
//! Converts hex, `rgb(...)` and `hsl(...)` color strings to canonical
//! lowercase `#rrggbb` and serves the conversion over HTTP.

pub mod color;
pub mod config;
pub mod routes;
pub mod state;
