//! BestiNut Tools module
//!
//! MCP tool implementations for the BestiNut nutrition service.

pub mod charts;
pub mod chat;
pub mod food_scan;
pub mod plans;
pub mod preferences;
pub mod status;
