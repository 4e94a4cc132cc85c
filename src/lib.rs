//! BestiNut Library
//!
//! Diet plan estimation, simulated food recognition and a small nutrition
//! assistant, served over MCP.

pub mod assistant;
pub mod build_info;
pub mod db;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod recognition;
pub mod tools;
