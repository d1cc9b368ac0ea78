//! TDA Tools module
//!
//! MCP tool implementations for the Therapeutic Diet Assistant.

pub mod catalog;
pub mod plans;
pub mod status;
