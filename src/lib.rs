//! Therapeutic Diet Assistant (TDA) Library
//!
//! Calorie estimation and condition-aware food filtering over static rule
//! tables.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod reference;
pub mod tools;
