//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - start: Start the planner server
//! - estimate: Compute and display an estimate from the local planning table
//! - render: Display a saved /calculate response
//! - submit: Submit a bed count to a running server
//! - test: Test configuration and planning data validity
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod render;
pub mod start;
pub mod submit;
