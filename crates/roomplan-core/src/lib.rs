//! Core types and utilities for the roomplan layout engine.
//!
//! This crate provides the foundational types used across the other roomplan crates:
//! - Axis-aligned rectangles and 1-D interval algebra along a wall
//! - Wall naming and orientation
//! - Error types

pub mod errors;
pub mod geometry;
pub mod wall;

pub use errors::*;
pub use geometry::*;
pub use wall::*;
