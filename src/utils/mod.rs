//! # Utilities Module
//!
//! Floating-point helpers shared by the vector code and its tests.

pub mod math;

pub use math::*;
