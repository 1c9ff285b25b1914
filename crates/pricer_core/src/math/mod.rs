//! Numerical building blocks.

pub mod interpolators;
