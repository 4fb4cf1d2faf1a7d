//! Platform-agnostic building blocks shared by the health views.

pub mod format;
pub mod geometry;
