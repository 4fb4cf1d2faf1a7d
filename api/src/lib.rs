//! Payload model and fetch contract shared by the Healthlens front-ends.
//!
//! The scoring pipeline runs upstream; this crate only describes the shape of
//! what it delivers and how a front-end asks for it.

pub mod model;
pub mod source;

pub use model::{Dimension, DimensionKey, Dimensions, MetricsPayload, Weights};
pub use source::{
    FetchError, FixtureSource, HealthSource, SharedSource, DEMO_PROJECT, FAILED_PROJECT,
    UPSTREAM_PROJECT,
};
