mod health;

pub use health::{HealthPage, HealthState, ProjectHealth};
