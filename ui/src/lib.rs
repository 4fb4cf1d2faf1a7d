//! Shared UI crate for Healthlens. Chart models, components and views used by
//! every front-end live here.

pub mod core;
pub mod health;
pub mod i18n;
pub mod views;
