//! Fetch contract for health payloads.
//!
//! Front-ends depend on [`HealthSource`] only, usually through a cloneable
//! [`SharedSource`] handle. The HTTP client that talks to the scoring service
//! lives outside this workspace; [`FixtureSource`] serves embedded payloads for
//! the demo launchers and tests.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::model::MetricsPayload;

const DEMO_PAYLOAD: &str = include_str!("../fixtures/demo.json");
const UPSTREAM_PAYLOAD: &str = include_str!("../fixtures/upstream.json");
const FAILED_PAYLOAD: &str = include_str!("../fixtures/failed.json");

/// Default project key served by [`FixtureSource::demo`].
pub const DEMO_PROJECT: &str = "demo";
/// Record carrying the scoring service's own grade palette and labels.
pub const UPSTREAM_PROJECT: &str = "element-plus";
/// Record written when upstream scoring failed (`dimensions: null`).
pub const FAILED_PROJECT: &str = "failed";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("project `{0}` has no health record")]
    NotFound(String),

    #[error("malformed health payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Anything able to deliver a [`MetricsPayload`] for a project key.
pub trait HealthSource {
    fn load(&self, project: &str) -> Result<MetricsPayload, FetchError>;
}

/// In-memory source backed by raw JSON documents.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    payloads: BTreeMap<String, String>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source preloaded with the bundled fixtures: [`DEMO_PROJECT`],
    /// [`UPSTREAM_PROJECT`] and [`FAILED_PROJECT`].
    pub fn demo() -> Self {
        Self::new()
            .with_payload(DEMO_PROJECT, DEMO_PAYLOAD)
            .with_payload(UPSTREAM_PROJECT, UPSTREAM_PAYLOAD)
            .with_payload(FAILED_PROJECT, FAILED_PAYLOAD)
    }

    pub fn with_payload(mut self, project: impl Into<String>, raw: impl Into<String>) -> Self {
        self.payloads.insert(project.into(), raw.into());
        self
    }

    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.payloads.keys().map(String::as_str)
    }
}

impl HealthSource for FixtureSource {
    fn load(&self, project: &str) -> Result<MetricsPayload, FetchError> {
        let raw = self
            .payloads
            .get(project)
            .ok_or_else(|| FetchError::NotFound(project.to_string()))?;
        let payload = MetricsPayload::from_json(raw)?;
        tracing::debug!(project, score = payload.final_score, "loaded fixture payload");
        Ok(payload)
    }
}

/// Cloneable handle to any [`HealthSource`], shared through UI context.
#[derive(Clone)]
pub struct SharedSource(Rc<dyn HealthSource>);

impl SharedSource {
    pub fn new(source: impl HealthSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

impl Default for SharedSource {
    fn default() -> Self {
        Self::new(FixtureSource::demo())
    }
}

impl fmt::Debug for SharedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSource").finish_non_exhaustive()
    }
}

impl HealthSource for SharedSource {
    fn load(&self, project: &str) -> Result<MetricsPayload, FetchError> {
        self.0.load(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DimensionKey;

    struct Offline;

    impl HealthSource for Offline {
        fn load(&self, _project: &str) -> Result<MetricsPayload, FetchError> {
            Err(FetchError::Transport("connection refused".into()))
        }
    }

    #[test]
    fn demo_fixture_decodes() {
        let payload = FixtureSource::demo().load(DEMO_PROJECT).unwrap();
        assert!(!payload.grade.is_empty());
        for key in DimensionKey::ALL {
            assert!(payload.dimensions.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn unknown_project_is_not_found() {
        let err = FixtureSource::demo().load("nope").unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref p) if p == "nope"));
    }

    #[test]
    fn bundled_fixtures_cover_upstream_shapes() {
        let source = FixtureSource::demo();
        assert_eq!(
            source.projects().collect::<Vec<_>>(),
            [DEMO_PROJECT, UPSTREAM_PROJECT, FAILED_PROJECT]
        );

        let upstream = source.load(UPSTREAM_PROJECT).unwrap();
        assert_eq!(upstream.grade, "A");
        assert_eq!(upstream.grade_color, "#22c55e");

        let failed = source.load(FAILED_PROJECT).unwrap();
        assert_eq!(failed.dimensions.iter().count(), 0);
    }

    #[test]
    fn shared_source_delegates() {
        let shared = SharedSource::default();
        assert!(shared.load(DEMO_PROJECT).is_ok());

        let offline = SharedSource::new(Offline);
        let cloned = offline.clone();
        assert!(matches!(
            cloned.load(DEMO_PROJECT),
            Err(FetchError::Transport(_))
        ));
    }

    #[test]
    fn broken_json_is_a_decode_error() {
        let source = FixtureSource::new().with_payload("broken", "{ not json");
        assert!(matches!(source.load("broken"), Err(FetchError::Decode(_))));
        assert_eq!(source.projects().collect::<Vec<_>>(), ["broken"]);
    }
}
