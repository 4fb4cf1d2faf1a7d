//! Wire model of the health payload.
//!
//! Every field is read leniently. Numbers accept numeric strings and fall back
//! to `0` (or `None` for optional sub-scores); text fields read `null` or
//! non-text as empty; nested sections (`dimensions`, a single dimension,
//! `details`, `weights`) that are `null` or the wrong shape decode as their
//! default. A single bad field never rejects the whole payload.

use std::collections::BTreeMap;
use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The four scored dimensions, in radial-axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionKey {
    Growth,
    Activity,
    Contribution,
    Code,
}

impl DimensionKey {
    pub const ALL: [DimensionKey; 4] = [
        DimensionKey::Growth,
        DimensionKey::Activity,
        DimensionKey::Contribution,
        DimensionKey::Code,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DimensionKey::Growth => "growth",
            DimensionKey::Activity => "activity",
            DimensionKey::Contribution => "contribution",
            DimensionKey::Code => "code",
        }
    }

    /// Position of the key in [`DimensionKey::ALL`].
    pub fn index(self) -> usize {
        match self {
            DimensionKey::Growth => 0,
            DimensionKey::Activity => 1,
            DimensionKey::Contribution => 2,
            DimensionKey::Code => 3,
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored dimension as computed upstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "number")]
    pub score: f64,
    /// Display label such as `"20%"`; weighting is already applied upstream.
    #[serde(default, deserialize_with = "text")]
    pub weight: String,
    #[serde(
        default,
        deserialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub star_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fork_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub commit_trend_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub opendigger_score: Option<f64>,
    /// Free-form sub-metrics; the key set depends on the dimension.
    #[serde(default, deserialize_with = "lenient")]
    pub details: BTreeMap<String, Value>,
}

impl Dimension {
    /// Numeric detail value, `None` when missing or not a finite number.
    pub fn detail_value(&self, key: &str) -> Option<f64> {
        self.details.get(key).and_then(value_as_f64)
    }
}

/// Dimension map keyed by [`DimensionKey`]; any entry may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub growth: Option<Dimension>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub activity: Option<Dimension>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub contribution: Option<Dimension>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub code: Option<Dimension>,
}

impl Dimensions {
    pub fn get(&self, key: DimensionKey) -> Option<&Dimension> {
        match key {
            DimensionKey::Growth => self.growth.as_ref(),
            DimensionKey::Activity => self.activity.as_ref(),
            DimensionKey::Contribution => self.contribution.as_ref(),
            DimensionKey::Code => self.code.as_ref(),
        }
    }

    /// Present dimensions in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, &Dimension)> + '_ {
        DimensionKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|dim| (key, dim)))
    }

    /// No dimension survived decoding, e.g. a record whose scoring failed.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Raw score for `key`, `0` when the dimension is missing.
    pub fn score(&self, key: DimensionKey) -> f64 {
        self.get(key).map(|dim| dim.score).unwrap_or(0.0)
    }
}

/// Composite weights as fractions of 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default, deserialize_with = "number")]
    pub growth: f64,
    #[serde(default, deserialize_with = "number")]
    pub activity: f64,
    #[serde(default, deserialize_with = "number")]
    pub contribution: f64,
    #[serde(default, deserialize_with = "number")]
    pub code: f64,
}

impl Weights {
    pub fn get(&self, key: DimensionKey) -> f64 {
        match key {
            DimensionKey::Growth => self.growth,
            DimensionKey::Activity => self.activity,
            DimensionKey::Contribution => self.contribution,
            DimensionKey::Code => self.code,
        }
    }
}

/// Complete health payload for one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsPayload {
    #[serde(default, deserialize_with = "text")]
    pub project: String,
    #[serde(default, deserialize_with = "text")]
    pub repo_name: String,
    #[serde(default, deserialize_with = "number")]
    pub final_score: f64,
    #[serde(default, deserialize_with = "text")]
    pub grade: String,
    #[serde(default, deserialize_with = "text")]
    pub grade_label: String,
    #[serde(default, deserialize_with = "text")]
    pub grade_color: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
    /// `null` when upstream scoring failed for the project.
    #[serde(default, deserialize_with = "lenient")]
    pub dimensions: Dimensions,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub calculated_at: Option<String>,
}

impl MetricsPayload {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Name to show in headings: repository name, then project key.
    pub fn display_name(&self) -> &str {
        if self.repo_name.trim().is_empty() {
            self.project.as_str()
        } else {
            self.repo_name.as_str()
        }
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).unwrap_or(0.0))
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

fn value_as_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_text(value).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_text(value))
}

/// Nested section that decodes as its default when `null` or malformed.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::debug!(%err, "discarding malformed payload section");
        T::default()
    }))
}
