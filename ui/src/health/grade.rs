//! Grade banding: letter grades to display colors and labels.

use api::MetricsPayload;

use crate::i18n;

/// Neutral color used for unknown grades.
pub const DEFAULT_GRADE_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Case-insensitive parse of a single-letter code.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "S" => Some(Grade::S),
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            _ => None,
        }
    }

    /// Band for a composite score using the upstream thresholds.
    ///
    /// Scores below 20 fall in the danger band, which has no letter here.
    /// `S` is only ever assigned upstream.
    pub fn from_score(score: f64) -> Option<Self> {
        if score.is_nan() {
            return None;
        }
        match score {
            s if s >= 80.0 => Some(Grade::A),
            s if s >= 60.0 => Some(Grade::B),
            s if s >= 40.0 => Some(Grade::C),
            s if s >= 20.0 => Some(Grade::D),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Grade::S => "#fbbf24",
            Grade::A => "#a855f7",
            Grade::B => "#3b82f6",
            Grade::C => "#22c55e",
            Grade::D => "#6b7280",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// Color for a grade code; unknown codes get [`DEFAULT_GRADE_COLOR`].
pub fn grade_color(code: &str) -> &'static str {
    Grade::parse(code)
        .map(Grade::color)
        .unwrap_or(DEFAULT_GRADE_COLOR)
}

/// Loose check for a CSS color token we are willing to inline into SVG.
fn usable_color(token: &str) -> bool {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else {
        (token.starts_with("rgb(") || token.starts_with("rgba(") || token.starts_with("hsl("))
            && token.ends_with(')')
    }
}

/// What the header badge shows for a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeBadge {
    /// Letter as delivered, `"?"` when blank.
    pub letter: String,
    pub grade: Option<Grade>,
    /// Label as delivered; `None` when blank.
    pub label: Option<String>,
    pub color: String,
    /// The payload color disagrees with the grade table.
    pub mismatch: bool,
    /// The letter disagrees with the band of `final_score`.
    pub off_band: bool,
}

impl GradeBadge {
    /// The payload's own color wins for rendering; the table only fills in
    /// when no usable color was delivered. Disagreements are flagged, not fixed.
    pub fn resolve(payload: &MetricsPayload) -> Self {
        let grade = Grade::parse(&payload.grade);
        let table_color = grade_color(&payload.grade);
        let supplied = payload.grade_color.trim();

        let (color, mismatch) = if usable_color(supplied) {
            let mismatch = !supplied.eq_ignore_ascii_case(table_color);
            (supplied.to_string(), mismatch)
        } else {
            (table_color.to_string(), false)
        };

        if mismatch {
            tracing::debug!(
                grade = %payload.grade,
                supplied,
                table = table_color,
                "grade color disagrees with grade table; rendering supplied color"
            );
        }

        // S is only ever assigned upstream, so it has no score band to check.
        let band = Grade::from_score(payload.final_score);
        let off_band = match grade {
            Some(Grade::S) | None => false,
            Some(letter) => band != Some(letter),
        };
        if off_band {
            tracing::debug!(
                grade = %payload.grade,
                score = payload.final_score,
                band = band.map(Grade::as_str).unwrap_or("none"),
                "grade letter disagrees with score band"
            );
        }

        let letter = match payload.grade.trim() {
            "" => "?".to_string(),
            other => other.to_string(),
        };

        let label = match payload.grade_label.trim() {
            "" => None,
            other => Some(other.to_string()),
        };

        Self {
            letter,
            grade,
            label,
            color,
            mismatch,
            off_band,
        }
    }

    /// Supplied label, else the localized default for the grade, else empty.
    pub fn display_label(&self) -> String {
        match (&self.label, self.grade) {
            (Some(label), _) => label.clone(),
            (None, Some(grade)) => i18n::grade_label(grade),
            (None, None) => String::new(),
        }
    }
}
