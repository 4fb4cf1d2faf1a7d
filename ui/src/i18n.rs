//! Internationalization (i18n) support for `healthlens-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/healthlens-ui.ftl   (fallback/reference)
//!   zh-CN/healthlens-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let caption = t!("health-score-caption");
//! ```
//!
//! To add a new locale, copy `en-US/healthlens-ui.ftl` to
//! `i18n/<lang-id>/healthlens-ui.ftl`, translate the values, and register it
//! in `tests/i18n_missing_keys.rs`.
//!
//! Chart geometry never depends on the active language; only labels do.
use std::sync::Once;

use api::DimensionKey;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::health::{breakdown::SubMetric, grade::Grade};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("axis-growth")
///     t!("health-calculated-at", when = stamp)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "healthlens-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::debug!(tag, "ignoring unparsable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized axis / dimension short label.
pub fn dimension_label(key: DimensionKey) -> String {
    match key {
        DimensionKey::Growth => crate::t!("axis-growth"),
        DimensionKey::Activity => crate::t!("axis-activity"),
        DimensionKey::Contribution => crate::t!("axis-contribution"),
        DimensionKey::Code => crate::t!("axis-code"),
    }
}

/// Localized breakdown legend label.
pub fn sub_metric_label(metric: SubMetric) -> String {
    match metric {
        SubMetric::Star => crate::t!("metric-star"),
        SubMetric::Fork => crate::t!("metric-fork"),
        SubMetric::CommitTrend => crate::t!("metric-commit-trend"),
        SubMetric::OpenDigger => crate::t!("metric-opendigger"),
        SubMetric::WeeklyPrs => crate::t!("metric-weekly-prs"),
        SubMetric::MonthlyPrs => crate::t!("metric-monthly-prs"),
        SubMetric::Additions => crate::t!("metric-additions"),
        SubMetric::Deletions => crate::t!("metric-deletions"),
    }
}

/// Localized default label for a grade, used when the payload carries none.
pub fn grade_label(grade: Grade) -> String {
    match grade {
        Grade::S => crate::t!("grade-s"),
        Grade::A => crate::t!("grade-a"),
        Grade::B => crate::t!("grade-b"),
        Grade::C => crate::t!("grade-c"),
        Grade::D => crate::t!("grade-d"),
    }
}

/// Localized label for a known raw `details` key; `None` for anything else.
pub fn detail_label(key: &str) -> Option<String> {
    Some(match key {
        "star_current_month" => crate::t!("detail-star-current-month"),
        "star_avg_prev_3m" => crate::t!("detail-star-avg-prev-3m"),
        "fork_current_month" => crate::t!("detail-fork-current-month"),
        "fork_avg_prev_3m" => crate::t!("detail-fork-avg-prev-3m"),
        "commit_avg_last_week" => crate::t!("detail-commit-avg-last-week"),
        "commit_avg_month" => crate::t!("detail-commit-avg-month"),
        "commit_ratio" => crate::t!("detail-commit-ratio"),
        "opendigger_activity" => crate::t!("detail-opendigger-activity"),
        "pr_avg_last_week" => crate::t!("detail-pr-avg-last-week"),
        "pr_avg_month" => crate::t!("detail-pr-avg-month"),
        "pr_ratio" => crate::t!("detail-pr-ratio"),
        "pull_additions" => crate::t!("detail-pull-additions"),
        "pull_deletions" => crate::t!("detail-pull-deletions"),
        "total_churn" => crate::t!("detail-total-churn"),
        _ => return None,
    })
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
