use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en-US) `healthlens-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/healthlens-ui.ftl`
/// 2. Copy all keys from `en-US/healthlens-ui.ftl`
/// 3. Run `cargo test -p healthlens-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const EN_US: &str = include_str!("../i18n/en-US/healthlens-ui.ftl");
    const ZH_CN: &str = include_str!("../i18n/zh-CN/healthlens-ui.ftl");

    let fallback_keys = extract_keys(EN_US);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("zh-CN", ZH_CN),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Every literal `t!("…")` key used under `src/` must exist in the fallback.
/// `fl!` checks this at compile time too; the test names the offending key.
#[test]
fn source_keys_exist_in_fallback() {
    const EN_US: &str = include_str!("../i18n/en-US/healthlens-ui.ftl");
    let fallback_keys = extract_keys(EN_US);

    let mut used = BTreeSet::new();
    collect_source_keys(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut used);
    assert!(!used.is_empty(), "no t!(…) usages found under src/");

    let missing: Vec<_> = used
        .into_iter()
        .filter(|key| !fallback_keys.contains(key))
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in source but missing from en-US: {}",
        missing.join(", ")
    );
}

/// Grade and raw-detail labels must be translated, not copied from en-US.
#[test]
fn label_tables_are_translated() {
    const EN_US: &str = include_str!("../i18n/en-US/healthlens-ui.ftl");
    const ZH_CN: &str = include_str!("../i18n/zh-CN/healthlens-ui.ftl");

    let fallback = extract_messages(EN_US);
    let localized = extract_messages(ZH_CN);

    let tables: Vec<_> = fallback
        .iter()
        .filter(|(key, _)| key.starts_with("grade-") || key.starts_with("detail-"))
        .collect();
    assert_eq!(
        tables.iter().filter(|(key, _)| key.starts_with("grade-")).count(),
        5,
        "expected one label per grade S..D"
    );

    let untranslated: Vec<_> = tables
        .into_iter()
        .filter(|(key, value)| localized.get(*key) == Some(*value))
        .map(|(key, _)| key.as_str())
        .collect();
    assert!(
        untranslated.is_empty(),
        "zh-CN repeats the en-US text for: {}",
        untranslated.join(", ")
    );
}

fn extract_messages(src: &str) -> BTreeMap<String, String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

fn collect_source_keys(dir: &Path, out: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_source_keys(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let Ok(src) = fs::read_to_string(&path) else {
                continue;
            };
            for chunk in src.split("t!(\"").skip(1) {
                if let Some(end) = chunk.find('"') {
                    let key = &chunk[..end];
                    if !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
                        out.insert(key.to_string());
                    }
                }
            }
        }
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
