//! Translates Dutch text in a copied language tree to English.
//!
//! Only user-visible fields are touched: `title`, `content`, `text`, `label`,
//! `placeholder` and `alt`, plus strings held directly in arrays. Identifiers,
//! URLs and icons keep their values.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    time::Instant,
};

use serde_json::Value;
use tracing::{info, warn};

use crate::{
    application::error::AppError,
    domain::dictionary::{Phrase, dutch_to_english},
    infra::{error::InfraError, fs, json},
};

const TARGET: &str = "intravox_demo::translate_content";
const TRANSLATABLE_KEYS: [&str; 6] = ["title", "content", "text", "label", "placeholder", "alt"];

#[derive(Debug, Clone, Default)]
pub struct TranslateReport {
    pub scanned: usize,
    /// Files that were rewritten, in walk order.
    pub translated: Vec<PathBuf>,
    pub skipped: usize,
}

/// Translate every JSON document under `root`. Files with nothing to translate stay untouched.
pub fn translate_tree(root: &Path) -> Result<TranslateReport, AppError> {
    let started_at = Instant::now();
    let phrases = dutch_to_english();
    let mut report = TranslateReport::default();

    for path in fs::json_files(root, &[])? {
        let Some(contents) = fs::read_optional(&path)? else {
            continue;
        };
        report.scanned += 1;

        let mut document: Value = match serde_json::from_slice(&contents) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    target = TARGET,
                    path = %path.display(),
                    error = %err,
                    "skipping invalid JSON"
                );
                report.skipped += 1;
                continue;
            }
        };

        let changed = translate_value(&mut document, phrases);
        if changed == 0 {
            continue;
        }

        let bytes = json::to_document_bytes(&document)
            .map_err(|err| InfraError::serialization(&path, err))?;
        std::fs::write(&path, bytes).map_err(|err| InfraError::io(&path, err))?;
        info!(
            target = TARGET,
            op = "rewrite",
            path = %path.display(),
            changed,
            "content translated"
        );
        report.translated.push(path);
    }

    info!(
        target = TARGET,
        op = "translate",
        result = "ok",
        scanned = report.scanned,
        translated = report.translated.len(),
        skipped = report.skipped,
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "content translation finished"
    );

    Ok(report)
}

/// Translate visible strings anywhere in `value`; returns how many strings changed.
pub fn translate_value(value: &mut Value, phrases: &[Phrase]) -> usize {
    match value {
        Value::String(current) => match translate_text(current, phrases) {
            Some(updated) => {
                *current = updated;
                1
            }
            None => 0,
        },
        Value::Array(items) => items
            .iter_mut()
            .map(|item| translate_value(item, phrases))
            .sum(),
        Value::Object(map) => map
            .iter_mut()
            .filter(|(key, child)| !child.is_string() || TRANSLATABLE_KEYS.contains(&key.as_str()))
            .map(|(_, child)| translate_value(child, phrases))
            .sum(),
        _ => 0,
    }
}

/// Apply `phrases` in order. `None` when the text comes out unchanged.
pub fn translate_text(text: &str, phrases: &[Phrase]) -> Option<String> {
    let mut current = Cow::Borrowed(text);
    for (dutch, english) in phrases {
        if let Some(next) = replace_phrase(&current, dutch, english) {
            current = Cow::Owned(next);
        }
    }

    match current {
        Cow::Owned(updated) if updated != text => Some(updated),
        _ => None,
    }
}

/// Replace whole-word occurrences of `from`. A phrase edge that is a letter or
/// digit must not touch another letter or digit in `text`.
fn replace_phrase(text: &str, from: &str, to: &str) -> Option<String> {
    if from.is_empty() {
        return None;
    }
    let guard_start = from.chars().next().is_some_and(char::is_alphanumeric);
    let guard_end = from.chars().next_back().is_some_and(char::is_alphanumeric);

    let mut result = String::new();
    let mut last = 0;
    let mut replaced = false;
    for (start, _) in text.match_indices(from) {
        let end = start + from.len();
        let joined_before =
            guard_start && text[..start].chars().next_back().is_some_and(char::is_alphanumeric);
        let joined_after =
            guard_end && text[end..].chars().next().is_some_and(char::is_alphanumeric);
        if joined_before || joined_after {
            continue;
        }
        result.push_str(&text[last..start]);
        result.push_str(to);
        last = end;
        replaced = true;
    }

    if !replaced {
        return None;
    }
    result.push_str(&text[last..]);
    Some(result)
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    const PHRASES: &[Phrase] = &[
        ("Neem contact op voor prijzen", "Contact us for pricing"),
        ("Neem contact op", "Get in touch"),
        ("Laatste nieuws", "Latest news"),
        ("Ja", "Yes"),
    ];

    #[test]
    fn longer_phrases_win_over_their_prefixes() {
        assert_eq!(
            translate_text("Neem contact op voor prijzen", PHRASES).as_deref(),
            Some("Contact us for pricing")
        );
        assert_eq!(
            translate_text("Neem contact op vandaag", PHRASES).as_deref(),
            Some("Get in touch vandaag")
        );
    }

    #[test]
    fn short_phrases_only_match_whole_words() {
        assert_eq!(translate_text("January", PHRASES), None);
        assert_eq!(translate_text("Ja, graag", PHRASES).as_deref(), Some("Yes, graag"));
        assert_eq!(
            translate_text("**Ja** of Ja", PHRASES).as_deref(),
            Some("**Yes** of Yes")
        );
    }

    #[test]
    fn only_visible_fields_are_translated() {
        let mut page = json!({
            "id": "Laatste nieuws",
            "title": "Laatste nieuws",
            "layout": {"rows": [{"widgets": [
                {"type": "heading", "content": "Laatste nieuws"},
                {"type": "image", "src": "Ja.jpg", "alt": "Ja"},
                {"type": "links", "items": [{"title": "Ja", "url": "#Ja", "icon": "Ja"}]}
            ]}]},
            "tags": ["Ja", "Nee"]
        });

        assert_eq!(translate_value(&mut page, PHRASES), 5);
        assert_eq!(page["id"], "Laatste nieuws");
        assert_eq!(page["title"], "Latest news");
        let widgets = &page["layout"]["rows"][0]["widgets"];
        assert_eq!(widgets[0]["content"], "Latest news");
        assert_eq!(widgets[1]["src"], "Ja.jpg");
        assert_eq!(widgets[1]["alt"], "Yes");
        assert_eq!(widgets[2]["items"][0]["title"], "Yes");
        assert_eq!(widgets[2]["items"][0]["url"], "#Ja");
        assert_eq!(widgets[2]["items"][0]["icon"], "Ja");
        assert_eq!(page["tags"], json!(["Yes", "Nee"]));
    }

    #[test]
    fn tree_rewrite_touches_only_translated_files() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        stdfs::create_dir_all(root.join("news")).expect("dir");
        stdfs::write(
            root.join("news/news.json"),
            r#"{"id":"news","title":"Laatste nieuws","layout":{"rows":[]}}"#,
        )
        .expect("news");
        let english = r#"{"id":"home","title":"Home"}"#;
        stdfs::write(root.join("home.json"), english).expect("home");
        stdfs::write(root.join("broken.json"), [0xff, 0xfe]).expect("broken");

        let report = translate_tree(root).expect("translate");
        assert_eq!(report.scanned, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.translated, vec![root.join("news/news.json")]);

        assert_eq!(
            stdfs::read_to_string(root.join("home.json")).expect("read"),
            english
        );
        let rewritten = stdfs::read_to_string(root.join("news/news.json")).expect("read");
        assert!(rewritten.starts_with("{\n    \"id\": \"news\",\n    \"title\": \"Latest news\""));
    }
}
