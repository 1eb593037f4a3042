//! Rewrites legacy theme-class row backgrounds to the editor's CSS variables.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use serde_json::Value;
use tracing::{info, warn};

use crate::{
    application::error::AppError,
    domain::types::RowBackground,
    infra::{error::InfraError, fs, json},
};

const TARGET: &str = "intravox_demo::normalize_backgrounds";
const BACKGROUND_KEY: &str = "backgroundColor";

#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub scanned: usize,
    /// Files that were rewritten, in walk order.
    pub fixed: Vec<PathBuf>,
    pub skipped: usize,
}

/// Normalize every JSON document under `root`. Unchanged files are left untouched.
pub fn normalize_tree(root: &Path) -> Result<NormalizeReport, AppError> {
    let started_at = Instant::now();
    let mut report = NormalizeReport::default();

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

        let replaced = normalize_value(&mut document);
        if replaced == 0 {
            continue;
        }

        let bytes = json::to_document_bytes(&document)
            .map_err(|err| InfraError::serialization(&path, err))?;
        std::fs::write(&path, bytes).map_err(|err| InfraError::io(&path, err))?;
        info!(
            target = TARGET,
            op = "rewrite",
            path = %path.display(),
            replaced,
            "backgrounds normalized"
        );
        report.fixed.push(path);
    }

    info!(
        target = TARGET,
        op = "normalize",
        result = "ok",
        scanned = report.scanned,
        fixed = report.fixed.len(),
        skipped = report.skipped,
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "background normalization finished"
    );

    Ok(report)
}

/// Replace shorthand `backgroundColor` values anywhere in `value`; returns the count.
pub fn normalize_value(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => map
            .iter_mut()
            .map(|(key, child)| {
                if key == BACKGROUND_KEY {
                    if let Some(css) = child.as_str().and_then(RowBackground::from_shorthand) {
                        *child = Value::String(css.as_str().to_string());
                        return 1;
                    }
                }
                normalize_value(child)
            })
            .sum(),
        Value::Array(items) => items.iter_mut().map(normalize_value).sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn every_shorthand_maps_to_an_editor_variable() {
        let mut rows = json!([
            {"backgroundColor": "primary"},
            {"backgroundColor": "success"},
            {"backgroundColor": "error"},
            {"backgroundColor": "primary-light"},
            {"backgroundColor": "warning"},
            {"backgroundColor": "background"},
            {"backgroundColor": "background-dark"},
            {"backgroundColor": ""},
            {"backgroundColor": "var(--color-primary-element)"},
        ]);

        assert_eq!(normalize_value(&mut rows), 7);
        let values: Vec<_> = rows
            .as_array()
            .expect("array")
            .iter()
            .map(|row| row["backgroundColor"].as_str().expect("string"))
            .collect();
        assert_eq!(
            values,
            vec![
                "var(--color-primary-element)",
                "var(--color-primary-element)",
                "var(--color-primary-element)",
                "var(--color-primary-element-light)",
                "var(--color-primary-element-light)",
                "var(--color-background-hover)",
                "var(--color-background-hover)",
                "",
                "var(--color-primary-element)",
            ]
        );
    }

    #[test]
    fn only_background_keys_are_touched() {
        let mut page = json!({
            "title": "primary",
            "layout": {"rows": [{"columns": 1, "backgroundColor": "warning", "widgets": [
                {"type": "text", "content": "background"}
            ]}]}
        });
        assert_eq!(normalize_value(&mut page), 1);
        assert_eq!(page["title"], "primary");
        assert_eq!(page["layout"]["rows"][0]["widgets"][0]["content"], "background");
    }

    #[test]
    fn tree_rewrite_touches_only_changed_files_and_keeps_key_order() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        stdfs::create_dir_all(root.join("news")).expect("dir");
        stdfs::write(
            root.join("news/news.json"),
            r#"{"id":"news","layout":{"columns":1,"rows":[{"columns":1,"backgroundColor":"primary","widgets":[]}]}}"#,
        )
        .expect("news");
        let clean = r#"{"id":"home","layout":{"rows":[{"backgroundColor":""}]}}"#;
        stdfs::write(root.join("home.json"), clean).expect("home");
        stdfs::write(root.join("notes.json"), "not json").expect("notes");
        stdfs::write(root.join("binary.json"), [0xff, 0xfe]).expect("binary");

        let report = normalize_tree(root).expect("normalize");
        assert_eq!(report.scanned, 4);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.fixed, vec![root.join("news/news.json")]);

        assert_eq!(
            stdfs::read_to_string(root.join("home.json")).expect("read"),
            clean
        );
        let rewritten = stdfs::read_to_string(root.join("news/news.json")).expect("read");
        assert!(rewritten.starts_with("{\n    \"id\": \"news\",\n    \"layout\""));
        assert!(rewritten.contains("\"backgroundColor\": \"var(--color-primary-element)\""));
    }
}
