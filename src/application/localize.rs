//! Copies one language tree into another with fresh page identifiers.
//!
//! Folder names are translated from Dutch to English on the way; file names
//! are kept. Internal `#page-…` links follow their pages to the new IDs.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::{
    application::{check::NON_PAGE_DOCUMENTS, error::AppError},
    config,
    domain::error::DomainError,
    infra::{
        error::InfraError,
        fs::{json_files, read_optional, walk_error},
        json,
    },
};

const TARGET: &str = "intravox_demo::copy_language";
const NAVIGATION_DOCUMENT: &str = "navigation.json";
const MANIFEST_DOCUMENT: &str = "manifest.json";
const PAGE_LINK_PREFIX: &str = "#page-";

const FOLDER_TRANSLATIONS: &[(&str, &str)] = &[
    ("afdeling", "departments"),
    ("afdelingen", "departments"),
    ("documentatie", "documentation"),
    ("functies", "features"),
    ("handleidingen", "guides"),
    ("installatie", "installation"),
    ("klanten", "customers"),
    ("nieuws", "news"),
    ("evenementen", "events"),
    ("over-intravox", "about"),
    ("prijzen", "pricing"),
    ("campagnes", "campaigns"),
    ("vacatures", "jobs"),
    ("systemen", "systems"),
    ("navigatie", "navigation"),
];

#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    /// Page files rewritten in the target tree.
    pub pages: usize,
    /// Source identifiers that received a new one.
    pub mapped: usize,
    pub files_copied: usize,
}

/// English name for a Dutch content folder; unknown names pass through.
pub fn translate_folder(name: &str) -> &str {
    FOLDER_TRANSLATIONS
        .iter()
        .find(|(dutch, _)| *dutch == name)
        .map_or(name, |(_, english)| *english)
}

/// Replace the `to` tree under `directory` with a re-identified copy of `from`.
pub fn copy_language(directory: &Path, from: &str, to: &str) -> Result<CopyReport, AppError> {
    for (key, language) in [("from", from), ("to", to)] {
        config::validate_language(key, language)
            .map_err(|err| AppError::validation(err.to_string()))?;
    }
    if from == to {
        return Err(DomainError::validation(format!(
            "source and target language are both `{from}`"
        ))
        .into());
    }

    let source = directory.join(from);
    let target = directory.join(to);
    if !source.is_dir() {
        return Err(AppError::validation(format!(
            "source tree `{}` does not exist",
            source.display()
        )));
    }

    let started_at = Instant::now();
    let ids = map_unique_ids(&source)?;
    clear_target(&target)?;
    let files_copied = copy_tree(&source, &target)?;

    let mut pages = 0;
    for path in json_files(&target, &NON_PAGE_DOCUMENTS)? {
        if rewrite_document(&path, &ids, from, to)? {
            pages += 1;
        }
    }
    let navigation = target.join(NAVIGATION_DOCUMENT);
    if navigation.is_file() {
        rewrite_document(&navigation, &ids, from, to)?;
    }

    let manifest = target.join(MANIFEST_DOCUMENT);
    if manifest.is_file() {
        fs::remove_file(&manifest).map_err(|err| InfraError::io(&manifest, err))?;
    }

    let report = CopyReport {
        pages,
        mapped: ids.len(),
        files_copied,
    };
    info!(
        target = TARGET,
        op = "copy",
        result = "ok",
        from,
        to,
        pages = report.pages,
        mapped = report.mapped,
        files = report.files_copied,
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "language tree copied"
    );
    Ok(report)
}

/// Rewrite identifiers, internal links and language tags anywhere in `value`.
pub fn relink(value: &mut Value, ids: &HashMap<String, String>, from: &str, to: &str) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                match replacement(key, child, ids, from, to) {
                    Some(updated) => *child = Value::String(updated),
                    None => relink(child, ids, from, to),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                relink(item, ids, from, to);
            }
        }
        _ => {}
    }
}

fn replacement(
    key: &str,
    value: &Value,
    ids: &HashMap<String, String>,
    from: &str,
    to: &str,
) -> Option<String> {
    let text = value.as_str()?;
    match key {
        "uniqueId" => ids.get(text).cloned(),
        "url" if text.starts_with(PAGE_LINK_PREFIX) => {
            ids.get(&text[1..]).map(|fresh| format!("#{fresh}"))
        }
        "language" if text == from => Some(to.to_string()),
        _ => None,
    }
}

fn map_unique_ids(source: &Path) -> Result<HashMap<String, String>, AppError> {
    let mut ids = HashMap::new();
    for path in json_files(source, &NON_PAGE_DOCUMENTS)? {
        let Some(document) = read_document(&path)? else {
            continue;
        };
        if let Some(id) = document.get("uniqueId").and_then(Value::as_str) {
            let fresh = format!("page-{}", Uuid::new_v4());
            debug!(target = TARGET, path = %path.display(), from = id, to = %fresh, "identifier mapped");
            ids.insert(id.to_string(), fresh);
        }
    }
    Ok(ids)
}

/// Remove subdirectories and JSON documents; other root files stay.
fn clear_target(target: &Path) -> Result<(), AppError> {
    if !target.exists() {
        fs::create_dir_all(target).map_err(|err| InfraError::io(target, err))?;
        return Ok(());
    }

    let entries = fs::read_dir(target).map_err(|err| InfraError::io(target, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| InfraError::io(target, err))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| InfraError::io(&path, err))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|err| InfraError::io(&path, err))?;
        } else if is_json(&path) {
            fs::remove_file(&path).map_err(|err| InfraError::io(&path, err))?;
        }
    }
    Ok(())
}

/// Copy `source` into `target`, translating folder names. Root files other than JSON are skipped.
fn copy_tree(source: &Path, target: &Path) -> Result<usize, AppError> {
    let mut copied = 0;
    let walker = WalkDir::new(source).min_depth(1).sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|err| walk_error(source, err))?;
        let is_dir = entry.file_type().is_dir();
        if !is_dir && entry.depth() == 1 && !is_json(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(source).map_err(|err| {
            AppError::unexpected(format!("walk left `{}`: {err}", source.display()))
        })?;
        let destination = target.join(translate_relative(relative, is_dir));

        if is_dir {
            fs::create_dir_all(&destination).map_err(|err| InfraError::io(&destination, err))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &destination)
                .map_err(|err| InfraError::io(&destination, err))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn translate_relative(relative: &Path, is_dir: bool) -> PathBuf {
    let count = relative.components().count();
    relative
        .components()
        .enumerate()
        .map(|(index, component)| {
            let name = component.as_os_str();
            let is_file_name = !is_dir && index + 1 == count;
            match name.to_str() {
                Some(folder) if !is_file_name => PathBuf::from(translate_folder(folder)),
                _ => PathBuf::from(name),
            }
        })
        .collect()
}

/// Returns whether the file parsed and was rewritten.
fn rewrite_document(
    path: &Path,
    ids: &HashMap<String, String>,
    from: &str,
    to: &str,
) -> Result<bool, AppError> {
    let Some(mut document) = read_document(path)? else {
        return Ok(false);
    };
    relink(&mut document, ids, from, to);
    let bytes =
        json::to_document_bytes(&document).map_err(|err| InfraError::serialization(path, err))?;
    fs::write(path, bytes).map_err(|err| InfraError::io(path, err))?;
    debug!(target = TARGET, op = "rewrite", path = %path.display(), "document updated");
    Ok(true)
}

/// Parsed JSON document, or `None` when missing or invalid (the latter is logged).
fn read_document(path: &Path) -> Result<Option<Value>, AppError> {
    let Some(contents) = read_optional(path)? else {
        return Ok(None);
    };
    match serde_json::from_slice(&contents) {
        Ok(document) => Ok(Some(document)),
        Err(err) => {
            warn!(
                target = TARGET,
                path = %path.display(),
                error = %err,
                "skipping invalid JSON"
            );
            Ok(None)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "json")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write(path: PathBuf, value: &Value) {
        fs::create_dir_all(path.parent().expect("parent")).expect("dirs");
        fs::write(path, serde_json::to_vec(value).expect("encode")).expect("write");
    }

    fn read(path: PathBuf) -> Value {
        serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("parse")
    }

    #[test]
    fn folders_translate_and_unknown_names_pass_through() {
        assert_eq!(translate_folder("nieuws"), "news");
        assert_eq!(translate_folder("over-intravox"), "about");
        assert_eq!(translate_folder("vacatures"), "jobs");
        assert_eq!(translate_folder("marketing"), "marketing");
        assert_eq!(
            translate_relative(Path::new("nieuws/evenementen/nieuws.json"), false),
            PathBuf::from("news/events/nieuws.json")
        );
        assert_eq!(
            translate_relative(Path::new("klanten/afdeling"), true),
            PathBuf::from("customers/departments")
        );
    }

    #[test]
    fn relink_rewrites_ids_links_and_language() {
        let ids = HashMap::from([("page-old".to_string(), "page-new".to_string())]);
        let mut page = json!({
            "uniqueId": "page-old",
            "language": "nl",
            "layout": {"rows": [{"widgets": [{"type": "links", "items": [
                {"title": "Home", "url": "#page-old"},
                {"title": "Gone", "url": "#page-missing"},
                {"title": "Web", "url": "https://example.org"}
            ]}]}]}
        });

        relink(&mut page, &ids, "nl", "en");

        assert_eq!(page["uniqueId"], "page-new");
        assert_eq!(page["language"], "en");
        let items = &page["layout"]["rows"][0]["widgets"][0]["items"];
        assert_eq!(items[0]["url"], "#page-new");
        assert_eq!(items[1]["url"], "#page-missing");
        assert_eq!(items[2]["url"], "https://example.org");
    }

    #[test]
    fn copy_replaces_target_tree() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        write(
            root.join("nl/home.json"),
            &json!({"uniqueId": "page-home", "language": "nl"}),
        );
        write(
            root.join("nl/nieuws/nieuws.json"),
            &json!({"uniqueId": "page-news", "language": "nl", "url": "#page-home"}),
        );
        write(
            root.join("nl/navigation.json"),
            &json!({"items": [{"uniqueId": "page-news", "url": "#page-news"}]}),
        );
        write(root.join("nl/manifest.json"), &json!({"version": 1}));
        fs::write(root.join("nl/readme.txt"), "notes").expect("readme");
        fs::create_dir_all(root.join("nl/nieuws/📷 images")).expect("assets");
        fs::write(root.join("nl/nieuws/📷 images/.nomedia"), "").expect("marker");
        write(root.join("en/stale/stale.json"), &json!({"uniqueId": "page-stale"}));
        fs::write(root.join("en/keep.txt"), "kept").expect("keep");

        let report = copy_language(root, "nl", "en").expect("copy");
        assert_eq!(report.mapped, 2);
        assert_eq!(report.pages, 2);

        let en = root.join("en");
        assert!(!en.join("stale").exists());
        assert!(!en.join("manifest.json").exists());
        assert!(!en.join("readme.txt").exists());
        assert!(en.join("keep.txt").is_file());
        assert!(en.join("news/📷 images/.nomedia").is_file());

        let home = read(en.join("home.json"));
        let news = read(en.join("news/nieuws.json"));
        let navigation = read(en.join("navigation.json"));
        let home_id = home["uniqueId"].as_str().expect("home id").to_string();
        let news_id = news["uniqueId"].as_str().expect("news id").to_string();

        assert!(home_id.starts_with("page-") && home_id != "page-home");
        assert_eq!(news["language"], "en");
        assert_eq!(news["url"], format!("#{home_id}"));
        assert_eq!(navigation["items"][0]["uniqueId"], news_id.as_str());
        assert_eq!(navigation["items"][0]["url"], format!("#{news_id}"));

        let source = read(root.join("nl/nieuws/nieuws.json"));
        assert_eq!(source["uniqueId"], "page-news");
    }

    #[test]
    fn copy_rejects_identical_or_missing_languages() {
        let dir = TempDir::new().expect("temp dir");
        assert!(matches!(
            copy_language(dir.path(), "nl", "nl"),
            Err(AppError::Domain(DomainError::Validation { .. }))
        ));
        assert!(matches!(
            copy_language(dir.path(), "de", "en"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            copy_language(dir.path(), "../nl", "en"),
            Err(AppError::Validation(_))
        ));
    }
}
