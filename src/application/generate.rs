//! Emission of the demo content table onto disk.

use std::{path::Path, time::Instant};

use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    application::error::AppError,
    config::Settings,
    domain::{
        demo,
        error::DomainError,
        layout,
        page::DemoPage,
    },
    infra::{error::InfraError, fs::DiskTree, json},
};

const TARGET: &str = "intravox_demo::generate";
const UNIQUE_ID_NAMESPACE: &str = "intravox-demo";

/// Timestamps shared by every page written in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClock {
    /// `created` for pages that have no earlier copy on disk.
    pub created: i64,
    pub modified: i64,
}

impl RunClock {
    pub fn new(now: OffsetDateTime, backdate: std::time::Duration) -> Self {
        let modified = now.unix_timestamp();
        let backdate = i64::try_from(backdate.as_secs()).unwrap_or(i64::MAX);
        Self {
            created: modified.saturating_sub(backdate),
            modified,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Relative paths of every written page, sorted.
    pub pages: Vec<String>,
    pub asset_folders: usize,
    pub layout_warnings: usize,
}

/// Writes demo pages into one language tree.
#[derive(Debug, Clone)]
pub struct Generator {
    tree: DiskTree,
    language: String,
    clock: RunClock,
}

impl Generator {
    pub fn new(root: impl AsRef<Path>, language: impl Into<String>, clock: RunClock) -> Self {
        Self {
            tree: DiskTree::new(root.as_ref()),
            language: language.into(),
            clock,
        }
    }

    /// Emit `pages` in order. The first filesystem failure aborts the run.
    pub fn run(&self, pages: &[DemoPage]) -> Result<GenerateReport, AppError> {
        let started_at = Instant::now();
        let mut report = GenerateReport::default();

        for entry in pages {
            for issue in layout::inspect(&entry.rows) {
                warn!(
                    target = TARGET,
                    path = entry.path,
                    issue = %issue,
                    "layout rule violated"
                );
                report.layout_warnings += 1;
            }

            let has_assets = self.emit(entry)?;
            if has_assets {
                report.asset_folders += 1;
            }
            report.pages.push(entry.path.to_string());
        }

        report.pages.sort();

        info!(
            target = TARGET,
            op = "generate",
            result = "ok",
            root = %self.tree.root().display(),
            pages = report.pages.len(),
            asset_folders = report.asset_folders,
            layout_warnings = report.layout_warnings,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            paths = ?report.pages,
            "demo tree generated"
        );

        Ok(report)
    }

    /// Write one page; returns whether an asset folder was ensured for it.
    fn emit(&self, entry: &DemoPage) -> Result<bool, AppError> {
        let page_dir = Path::new(entry.path).parent().ok_or_else(|| {
            DomainError::invariant(format!("table path `{}` has no parent", entry.path))
        })?;
        self.tree.ensure_dir(page_dir)?;

        let created = self.existing_created(entry.path)?.unwrap_or(self.clock.created);
        let page = entry.to_page(
            unique_id(&self.language, entry.path),
            self.language.as_str(),
            created,
            self.clock.modified,
        );
        let bytes = json::to_document_bytes(&page)
            .map_err(|err| InfraError::serialization(self.tree.resolve(entry.path), err))?;
        let written = self.tree.write_document(entry.path, &bytes)?;

        info!(
            target = TARGET,
            op = "write",
            path = %written.display(),
            bytes = bytes.len(),
            "page written"
        );

        if demo::is_reserved(entry.path) {
            return Ok(false);
        }

        let folder = self.tree.ensure_asset_folder(page_dir)?;
        debug!(target = TARGET, op = "assets", path = %folder.display(), "asset folder ready");
        Ok(true)
    }

    /// `created` from an earlier run, if that file parses and carries one.
    fn existing_created(&self, relative: &str) -> Result<Option<i64>, AppError> {
        let Some(contents) = self.tree.read_document(relative)? else {
            return Ok(None);
        };
        let created = serde_json::from_slice::<Value>(&contents)
            .ok()
            .and_then(|value| value.get("created").and_then(Value::as_i64));
        Ok(created)
    }
}

/// Stable `page-<uuid>` identifier for a page in a language tree.
pub fn unique_id(language: &str, path: &str) -> String {
    let name = format!("{UNIQUE_ID_NAMESPACE}:{language}/{path}");
    format!("page-{}", Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()))
}

/// Generate the full demo table into the configured language tree.
pub fn generate(settings: &Settings) -> Result<GenerateReport, AppError> {
    let clock = RunClock::new(OffsetDateTime::now_utc(), settings.generation.backdate);
    let generator = Generator::new(
        settings.output.language_root(),
        settings.output.language.as_str(),
        clock,
    );
    generator.run(demo::demo_pages())
}

#[cfg(test)]
mod tests {
    use std::{fs, time::Duration};

    use tempfile::TempDir;
    use time::macros::datetime;

    use super::*;
    use crate::{
        domain::{
            page::row,
            widgets::{heading, text},
        },
        infra::fs::{ASSET_FOLDER_NAME, MEDIA_MARKER_NAME},
    };

    fn clock() -> RunClock {
        RunClock::new(datetime!(2025-11-20 12:00 UTC), Duration::from_secs(30 * 86_400))
    }

    #[test]
    fn clock_backdates_created() {
        let clock = clock();
        assert_eq!(clock.modified, 1_763_640_000);
        assert_eq!(clock.modified - clock.created, 30 * 86_400);
    }

    #[test]
    fn unique_ids_are_stable_per_language_and_path() {
        let about = unique_id("en", "about/about.json");
        assert!(about.starts_with("page-"));
        assert_eq!(about.len(), "page-".len() + 36);
        assert_eq!(about, unique_id("en", "about/about.json"));
        assert_ne!(about, unique_id("nl", "about/about.json"));
        assert_ne!(about, unique_id("en", "team/team.json"));
    }

    #[test]
    fn existing_created_is_kept() {
        let dir = TempDir::new().expect("temp dir");
        let generator = Generator::new(dir.path(), "en", clock());
        fs::create_dir_all(dir.path().join("faq")).expect("dir");
        fs::write(dir.path().join("faq/faq.json"), r#"{"created": 42}"#).expect("seed");

        let entries = vec![DemoPage::new(
            "faq/faq.json",
            "faq",
            "FAQ",
            vec![row(vec![heading("FAQ", 1).at(1)])],
        )];
        generator.run(&entries).expect("generate");

        let written: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("faq/faq.json")).expect("read"),
        )
        .expect("parse");
        assert_eq!(written["created"], 42);
        assert_eq!(written["modified"], clock().modified);
    }

    #[test]
    fn unparsable_existing_file_falls_back_to_run_clock() {
        let dir = TempDir::new().expect("temp dir");
        let generator = Generator::new(dir.path(), "en", clock());
        fs::write(dir.path().join("home.json"), "not json").expect("seed");

        let entries = vec![DemoPage::new("home.json", "home", "Home", vec![])];
        generator.run(&entries).expect("generate");

        let written: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("home.json")).expect("read"),
        )
        .expect("parse");
        assert_eq!(written["created"], clock().created);
    }

    #[test]
    fn non_utf8_existing_file_is_overwritten() {
        let dir = TempDir::new().expect("temp dir");
        let generator = Generator::new(dir.path(), "en", clock());
        fs::create_dir_all(dir.path().join("faq")).expect("dir");
        fs::write(dir.path().join("faq/faq.json"), [0xff, 0xfe, 0x00]).expect("seed");

        let entries = vec![DemoPage::new("faq/faq.json", "faq", "FAQ", vec![])];
        generator.run(&entries).expect("generate");

        let written: Value =
            serde_json::from_slice(&fs::read(dir.path().join("faq/faq.json")).expect("read"))
                .expect("parse");
        assert_eq!(written["id"], "faq");
        assert_eq!(written["created"], clock().created);
    }

    #[test]
    fn reserved_documents_get_no_asset_folder() {
        let dir = TempDir::new().expect("temp dir");
        let generator = Generator::new(dir.path(), "en", clock());
        let entries = vec![
            DemoPage::new("home.json", "home", "Home", vec![]),
            DemoPage::new("news/news.json", "news", "News", vec![row(vec![text("x")])]),
        ];

        let report = generator.run(&entries).expect("generate");
        assert_eq!(report.pages, vec!["home.json", "news/news.json"]);
        assert_eq!(report.asset_folders, 1);
        assert!(!dir.path().join(ASSET_FOLDER_NAME).exists());
        assert!(
            dir.path()
                .join("news")
                .join(ASSET_FOLDER_NAME)
                .join(MEDIA_MARKER_NAME)
                .is_file()
        );
    }

    #[test]
    fn layout_problems_are_counted_but_written() {
        let dir = TempDir::new().expect("temp dir");
        let generator = Generator::new(dir.path(), "en", clock());
        let entries = vec![DemoPage::new(
            "press/press.json",
            "press",
            "Press",
            vec![row(vec![text("a").at_column(2, 1)])],
        )];

        let report = generator.run(&entries).expect("generate");
        assert_eq!(report.layout_warnings, 1);
        assert!(dir.path().join("press/press.json").is_file());
    }
}
