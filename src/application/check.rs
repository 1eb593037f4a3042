//! Layout checks over the demo table or a tree already on disk.

use std::{fmt, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    application::error::AppError,
    domain::{
        layout::{self, LayoutIssue},
        page::{DemoPage, Row},
    },
    infra::fs,
};

const TARGET: &str = "intravox_demo::check";

/// Files in a language tree that are not pages.
pub const NON_PAGE_DOCUMENTS: [&str; 3] = ["navigation.json", "footer.json", "manifest.json"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIssue {
    pub page: String,
    pub issue: LayoutIssue,
}

impl fmt::Display for PageIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.page, self.issue)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub pages: usize,
    /// Files on disk that could not be read as pages.
    pub skipped: usize,
    pub issues: Vec<PageIssue>,
}

#[derive(Debug, Deserialize)]
struct StoredPage {
    layout: StoredLayout,
}

#[derive(Debug, Deserialize)]
struct StoredLayout {
    rows: Vec<Row>,
}

pub fn check_table(pages: &[DemoPage]) -> CheckReport {
    let issues = pages
        .iter()
        .flat_map(|page| attach(page.path, layout::inspect(&page.rows)))
        .collect();
    CheckReport {
        pages: pages.len(),
        skipped: 0,
        issues,
    }
}

/// Check every page file under `root`, skipping documents that are not pages.
pub fn check_tree(root: &Path) -> Result<CheckReport, AppError> {
    let mut report = CheckReport::default();

    for path in fs::json_files(root, &NON_PAGE_DOCUMENTS)? {
        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string();
        let Some(contents) = fs::read_optional(&path)? else {
            continue;
        };
        match serde_json::from_slice::<StoredPage>(&contents) {
            Ok(page) => {
                report.pages += 1;
                let issues = layout::inspect(&page.layout.rows);
                report.issues.extend(attach(&relative, issues));
            }
            Err(err) => {
                warn!(
                    target = TARGET,
                    path = %relative,
                    error = %err,
                    "skipping file that is not a page document"
                );
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Log every issue and fail when there is at least one.
pub fn enforce(report: &CheckReport) -> Result<(), AppError> {
    for issue in &report.issues {
        warn!(target = TARGET, issue = %issue, "layout rule violated");
    }

    let result = if report.issues.is_empty() { "ok" } else { "failed" };
    info!(
        target = TARGET,
        op = "check",
        result,
        pages = report.pages,
        skipped = report.skipped,
        issues = report.issues.len(),
        "layout check finished"
    );

    if report.issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} layout issue(s) across {} page(s)",
            report.issues.len(),
            report.pages
        )))
    }
}

fn attach(page: &str, issues: Vec<LayoutIssue>) -> impl Iterator<Item = PageIssue> + '_ {
    issues.into_iter().map(move |issue| PageIssue {
        page: page.to_string(),
        issue,
    })
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::{
        demo::demo_pages,
        page::row,
        widgets::{heading, text},
    };

    #[test]
    fn built_in_table_is_clean() {
        let report = check_table(demo_pages());
        assert_eq!(report.pages, 16);
        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert!(enforce(&report).is_ok());
    }

    #[test]
    fn table_issues_carry_their_page() {
        let pages = vec![DemoPage::new(
            "events/events.json",
            "events",
            "Events",
            vec![row(vec![heading("Big", 9).at(1)])],
        )];
        let report = check_table(&pages);
        assert_eq!(
            report.issues,
            vec![PageIssue {
                page: "events/events.json".to_string(),
                issue: LayoutIssue::HeadingLevel { row: 1, level: 9 },
            }]
        );
        assert_eq!(
            report.issues[0].to_string(),
            "events/events.json: row 1: heading level 9 is outside 1-6"
        );
        assert!(matches!(enforce(&report), Err(AppError::Validation(_))));
    }

    #[test]
    fn tree_check_reads_pages_and_skips_other_documents() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        stdfs::create_dir_all(root.join("contact")).expect("dir");
        stdfs::write(
            root.join("contact/contact.json"),
            r#"{"layout": {"columns": 1, "rows": [
                {"columns": 1, "backgroundColor": "", "widgets": [
                    {"type": "text", "column": 2, "order": 1, "content": "x"}
                ]}
            ]}}"#,
        )
        .expect("page");
        stdfs::write(root.join("navigation.json"), r#"{"items": []}"#).expect("nav");
        stdfs::write(root.join("broken.json"), "{").expect("broken");

        let report = check_tree(root).expect("check");
        assert_eq!(report.pages, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].page, "contact/contact.json");
        assert!(matches!(
            report.issues[0].issue,
            LayoutIssue::ColumnOutOfRange { column: 2, columns: 1, .. }
        ));
    }

    #[test]
    fn clean_tree_passes() {
        let dir = TempDir::new().expect("temp dir");
        let page = DemoPage::new("home.json", "home", "Home", vec![row(vec![text("hi")])])
            .to_page("page-x", "en", 1, 2);
        stdfs::write(
            dir.path().join("home.json"),
            serde_json::to_vec(&page).expect("encode"),
        )
        .expect("write");

        let report = check_tree(dir.path()).expect("check");
        assert_eq!(report.pages, 1);
        assert!(enforce(&report).is_ok());
    }
}
