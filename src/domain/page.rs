use serde::{Deserialize, Serialize};

use super::{types::RowBackground, widgets::Widget};

/// A complete page document as the IntraVox renderer reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub unique_id: String,
    pub title: String,
    pub language: String,
    pub created: i64,
    pub modified: i64,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub columns: u32,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default = "single_column")]
    pub columns: u32,
    #[serde(rename = "backgroundColor", default)]
    pub background: RowBackground,
    pub widgets: Vec<Widget>,
}

fn single_column() -> u32 {
    1
}

/// Single-column row without a background.
pub fn row(widgets: Vec<Widget>) -> Row {
    create_row(widgets, RowBackground::None, 1)
}

/// Row spanning `columns` with the given background; widgets keep their slots.
pub fn create_row(widgets: Vec<Widget>, background: RowBackground, columns: u32) -> Row {
    Row {
        columns,
        background,
        widgets,
    }
}

/// Static content for one page, keyed by its path relative to the language root.
#[derive(Debug, Clone)]
pub struct DemoPage {
    pub path: &'static str,
    pub id: &'static str,
    pub title: &'static str,
    pub rows: Vec<Row>,
}

impl DemoPage {
    pub fn new(path: &'static str, id: &'static str, title: &'static str, rows: Vec<Row>) -> Self {
        Self {
            path,
            id,
            title,
            rows,
        }
    }

    /// Attach identity and timestamps, producing the document that gets written.
    pub fn to_page(
        &self,
        unique_id: impl Into<String>,
        language: impl Into<String>,
        created: i64,
        modified: i64,
    ) -> Page {
        Page {
            id: self.id.to_string(),
            unique_id: unique_id.into(),
            title: self.title.to_string(),
            language: language.into(),
            created,
            modified,
            layout: Layout {
                columns: 1,
                rows: self.rows.clone(),
            },
        }
    }
}
