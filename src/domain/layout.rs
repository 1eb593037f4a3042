//! Layout rules the renderer relies on but the constructors never enforce.

use std::collections::HashSet;

use thiserror::Error;

use super::{page::Row, widgets::Widget};

const MAX_HEADING_LEVEL: u8 = 6;

/// A rule violation inside one row. `row` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutIssue {
    #[error("row {row}: {kind} widget sits in column {column} but the row declares {columns}")]
    ColumnOutOfRange {
        row: usize,
        kind: &'static str,
        column: u32,
        columns: u32,
    },
    #[error("row {row}: column {column} has more than one widget at order {order}")]
    DuplicateOrder { row: usize, column: u32, order: u32 },
    #[error("row {row}: heading level {level} is outside 1-6")]
    HeadingLevel { row: usize, level: u8 },
}

/// Collect every issue across the given rows, in row order.
pub fn inspect(rows: &[Row]) -> Vec<LayoutIssue> {
    rows.iter()
        .enumerate()
        .flat_map(|(index, row)| inspect_row(index + 1, row))
        .collect()
}

fn inspect_row(number: usize, row: &Row) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for widget in &row.widgets {
        let column = widget.column();
        if column == 0 || column > row.columns {
            issues.push(LayoutIssue::ColumnOutOfRange {
                row: number,
                kind: widget.kind(),
                column,
                columns: row.columns,
            });
        }

        let slot = (column, widget.order());
        if !seen.insert(slot) && reported.insert(slot) {
            issues.push(LayoutIssue::DuplicateOrder {
                row: number,
                column,
                order: widget.order(),
            });
        }

        if let Widget::Heading { level, .. } = widget {
            if !(1..=MAX_HEADING_LEVEL).contains(level) {
                issues.push(LayoutIssue::HeadingLevel {
                    row: number,
                    level: *level,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        page::{create_row, row},
        types::RowBackground,
        widgets::{divider, heading, text},
    };

    #[test]
    fn well_formed_rows_have_no_issues() {
        let rows = vec![
            row(vec![heading("A", 1).at(1), text("b").at(2)]),
            create_row(
                vec![
                    heading("Left", 2).at_column(1, 1),
                    heading("Right", 2).at_column(2, 1),
                ],
                RowBackground::None,
                2,
            ),
        ];
        assert!(inspect(&rows).is_empty());
    }

    #[test]
    fn column_beyond_row_is_reported() {
        let rows = vec![create_row(
            vec![text("x").at_column(3, 1)],
            RowBackground::None,
            2,
        )];
        assert_eq!(
            inspect(&rows),
            vec![LayoutIssue::ColumnOutOfRange {
                row: 1,
                kind: "text",
                column: 3,
                columns: 2,
            }]
        );
    }

    #[test]
    fn duplicate_order_is_reported_once_per_slot() {
        let rows = vec![
            row(vec![divider().at(1)]),
            row(vec![text("a").at(2), text("b").at(2), text("c").at(2)]),
        ];
        let issues = inspect(&rows);
        assert_eq!(
            issues,
            vec![LayoutIssue::DuplicateOrder {
                row: 2,
                column: 1,
                order: 2,
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "row 2: column 1 has more than one widget at order 2"
        );
    }

    #[test]
    fn heading_level_outside_range_is_reported() {
        let rows = vec![row(vec![heading("zero", 0).at(1), heading("seven", 7).at(2)])];
        assert_eq!(
            inspect(&rows),
            vec![
                LayoutIssue::HeadingLevel { row: 1, level: 0 },
                LayoutIssue::HeadingLevel { row: 1, level: 7 },
            ]
        );
    }
}
