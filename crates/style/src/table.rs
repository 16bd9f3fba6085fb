use crate::page::PageGeometry;
use crate::theme::ThemeError;
use crate::TextAlign;
use serde::{Deserialize, Serialize};

/// One fixed-width column of the line-item table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub label: String,
    pub width: f32,
    #[serde(default)]
    pub align: TextAlign,
}

impl ColumnSpec {
    pub fn new(label: &str, width: f32, align: TextAlign) -> Self {
        Self { label: label.to_string(), width, align }
    }
}

/// The line-item table geometry. Column x-offsets are derived, not stored:
/// each column starts after the accumulated widths of its predecessors plus
/// one inter-column gap per boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub gap: f32,
    pub header_height: f32,
    pub min_row_height: f32,
    pub cell_padding: f32,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new("Item", 150.0, TextAlign::Left),
                ColumnSpec::new("Size", 60.0, TextAlign::Left),
                ColumnSpec::new("Color", 70.0, TextAlign::Left),
                ColumnSpec::new("Qty", 40.0, TextAlign::Right),
                ColumnSpec::new("Price", 80.0, TextAlign::Right),
                ColumnSpec::new("Total", 66.0, TextAlign::Right),
            ],
            gap: 8.0,
            header_height: 26.0,
            min_row_height: 24.0,
            cell_padding: 5.0,
        }
    }
}

impl TableSpec {
    /// Absolute x-offset of each column, starting at the left margin.
    pub fn offsets(&self, page: &PageGeometry) -> Vec<f32> {
        let mut x = page.margin;
        self.columns
            .iter()
            .map(|col| {
                let start = x;
                x += col.width + self.gap;
                start
            })
            .collect()
    }

    /// The layout invariant from the column geometry: the last column must
    /// end inside the printable area. Checked when the theme is constructed
    /// so per-render code never has to.
    pub fn validate(&self, page: &PageGeometry) -> Result<(), ThemeError> {
        if self.columns.is_empty() {
            return Err(ThemeError::NoColumns);
        }
        let offsets = self.offsets(page);
        let last = self.columns.len() - 1;
        let table_right = offsets[last] + self.columns[last].width;
        if table_right > page.content_right() {
            return Err(ThemeError::ColumnsOverflow {
                table_right,
                printable_right: page.content_right(),
            });
        }
        Ok(())
    }
}
