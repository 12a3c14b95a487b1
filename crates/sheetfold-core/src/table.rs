//! Rectangular tables, sheet tagging, and row-wise stacking

use std::collections::HashMap;

use crate::cell::CellValue;

/// Name of the column recording each row's originating sheet
pub const SHEET_NAME_COLUMN: &str = "Sheet Name";

/// An ordered set of named columns with row-major cell data.
///
/// Every row holds exactly one cell per column; shorter rows are padded
/// with [`CellValue::Empty`] on insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, in order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has neither columns nor rows
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a data row, padding it to the column count
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Set every row's cell in the named column to `value`, appending the
    /// column if it does not exist yet. The column is present afterwards
    /// even when the table has zero rows.
    pub fn set_column(&mut self, name: &str, value: CellValue) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.clone();
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value.clone());
                }
            }
        }
    }
}

/// A table paired with the name of the sheet it was read from
#[derive(Debug, Clone)]
pub struct SheetTable {
    /// Sheet name as recorded in the workbook
    pub name: String,
    /// The sheet's data
    pub table: Table,
}

impl SheetTable {
    /// Consume the sheet, tagging every row with the sheet name.
    ///
    /// A source column already named `Sheet Name` is overwritten rather
    /// than duplicated.
    pub fn tagged(mut self) -> Table {
        let value = CellValue::Text(self.name);
        self.table.set_column(SHEET_NAME_COLUMN, value);
        self.table
    }
}

/// Stack tables row-wise into one table.
///
/// The output column set is the union of all input columns in
/// first-appearance order; cells for columns a given table lacks are
/// [`CellValue::Empty`]. Input order and intra-table row order are
/// preserved.
pub fn stack(tables: Vec<Table>) -> Table {
    let mut columns: Vec<String> = Vec::new();
    for table in &tables {
        for column in table.columns() {
            if !columns.iter().any(|c| c == column) {
                columns.push(column.clone());
            }
        }
    }

    let index: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    let width = columns.len();

    let mut rows = Vec::with_capacity(tables.iter().map(Table::row_count).sum());
    for table in &tables {
        let targets: Vec<Option<usize>> = table
            .columns()
            .iter()
            .map(|c| index.get(c.as_str()).copied())
            .collect();

        for row in table.rows() {
            let mut out = vec![CellValue::Empty; width];
            for (value, target) in row.iter().zip(&targets) {
                if let Some(dst) = *target {
                    out[dst] = value.clone();
                }
            }
            rows.push(out);
        }
    }

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|v| CellValue::text(*v)).collect());
        }
        t
    }

    #[test]
    fn push_row_pads_short_rows() {
        let mut t = Table::new(vec!["A".into(), "B".into()]);
        t.push_row(vec![CellValue::text("x")]);
        assert_eq!(t.rows()[0], vec![CellValue::text("x"), CellValue::Empty]);
    }

    #[test]
    fn set_column_appends_and_fills() {
        let mut t = table(&["A"], &[&["1"], &["2"]]);
        t.set_column(SHEET_NAME_COLUMN, CellValue::text("Q1"));
        assert_eq!(t.columns(), ["A", "Sheet Name"]);
        assert_eq!(t.rows()[1], vec![CellValue::text("2"), CellValue::text("Q1")]);
    }

    #[test]
    fn set_column_overwrites_existing() {
        let mut t = table(&["A", "Sheet Name"], &[&["1", "old"]]);
        t.set_column(SHEET_NAME_COLUMN, CellValue::text("new"));
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.rows()[0][1], CellValue::text("new"));
    }

    #[test]
    fn set_column_on_empty_table_still_adds_column() {
        let mut t = Table::empty();
        t.set_column(SHEET_NAME_COLUMN, CellValue::text("Q1"));
        assert_eq!(t.columns(), ["Sheet Name"]);
        assert_eq!(t.row_count(), 0);
    }

    #[test]
    fn stack_preserves_order_and_row_counts() {
        let a = table(&["A"], &[&["a1"], &["a2"]]);
        let b = table(&["A"], &[&["b1"]]);
        let stacked = stack(vec![a, b]);
        assert_eq!(stacked.row_count(), 3);
        assert_eq!(stacked.rows()[0][0], CellValue::text("a1"));
        assert_eq!(stacked.rows()[2][0], CellValue::text("b1"));
    }

    #[test]
    fn stack_unions_columns_by_first_appearance() {
        let a = table(&["A", "B"], &[&["a", "b"]]);
        let b = table(&["B", "C"], &[&["bb", "cc"]]);
        let stacked = stack(vec![a, b]);

        assert_eq!(stacked.columns(), ["A", "B", "C"]);
        assert_eq!(
            stacked.rows()[0],
            vec![CellValue::text("a"), CellValue::text("b"), CellValue::Empty]
        );
        assert_eq!(
            stacked.rows()[1],
            vec![CellValue::Empty, CellValue::text("bb"), CellValue::text("cc")]
        );
    }

    #[test]
    fn tagged_appends_sheet_name_last() {
        let sheet = SheetTable {
            name: "Totals".into(),
            table: table(&["A"], &[&["1"]]),
        };
        let tagged = sheet.tagged();
        assert_eq!(tagged.columns(), ["A", "Sheet Name"]);
        assert_eq!(tagged.rows()[0][1], CellValue::text("Totals"));
    }
}
