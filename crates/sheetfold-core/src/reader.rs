//! Workbook reader

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::table::{SheetTable, Table};

/// Reads every sheet of a workbook into tables
pub struct WorkbookReader;

impl WorkbookReader {
    /// Read all sheets, in workbook order, using a 1-based header row.
    ///
    /// Row `header_row` of each sheet supplies the column names; rows
    /// above it are discarded and rows below it become data. A header row
    /// beyond a sheet's last row yields an empty table for that sheet.
    pub fn read_file<P: AsRef<Path>>(path: P, header_row: u32) -> Result<Vec<SheetTable>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let mut workbook = open_workbook_auto(path).map_err(|e| Error::from_codec(path, e))?;
        let sheet_names = workbook.sheet_names().to_owned();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| Error::from_codec(path, e))?;
            let table = Self::range_to_table(&range, header_row);
            tracing::debug!("Read sheet '{name}': {} rows", table.row_count());
            sheets.push(SheetTable { name, table });
        }

        Ok(sheets)
    }

    /// Convert a sheet's used range into a table, consuming the header row
    fn range_to_table(range: &Range<Data>, header_row: u32) -> Table {
        let rows: Vec<&[Data]> = range.rows().collect();
        let header_idx = header_row.saturating_sub(1) as usize;
        if header_idx >= rows.len() {
            return Table::empty();
        }

        // Data rows can be wider than the header row; the extra cells get
        // positional column names so the union stays well defined.
        let width = rows[header_idx..]
            .iter()
            .map(|row| row.len())
            .max()
            .unwrap_or(0);

        let mut table = Table::new(Self::header_names(rows[header_idx], width));
        for row in &rows[header_idx + 1..] {
            table.push_row(row.iter().map(CellValue::from).collect());
        }
        table
    }

    /// Column names from the header cells; blank cells get positional names
    fn header_names(header: &[Data], width: usize) -> Vec<String> {
        (0..width)
            .map(|i| {
                let text = header
                    .get(i)
                    .map(|cell| CellValue::from(cell).to_string())
                    .unwrap_or_default();
                if text.is_empty() {
                    format!("Column{}", i + 1)
                } else {
                    text
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_render_non_text_cells() {
        let header = vec![
            Data::String("Name".into()),
            Data::Float(2023.0),
            Data::Empty,
        ];
        assert_eq!(
            WorkbookReader::header_names(&header, 4),
            ["Name", "2023", "Column3", "Column4"]
        );
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = WorkbookReader::read_file("no_such_workbook.xlsx", 1).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
