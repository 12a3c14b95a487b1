//! Single-sheet XLSX writer

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::table::Table;

/// Writes a consolidated table as a one-sheet workbook
pub struct XlsxTableWriter;

impl XlsxTableWriter {
    /// Write `table` to `path`: header row from the column names, one
    /// spreadsheet row per data row, no index column.
    pub fn write_file(table: &Table, path: &Path) -> Result<()> {
        let buffer = Self::to_buffer(table)?;
        fs::write(path, buffer).map_err(|e| Error::from_io(path, e))?;
        Ok(())
    }

    /// Serialize the workbook in memory so a failure leaves no partial file
    pub fn to_buffer(table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

        for (col, name) in table.columns().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
        }

        for (r, row) in table.rows().iter().enumerate() {
            let r = r as u32 + 1;
            for (c, value) in row.iter().enumerate() {
                let c = c as u16;
                match value {
                    CellValue::Empty => {}
                    CellValue::Number(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string(r, c, s)?;
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(r, c, *b)?;
                    }
                    CellValue::DateTime(dt) => {
                        worksheet.write_datetime_with_format(r, c, dt, &date_format)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
