//! # sheetfold-core
//!
//! Engine for consolidating every sheet of a spreadsheet workbook into a
//! single flat table, with each row tagged by the sheet it came from.
//!
//! Reading is delegated to [`calamine`] (`.xlsx` and `.xls`), writing to
//! [`rust_xlsxwriter`]. The whole operation is a single pass: read every
//! sheet as a table using a configurable header row, append a `Sheet Name`
//! column, stack the tables in workbook order, and write the result as a
//! new single-sheet workbook next to the input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use sheetfold_core::{consolidate, ConsolidateOptions};
//!
//! # fn main() -> sheetfold_core::Result<()> {
//! let summary = consolidate(Path::new("report.xlsx"), &ConsolidateOptions::default())?;
//! println!("wrote {}", summary.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod cell;
pub mod consolidate;
pub mod error;
pub mod options;
pub mod reader;
pub mod table;
pub mod writer;

// Re-exports for convenience
pub use cell::CellValue;
pub use consolidate::{consolidate, output_path_for, ConsolidateSummary};
pub use error::{Error, Result};
pub use options::{ConsolidateOptions, OutputDir};
pub use reader::WorkbookReader;
pub use table::{stack, SheetTable, Table, SHEET_NAME_COLUMN};
pub use writer::XlsxTableWriter;

/// Largest header-row offset the front ends accept
pub const MAX_HEADER_ROW: u32 = 100;
