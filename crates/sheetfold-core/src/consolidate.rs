//! The consolidation operation

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::options::{ConsolidateOptions, OutputDir};
use crate::reader::WorkbookReader;
use crate::table::{self, SheetTable, Table};
use crate::writer::XlsxTableWriter;

/// Outcome of a successful consolidation
#[derive(Debug, Clone)]
pub struct ConsolidateSummary {
    /// Where the consolidated workbook was written
    pub output_path: PathBuf,
    /// Number of sheets read from the input workbook
    pub sheet_count: usize,
    /// Number of data rows in the consolidated table
    pub row_count: usize,
}

/// Consolidate every sheet of the workbook at `path` into one flat table
/// and write it as a new single-sheet workbook.
///
/// Each row is tagged with its originating sheet in a `Sheet Name` column;
/// sheets are stacked in workbook order with intra-sheet row order
/// preserved. The input file is never modified and no output file is left
/// behind on failure.
pub fn consolidate(path: &Path, options: &ConsolidateOptions) -> Result<ConsolidateSummary> {
    let sheets = WorkbookReader::read_file(path, options.header_row)?;
    let sheet_count = sheets.len();

    let tagged: Vec<Table> = sheets.into_iter().map(SheetTable::tagged).collect();
    let combined = table::stack(tagged);
    let row_count = combined.row_count();

    let output_path = output_path_for(path, options.output_dir);
    XlsxTableWriter::write_file(&combined, &output_path)?;

    tracing::info!(
        "Consolidated {sheet_count} sheets ({row_count} rows) into {}",
        output_path.display()
    );

    Ok(ConsolidateSummary {
        output_path,
        sheet_count,
        row_count,
    })
}

/// Derive the output path: the input base name with `_consolidated`
/// appended before the extension, in the chosen directory.
pub fn output_path_for(input: &Path, output_dir: OutputDir) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}_consolidated.xlsx");

    match output_dir {
        OutputDir::InputDir => match input.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        },
        OutputDir::WorkingDir => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_lands_next_to_input() {
        let out = output_path_for(Path::new("/data/report.xlsx"), OutputDir::InputDir);
        assert_eq!(out, Path::new("/data/report_consolidated.xlsx"));
    }

    #[test]
    fn output_path_for_bare_file_name() {
        let out = output_path_for(Path::new("report.xlsx"), OutputDir::InputDir);
        assert_eq!(out, Path::new("report_consolidated.xlsx"));
    }

    #[test]
    fn output_path_in_working_dir_drops_input_dir() {
        let out = output_path_for(Path::new("/data/report.xls"), OutputDir::WorkingDir);
        assert_eq!(out, Path::new("report_consolidated.xlsx"));
    }
}
