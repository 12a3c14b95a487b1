//! Application window and state machine

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;
use sheetfold_core::{
    consolidate, ConsolidateOptions, ConsolidateSummary, Error, OutputDir, MAX_HEADER_ROW,
};

/// Result of the in-flight consolidation, sent back from the worker thread
type WorkerResult = Result<ConsolidateSummary, Error>;

/// Longest file name shown in the selection label
const MAX_NAME_LEN: usize = 50;

/// Window state: the selected file, the header-row offset, and whether a
/// consolidation is in flight. The busy flag keeps the consolidate and
/// browse actions disabled while the worker runs, so at most one
/// consolidation is ever in flight.
pub struct ConsolidatorApp {
    selected: Option<PathBuf>,
    header_row: u32,
    busy: bool,
    status: String,
    worker: Option<Receiver<WorkerResult>>,
}

impl ConsolidatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            selected: None,
            header_row: 1,
            busy: false,
            status: "Ready".to_string(),
            worker: None,
        }
    }

    fn browse(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select Excel File")
            .add_filter("Excel Files", &["xlsx", "xls"])
            .pick_file();

        if let Some(path) = picked {
            self.status = format!("File selected: {}", display_name(&path));
            self.selected = Some(path);
        }
    }

    fn start_consolidation(&mut self, ctx: &egui::Context) {
        let Some(path) = self.selected.clone() else {
            return;
        };
        let options = ConsolidateOptions {
            header_row: self.header_row,
            output_dir: OutputDir::InputDir,
        };

        let (tx, rx) = mpsc::channel();
        let repaint = ctx.clone();
        thread::spawn(move || {
            let result = consolidate(&path, &options);
            let _ = tx.send(result);
            repaint.request_repaint();
        });

        self.worker = Some(rx);
        self.busy = true;
        self.status = "Processing...".to_string();
    }

    fn poll_worker(&mut self) {
        let Some(rx) = &self.worker else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.worker = None;
                self.busy = false;
                self.finish(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.worker = None;
                self.busy = false;
                self.status = "Error: consolidation stopped unexpectedly".to_string();
            }
        }
    }

    fn finish(&mut self, result: WorkerResult) {
        match result {
            Ok(summary) => {
                self.status = "Processing completed successfully!".to_string();
                // A fresh selection is required before consolidating again
                self.selected = None;
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Success")
                    .set_description(format!(
                        "✅ Consolidated file saved as:\n{}",
                        summary.output_path.display()
                    ))
                    .show();
            }
            Err(Error::Permission { path, .. }) => {
                self.status = "Error: Permission denied.".to_string();
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Error")
                    .set_description(format!(
                        "❌ Permission denied for {}. Please make sure:\n\
                         1. The Excel file is not open in another program.\n\
                         2. You have write permissions in the target directory.\n\
                         3. The file is not read-only.",
                        path.display()
                    ))
                    .show();
            }
            Err(err) => {
                self.status = format!("Error: {err}");
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Error")
                    .set_description(format!(
                        "❌ An error occurred: {err}\n\nPlease make sure:\n\
                         1. The Excel file is valid and not corrupted.\n\
                         2. The header row number ({}) is correct for all sheets.\n\
                         3. The file is not password-protected.",
                        self.header_row
                    ))
                    .show();
            }
        }
    }
}

impl eframe::App for ConsolidatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sheetfold");
            ui.label("Excel sheet consolidation tool");
            ui.separator();

            ui.group(|ui| {
                ui.label("1. Select Excel file");
                ui.horizontal(|ui| {
                    let selected_text = self
                        .selected
                        .as_deref()
                        .map(display_name)
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(selected_text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let browse = ui.add_enabled(!self.busy, egui::Button::new("Browse..."));
                        if browse.clicked() {
                            self.browse();
                        }
                    });
                });
            });

            ui.group(|ui| {
                ui.label("2. Set header row");
                ui.horizontal(|ui| {
                    ui.label("Header row:");
                    ui.add(egui::DragValue::new(&mut self.header_row).range(1..=MAX_HEADER_ROW));
                });
            });

            ui.add_space(8.0);
            let can_start = self.selected.is_some() && !self.busy;
            let consolidate_button =
                ui.add_enabled(can_start, egui::Button::new("Consolidate sheets"));
            if consolidate_button.clicked() {
                self.start_consolidation(ctx);
            }
            if self.busy {
                ui.spinner();
            }
        });
    }
}

/// File name shortened for the selection label
fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if name.chars().count() <= MAX_NAME_LEN {
        name
    } else {
        let prefix: String = name.chars().take(MAX_NAME_LEN - 3).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through() {
        assert_eq!(display_name(Path::new("/data/report.xlsx")), "report.xlsx");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = format!("/data/{}.xlsx", "x".repeat(80));
        let shown = display_name(Path::new(&long));
        assert_eq!(shown.chars().count(), MAX_NAME_LEN);
        assert!(shown.ends_with("..."));
    }
}
