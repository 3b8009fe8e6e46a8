// ============================================================
// SWEEP PIPELINE
// ============================================================
// Orchestrate read -> clean -> project -> chart -> convert over a
// batch of uploaded files, one file at a time

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::use_cases::{chart_sampler, cleaning, conversion, projection};
use crate::domain::error::{AppError, Result};
use crate::domain::export::{ConversionRequest, ExportArtifact, TargetFormat};
use crate::domain::table::{CellValue, ColumnType, Table};
use crate::domain::upload::UploadedFile;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::formats;
use crate::interfaces::http::{add_log, LogEntry};

/// Operation flags for one sweep request, mirroring the UI controls
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// "Remove Duplicates" button
    pub remove_duplicates: bool,

    /// "Fill Missing Values" button
    pub fill_missing_values: bool,

    /// Column multi-select; absent means keep all columns
    pub columns: Option<Vec<String>>,

    /// "Show Visualizations" checkbox
    pub show_chart: bool,

    /// Conversion target; absent means no export artifact
    pub convert_to: Option<TargetFormat>,
}

/// Name and inferred type of one column after processing
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnType,
}

/// Row-aligned numeric series extracted for the default chart;
/// missing cells surface as `None`
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Per-file report for a successfully processed upload
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file_name: String,
    pub file_size: usize,
    pub columns: Vec<ColumnSummary>,
    pub row_count: usize,
    pub preview: Vec<Vec<String>>,
    pub duplicates_removed: usize,
    pub cells_filled: usize,
    pub chart: Option<Vec<ChartSeries>>,
    pub artifact: Option<ExportArtifact>,
}

/// Outcome for one uploaded file. A skipped file never aborts the
/// rest of the batch.
#[derive(Debug, Clone)]
pub enum FileResult {
    Processed(FileReport),
    Skipped { file_name: String, reason: String },
}

/// The per-request pipeline over a batch of uploads
#[derive(Clone)]
pub struct SweepUseCase {
    config: AppConfig,
}

impl SweepUseCase {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Process every uploaded file sequentially and independently.
    /// Each file gets its own table and its own report; failures are
    /// surfaced as `Skipped` entries with a user-visible reason.
    pub fn execute(
        &self,
        files: Vec<UploadedFile>,
        options: &SweepOptions,
        logs: &Arc<Mutex<Vec<LogEntry>>>,
    ) -> Vec<FileResult> {
        let start = Instant::now();
        let mut results = Vec::with_capacity(files.len());

        for file in files {
            match self.process_file(&file, options, logs) {
                Ok(report) => {
                    add_log(
                        logs,
                        "INFO",
                        "Sweep",
                        &format!("Processed {} ({} rows)", report.file_name, report.row_count),
                    );
                    results.push(FileResult::Processed(report));
                }
                Err(e) => {
                    add_log(logs, "ERROR", "Sweep", &format!("Skipping {}: {}", file.name, e));
                    results.push(FileResult::Skipped {
                        file_name: file.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            files = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sweep request complete"
        );
        results
    }

    fn process_file(
        &self,
        file: &UploadedFile,
        options: &SweepOptions,
        logs: &Arc<Mutex<Vec<LogEntry>>>,
    ) -> Result<FileReport> {
        if file.size > self.config.max_file_bytes {
            return Err(AppError::ValidationError(format!(
                "file exceeds the {} byte upload limit",
                self.config.max_file_bytes
            )));
        }

        add_log(
            logs,
            "INFO",
            "Sweep",
            &format!("Reading {} ({:.2} KB)", file.name, file.size_kb()),
        );
        let mut table = formats::read(file)?;

        let mut duplicates_removed = 0;
        let mut cells_filled = 0;
        if options.remove_duplicates {
            duplicates_removed = cleaning::remove_duplicates(&mut table);
            add_log(
                logs,
                "INFO",
                "Sweep",
                &format!("Removed {} duplicate rows from {}", duplicates_removed, file.name),
            );
        }
        if options.fill_missing_values {
            cells_filled = cleaning::fill_missing_numeric(&mut table);
            add_log(
                logs,
                "INFO",
                "Sweep",
                &format!("Filled {} missing values in {}", cells_filled, file.name),
            );
        }

        if let Some(names) = &options.columns {
            let selected: HashSet<String> = names.iter().cloned().collect();
            table = projection::project(&table, &selected)?;
        }

        let chart = options.show_chart.then(|| chart_series(&table));

        let artifact = match options.convert_to {
            Some(target_format) => Some(conversion::convert(
                &table,
                &ConversionRequest { target_format },
                &file.name,
            )?),
            None => None,
        };

        Ok(FileReport {
            file_name: file.name.clone(),
            file_size: file.size,
            columns: table
                .columns()
                .iter()
                .map(|column| ColumnSummary {
                    name: column.name.clone(),
                    kind: column.kind,
                })
                .collect(),
            row_count: table.row_count(),
            preview: table.preview(self.config.preview_rows),
            duplicates_removed,
            cells_filled,
            chart,
            artifact,
        })
    }
}

/// Row-aligned chart series from the sampled numeric columns
fn chart_series(table: &Table) -> Vec<ChartSeries> {
    let sample = chart_sampler::sample_for_chart(table);
    sample
        .columns()
        .iter()
        .map(|column| ChartSeries {
            name: column.name.clone(),
            values: column.cells.iter().map(CellValue::as_numeric).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> SweepUseCase {
        SweepUseCase::new(AppConfig::default())
    }

    fn logs() -> Arc<Mutex<Vec<LogEntry>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn csv_file(name: &str, content: &str) -> UploadedFile {
        UploadedFile::new(name, content.as_bytes().to_vec())
    }

    #[test]
    fn test_unsupported_file_does_not_abort_the_batch() {
        let files = vec![
            csv_file("notes.txt", "whatever"),
            csv_file("data.csv", "a,b\n1,2\n"),
        ];

        let results = use_case().execute(files, &SweepOptions::default(), &logs());

        assert_eq!(results.len(), 2);
        match &results[0] {
            FileResult::Skipped { file_name, reason } => {
                assert_eq!(file_name, "notes.txt");
                assert!(reason.contains(".txt"));
            }
            other => panic!("expected Skipped, got {:?}", other),
        }
        assert!(matches!(&results[1], FileResult::Processed(_)));
    }

    #[test]
    fn test_full_pipeline_cleans_projects_and_converts() {
        let files = vec![csv_file("report.xlsx.csv", "a,b,c\n1,2,x\n1,2,x\n,4,y\n")];
        let options = SweepOptions {
            remove_duplicates: true,
            fill_missing_values: true,
            columns: Some(vec!["a".to_string(), "b".to_string()]),
            show_chart: true,
            convert_to: Some(TargetFormat::Csv),
        };

        let results = use_case().execute(files, &options, &logs());

        let report = match &results[0] {
            FileResult::Processed(report) => report,
            other => panic!("expected Processed, got {:?}", other),
        };

        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.cells_filled, 1);
        assert_eq!(report.row_count, 2);
        assert_eq!(
            report.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(report.preview, vec![vec!["1", "2"], vec!["1", "4"]]);

        let chart = report.chart.as_ref().unwrap();
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].values, vec![Some(1.0), Some(1.0)]);

        let artifact = report.artifact.as_ref().unwrap();
        assert_eq!(artifact.filename, "report.xlsx.csv");
        assert_eq!(artifact.mime_type, "text/csv");
        assert_eq!(artifact.bytes, b"a,b\n1,2\n1,4\n");
    }

    #[test]
    fn test_oversized_file_is_skipped_with_reason() {
        let config = AppConfig {
            max_file_bytes: 4,
            ..Default::default()
        };
        let files = vec![csv_file("data.csv", "a,b\n1,2\n")];

        let results = SweepUseCase::new(config).execute(files, &SweepOptions::default(), &logs());

        match &results[0] {
            FileResult::Skipped { reason, .. } => assert!(reason.contains("upload limit")),
            other => panic!("expected Skipped, got {:?}", other),
        }
    }

    #[test]
    fn test_conversion_renames_to_target_extension() {
        let files = vec![csv_file("monthly.csv", "a\n1\n")];
        let options = SweepOptions {
            convert_to: Some(TargetFormat::Excel),
            ..Default::default()
        };

        let results = use_case().execute(files, &options, &logs());

        let report = match &results[0] {
            FileResult::Processed(report) => report,
            other => panic!("expected Processed, got {:?}", other),
        };
        let artifact = report.artifact.as_ref().unwrap();
        assert_eq!(artifact.filename, "monthly.xlsx");
    }
}
