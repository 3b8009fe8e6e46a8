use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::error;

use crate::application::use_cases::sweep::{
    ChartSeries, ColumnSummary, FileResult, SweepOptions, SweepUseCase,
};
use crate::domain::upload::UploadedFile;
use crate::infrastructure::config::AppConfig;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub sweep_use_case: SweepUseCase,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Deserialize)]
pub struct UploadPayload {
    pub name: String,
    pub content_base64: String,
}

#[derive(Deserialize)]
pub struct SweepRequest {
    pub files: Vec<UploadPayload>,
    #[serde(flatten)]
    pub options: SweepOptions,
}

#[derive(Serialize)]
pub struct SweepResponse {
    pub results: Vec<FileResultDto>,
}

#[derive(Serialize)]
pub struct ArtifactDto {
    pub filename: String,
    pub mime_type: String,
    pub content_base64: String,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileResultDto {
    Processed {
        file_name: String,
        file_size: usize,
        columns: Vec<ColumnSummary>,
        row_count: usize,
        preview: Vec<Vec<String>>,
        duplicates_removed: usize,
        cells_filled: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        chart: Option<Vec<ChartSeries>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        artifact: Option<ArtifactDto>,
    },
    Skipped {
        file_name: String,
        reason: String,
    },
}

impl From<FileResult> for FileResultDto {
    fn from(result: FileResult) -> Self {
        match result {
            FileResult::Processed(report) => FileResultDto::Processed {
                file_name: report.file_name,
                file_size: report.file_size,
                columns: report.columns,
                row_count: report.row_count,
                preview: report.preview,
                duplicates_removed: report.duplicates_removed,
                cells_filled: report.cells_filled,
                chart: report.chart,
                artifact: report.artifact.map(|artifact| ArtifactDto {
                    filename: artifact.filename,
                    mime_type: artifact.mime_type,
                    content_base64: BASE64.encode(&artifact.bytes),
                }),
            },
            FileResult::Skipped { file_name, reason } => {
                FileResultDto::Skipped { file_name, reason }
            }
        }
    }
}

#[post("/sweep")]
async fn sweep(data: web::Data<HttpState>, req: web::Json<SweepRequest>) -> impl Responder {
    let request = req.into_inner();

    if request.files.is_empty() {
        return HttpResponse::BadRequest().body("no files uploaded");
    }

    let mut files = Vec::with_capacity(request.files.len());
    for payload in request.files {
        match BASE64.decode(payload.content_base64.as_bytes()) {
            Ok(bytes) => files.push(UploadedFile::new(payload.name, bytes)),
            Err(e) => {
                add_log(
                    &data.logs,
                    "ERROR",
                    "HttpApi",
                    &format!("Invalid upload encoding for {}: {}", payload.name, e),
                );
                return HttpResponse::BadRequest()
                    .body(format!("invalid base64 content for {}: {}", payload.name, e));
            }
        }
    }

    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!("Sweeping {} file(s)", files.len()),
    );

    // The pipeline is synchronous CPU work; keep it off the async workers
    let use_case = data.sweep_use_case.clone();
    let logs = data.logs.clone();
    let options = request.options;
    let results =
        match tokio::task::spawn_blocking(move || use_case.execute(files, &options, &logs)).await {
            Ok(results) => results,
            Err(e) => {
                error!(error = %e, "Sweep task panicked");
                return HttpResponse::InternalServerError().body(e.to_string());
            }
        };

    HttpResponse::Ok().json(SweepResponse {
        results: results.into_iter().map(FileResultDto::from).collect(),
    })
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap().clone();
    HttpResponse::Ok().json(logs)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn start_server(
    config: AppConfig,
    logs: Arc<Mutex<Vec<LogEntry>>>,
) -> std::io::Result<Server> {
    let bind_address = (config.host.clone(), config.port);
    let state = web::Data::new(HttpState {
        sweep_use_case: SweepUseCase::new(config),
        logs,
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(sweep)
                .service(get_logs)
                .service(health),
        )
    })
    .bind(bind_address)?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_log_caps_the_buffer() {
        let logs = Mutex::new(Vec::new());
        for index in 0..150 {
            add_log(&logs, "INFO", "Test", &format!("message {}", index));
        }

        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), 100);
        assert_eq!(logs[0].message, "message 50");
    }

    #[test]
    fn test_sweep_request_options_default_when_absent() {
        let request: SweepRequest = serde_json::from_str(
            r#"{ "files": [{ "name": "a.csv", "content_base64": "YSxiCjEsMgo=" }] }"#,
        )
        .unwrap();

        assert!(!request.options.remove_duplicates);
        assert!(request.options.convert_to.is_none());
        assert_eq!(request.files.len(), 1);
    }

    #[test]
    fn test_sweep_request_parses_conversion_target() {
        let request: SweepRequest = serde_json::from_str(
            r#"{
                "files": [{ "name": "a.csv", "content_base64": "" }],
                "remove_duplicates": true,
                "columns": ["a"],
                "convert_to": "excel"
            }"#,
        )
        .unwrap();

        assert!(request.options.remove_duplicates);
        assert_eq!(request.options.columns.as_deref(), Some(&["a".to_string()][..]));
        assert!(matches!(
            request.options.convert_to,
            Some(crate::domain::export::TargetFormat::Excel)
        ));
    }
}
