// src/web.rs

//! HTTP front end for the combination engine.
//!
//! Two endpoints feed records to [`crate::combine`]: `POST /combine/` takes
//! multipart uploads and `POST /combine-folder/` scans a folder on the server.
//! Both accept the same option fields and answer with the rendered document,
//! or with `{"detail": "..."}` and a 400/500 status on failure.

use crate::config::{
    parse_extensions, CombineOptions, CombineOptionsBuilder, OutputFormat, ScanOptions,
};
use crate::constants::{DEFAULT_ALLOWED_ORIGINS, MAX_UPLOAD_BYTES};
use crate::core_types::FileRecord;
use crate::errors::{Error, Result};
use crate::scan::scan_directory;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
        DefaultBodyLimit, Form, Multipart,
    },
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = r#"<html>
    <head>
        <title>File Combiner API</title>
    </head>
    <body>
        <h1>Welcome to the File Combiner API!</h1>
        <p><code>POST /combine/</code> combines uploaded files (multipart field <code>files</code>).</p>
        <p><code>POST /combine-folder/</code> combines the files of a server-side folder.</p>
    </body>
</html>
"#;

// --- Request Structs ---

/// Option fields shared by both combine endpoints, as raw form strings.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CombineFields {
    pub sort_mode: Option<String>,
    pub extensions: Option<String>,
    pub output_format: Option<String>,
    pub remove_extra_empty_lines: Option<String>,
    pub normalize_line_endings: Option<String>,
    pub remove_trailing_whitespace: Option<String>,
}

impl CombineFields {
    /// Stores a multipart text field. Unknown fields are ignored.
    fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "sort_mode" => &mut self.sort_mode,
            "extensions" => &mut self.extensions,
            "output_format" => &mut self.output_format,
            "remove_extra_empty_lines" => &mut self.remove_extra_empty_lines,
            "normalize_line_endings" => &mut self.normalize_line_endings,
            "remove_trailing_whitespace" => &mut self.remove_trailing_whitespace,
            other => {
                tracing::debug!(field = other, "Ignoring unknown form field");
                return;
            }
        };
        *slot = Some(value);
    }

    /// Validates the fields into engine options. Missing values take their defaults.
    pub fn build_options(&self) -> Result<CombineOptions> {
        let mut builder = CombineOptionsBuilder::new()
            .sort_mode(self.sort_mode.as_deref().unwrap_or("name"))
            .output_format(self.output_format.as_deref().unwrap_or("markdown"))
            .remove_extra_empty_lines(parse_form_bool(
                "remove_extra_empty_lines",
                self.remove_extra_empty_lines.as_deref(),
            )?)
            .normalize_line_endings(parse_form_bool(
                "normalize_line_endings",
                self.normalize_line_endings.as_deref(),
            )?)
            .remove_trailing_whitespace(parse_form_bool(
                "remove_trailing_whitespace",
                self.remove_trailing_whitespace.as_deref(),
            )?);
        if let Some(exts) = &self.extensions {
            builder = builder.extensions_str(exts);
        }
        builder.build()
    }
}

/// Form body of `POST /combine-folder/`.
#[derive(Deserialize, Debug)]
pub struct CombineFolderForm {
    pub folder_path: String,
    pub max_depth: Option<String>,
    #[serde(flatten)]
    pub fields: CombineFields,
}

/// Parses an HTML-form boolean. Absent or blank values are `false`.
pub fn parse_form_bool(field: &str, value: Option<&str>) -> Result<bool> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" | "y" | "t" => Ok(true),
        "false" | "0" | "off" | "no" | "n" | "f" => Ok(false),
        _ => Err(Error::InvalidFieldValue {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_max_depth(value: Option<&str>) -> Result<i64> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(0),
        Some(raw) => raw.parse::<i64>().map_err(|_| Error::InvalidFieldValue {
            field: "max_depth".to_string(),
            value: raw.to_string(),
        }),
    }
}

// --- Error Responses ---

/// An error rendered as `{"detail": ...}` with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        if e.is_validation() {
            Self {
                status: StatusCode::BAD_REQUEST,
                detail: e.to_string(),
            }
        } else {
            tracing::error!(error = %e, "Combination failed");
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: format!("Error in combine logic: {}", e),
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self {
            status: e.status(),
            detail: e.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(e: MultipartRejection) -> Self {
        Self {
            status: e.status(),
            detail: e.body_text(),
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(e: FormRejection) -> Self {
        Self {
            status: e.status(),
            detail: e.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

// --- Server Startup ---

/// Builds the router with the default localhost CORS origins.
pub fn create_router() -> Router {
    let origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|o| o.to_string())
        .collect();
    create_router_with_origins(&origins)
}

/// Builds the router allowing cross-origin requests from `origins`.
pub fn create_router_with_origins(origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/combine/", post(combine_handler))
        .route("/combine-folder/", post(combine_folder_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Binds `host:port` and serves until the process is stopped.
pub async fn start_server(host: &str, port: u16, origins: Vec<String>) -> anyhow::Result<()> {
    let app = create_router_with_origins(&origins);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, ?origins, "filecombine service listening");
    println!("filecombine service running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// --- Handlers ---

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn combine_handler(
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Response, ApiError> {
    let mut multipart = multipart?;
    let mut records = Vec::new();
    let mut fields = CombineFields::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "files" {
            let file_name = field
                .file_name()
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .ok_or_else(|| Error::MissingFileName(name.clone()))?;
            let bytes = field.bytes().await?;
            records.push(FileRecord::from_upload(
                file_name,
                &bytes,
                Local::now().naive_local(),
            ));
        } else {
            let value = field.text().await?;
            fields.set(&name, value);
        }
    }

    if records.is_empty() {
        return Err(Error::NoFilesUploaded.into());
    }
    let options = fields.build_options()?;
    tracing::info!(files = records.len(), format = %options.output_format, "Combining uploads");

    let format = options.output_format;
    let output = run_blocking(move || crate::combine(records, &options)).await?;
    Ok(document_response(format, output))
}

async fn combine_folder_handler(
    form: std::result::Result<Form<CombineFolderForm>, FormRejection>,
) -> std::result::Result<Response, ApiError> {
    let Form(form) = form?;
    let scan_options = ScanOptions::new(
        form.folder_path.as_str(),
        parse_max_depth(form.max_depth.as_deref())?,
        parse_extensions(form.fields.extensions.as_deref()),
    )?;
    let options = form.fields.build_options()?;
    tracing::info!(
        folder = %form.folder_path,
        max_depth = scan_options.max_depth,
        format = %options.output_format,
        "Combining folder"
    );

    let format = options.output_format;
    let output = run_blocking(move || {
        let records = scan_directory(&scan_options)?;
        crate::combine(records, &options)
    })
    .await?;
    Ok(document_response(format, output))
}

/// Runs blocking engine work off the async reactor.
async fn run_blocking<F>(work: F) -> Result<String>
where
    F: FnOnce() -> Result<String> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| Error::TaskFailed(e.to_string()))?
}

fn document_response(format: OutputFormat, body: String) -> Response {
    ([(header::CONTENT_TYPE, format.mime_type())], body).into_response()
}
