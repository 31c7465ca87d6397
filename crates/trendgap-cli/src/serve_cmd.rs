use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::error::CliError;
use crate::page::{PageState, render_page};
use crate::shared::analyze_upload;

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// Process-wide server settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub max_upload_bytes: usize,
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            bind: args.bind,
            max_upload_bytes: args.max_upload_bytes,
        }
    }
}

pub fn run_serve(args: ServeArgs) -> Result<ExitCode> {
    let config = ServerConfig::from(&args);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(config.bind)
            .await
            .with_context(|| format!("Failed to bind {}", config.bind))?;
        serve(listener, config).await
    })?;

    Ok(ExitCode::SUCCESS)
}

pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(max_upload_bytes = config.max_upload_bytes, "Listening on http://{}", addr);

    axum::serve(listener, router(config))
        .await
        .context("HTTP server failed")
}

pub fn router(config: ServerConfig) -> Router {
    let limit = config.max_upload_bytes;

    Router::new()
        .route("/", get(show_form).post(upload))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(Arc::new(config))
}

async fn show_form() -> Html<String> {
    Html(render_page(&PageState::default()))
}

async fn upload(State(config): State<Arc<ServerConfig>>, multipart: Multipart) -> Html<String> {
    let outcome = match read_file_field(multipart).await {
        Ok(Some(file)) => analyze_upload(file.name.as_deref(), &file.contents),
        Ok(None) => analyze_upload(None, &[]),
        Err(err) => Err(upload_error(&err, &config)),
    };

    if let Err(err) = &outcome {
        info!("Upload rejected: {}", err);
    }

    Html(render_page(&PageState::from(outcome)))
}

struct UploadedFile {
    name: Option<String>,
    contents: Vec<u8>,
}

async fn read_file_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().map(str::to_string);
        let contents = field.bytes().await?.to_vec();
        return Ok(Some(UploadedFile { name, contents }));
    }

    Ok(None)
}

fn upload_error(err: &MultipartError, config: &ServerConfig) -> CliError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return CliError::input(format!(
            "Uploaded file is too large. The limit is {} bytes.",
            config.max_upload_bytes
        ));
    }

    warn!("Malformed upload: {}", err);
    CliError::input(format!("Could not read the uploaded file: {}", err.body_text()))
}
