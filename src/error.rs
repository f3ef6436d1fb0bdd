use parchment_compose::ComposeError;
use parchment_raster::RasterError;
use parchment_template::TemplateError;
use std::time::Duration;
use thiserror::Error;

/// All export failures surface here, at the orchestrator boundary; no stage
/// error escapes as a panic or an unhandled task failure.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("failed to capture page: {0}")]
    Raster(#[from] RasterError),

    #[error("failed to assemble PDF: {0}")]
    Compose(#[from] ComposeError),

    #[error("capture did not finish within {0:?}")]
    CaptureTimeout(Duration),

    #[error("export worker failed: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
