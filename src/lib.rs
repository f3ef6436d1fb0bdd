//! Parchment: a record-to-PDF export pipeline for school documents.
//!
//! Given a JSON record fetched by the caller (a certificate, a student's
//! grade bundle, or a profile), the pipeline renders a fixed-size page of
//! markup, captures it as a print-quality bitmap, embeds the bitmap into a
//! PDF of the kind's physical page format, and saves it under a
//! deterministic, sanitized filename.
//!
//! ```text
//! record --> Template Renderer --> Rasterizer --> Document Assembler --> file
//!                (markup)           (bitmap)          (PDF)
//! ```
//!
//! The [`ExportPipeline`] orchestrates the stages per user action: it keys
//! a busy flag per record id so duplicate triggers are suppressed, bounds
//! how many captures run at once, times out hung captures, and guarantees
//! that transient render targets are released on success and failure alike.
//!
//! ```no_run
//! use parchment::{DocKind, ExportPipelineBuilder};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), parchment::ExportError> {
//! let pipeline = ExportPipelineBuilder::new()
//!     .with_output_dir("exports")
//!     .build();
//! let record = json!({
//!     "certificateType": "Academic Excellence",
//!     "student": { "firstName": "Ana", "lastName": "Lee" },
//!     "certificateNumber": "CERT-001",
//!     "issueDate": "2025-01-10"
//! });
//! let outcome = pipeline.export(record, DocKind::Certificate).await?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod pipeline;

pub use error::ExportError;
pub use pipeline::builder::ExportPipelineBuilder;
pub use pipeline::config::ExportConfig;
pub use pipeline::orchestrator::{ExportOutcome, ExportPhase, ExportPipeline};
pub use pipeline::registry::TargetRegistry;

// Re-export the stage crates' public surface under one roof.
pub use parchment_compose::{derive_filename, sanitize_component};
pub use parchment_raster::{CaptureOptions, CapturedImage, FontStore, RasterError, Rasterizer};
pub use parchment_template::{
    DocTemplate, ExportableRecord, FALLBACK_RECOGNITION, PageMarkup, TemplateError, TemplateSet,
};
pub use parchment_types::{DocKind, PageSpec, RecordId};
