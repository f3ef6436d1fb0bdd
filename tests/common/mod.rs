// Not every test binary uses every helper.
#![allow(dead_code)]

use parchment::{
    CaptureOptions, CapturedImage, ExportPipeline, ExportPipelineBuilder, PageMarkup, RasterError,
    Rasterizer,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A scriptable capture backend: optional fixed delay, optional failure,
/// and a call counter to observe suppressed duplicate triggers.
pub struct ScriptedRasterizer {
    pub delay: Duration,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl ScriptedRasterizer {
    pub fn instant() -> Self {
        Self { delay: Duration::ZERO, fail: false, calls: AtomicUsize::new(0) }
    }

    pub fn slow(delay: Duration) -> Self {
        Self { delay, ..Self::instant() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::instant() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Rasterizer for ScriptedRasterizer {
    fn capture(
        &self,
        markup: &PageMarkup,
        options: &CaptureOptions,
    ) -> Result<CapturedImage, RasterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if self.fail {
            return Err(RasterError::Failed("simulated tainted canvas".into()));
        }
        let width = (markup.size.width * options.scale).round() as u32;
        let height = (markup.size.height * options.scale).round() as u32;
        Ok(CapturedImage {
            width_px: width,
            height_px: height,
            scale: options.scale,
            rgb: vec![255; (width * height * 3) as usize],
            png: vec![0x89, b'P', b'N', b'G'],
        })
    }
}

/// A pipeline with a hermetic (empty) font store writing into `dir`.
pub fn real_pipeline(dir: &std::path::Path) -> ExportPipeline {
    ExportPipelineBuilder::new()
        .with_output_dir(dir)
        .with_font_data(Vec::new())
        .build()
}

/// A pipeline whose captures go through the given scripted backend.
pub fn scripted_pipeline(
    dir: &std::path::Path,
    rasterizer: Arc<ScriptedRasterizer>,
) -> ExportPipeline {
    ExportPipelineBuilder::new()
        .with_output_dir(dir)
        .with_font_data(Vec::new())
        .with_rasterizer(rasterizer)
        .build()
}

pub fn sample_certificate() -> Value {
    json!({
        "certificateType": "Academic Excellence",
        "student": { "firstName": "Ana", "lastName": "Lee" },
        "certificateNumber": "CERT-001",
        "issueDate": "2025-01-10"
    })
}

pub fn sample_transcript() -> Value {
    json!({
        "student": { "firstName": "Ben", "lastName": "Okafor", "studentId": "S-42" },
        "academicYear": "2025/2026",
        "grades": [
            { "subject": "Mathematics", "score": 91.0 },
            { "subject": "History", "score": 74.5 },
            { "subject": "Biology", "score": 88.0 }
        ],
        "attendancePercentage": 96.5
    })
}

pub fn sample_id_card() -> Value {
    json!({
        "student": { "firstName": "Mia", "lastName": "Park", "studentId": "S-7", "className": "5B" },
        "academicYear": "2025/2026",
        "schoolName": "Hillside School"
    })
}
