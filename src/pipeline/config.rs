use parchment_raster::CaptureOptions;
use parchment_types::Color;
use std::path::PathBuf;
use std::time::Duration;

/// Tuning knobs for the export pipeline.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Oversampling factor for capture. 2-3 gives print quality.
    pub scale: f32,
    /// Color behind the page markup.
    pub background: Color,
    /// How many captures may run at once. Captures hold full-resolution
    /// surfaces, so this stays small.
    pub max_concurrent: usize,
    /// Upper bound on one capture; a hung capture must not pin its record's
    /// busy flag forever.
    pub capture_timeout: Duration,
    /// Directory saved PDFs land in. Created on first export.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: Color::WHITE,
            max_concurrent: num_cpus::get().clamp(1, 2),
            capture_timeout: Duration::from_secs(30),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions { scale: self.scale, background: self.background }
    }
}
