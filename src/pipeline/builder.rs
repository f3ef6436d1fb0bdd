//! Fluent construction of an [`ExportPipeline`].

use parchment_raster::{FontStore, Rasterizer, SkiaRasterizer};
use parchment_template::{DocTemplate, TemplateSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::pipeline::config::ExportConfig;
use crate::pipeline::orchestrator::ExportPipeline;

/// Builds an export pipeline with the built-in templates, the system font
/// store and the tiny-skia rasterizer unless told otherwise.
pub struct ExportPipelineBuilder {
    config: ExportConfig,
    templates: TemplateSet,
    fonts: Option<Arc<FontStore>>,
    rasterizer: Option<Arc<dyn Rasterizer>>,
}

impl ExportPipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: ExportConfig::default(),
            templates: TemplateSet::default(),
            fonts: None,
            rasterizer: None,
        }
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Oversampling factor for capture; values outside 1..=4 are rejected
    /// at capture time.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.config.max_concurrent = max.max(1);
        self
    }

    pub fn with_capture_timeout(mut self, timeout: Duration) -> Self {
        self.config.capture_timeout = timeout;
        self
    }

    /// Registers an additional template, replacing the built-in one for the
    /// same kind.
    pub fn with_template(mut self, template: Arc<dyn DocTemplate>) -> Self {
        self.templates.register(template);
        self
    }

    /// Backs capture with the given font files instead of the host's fonts.
    pub fn with_font_data(mut self, fonts: Vec<Vec<u8>>) -> Self {
        self.fonts = Some(Arc::new(FontStore::with_fonts(fonts)));
        self
    }

    /// Substitutes the capture backend. Primarily a test seam.
    pub fn with_rasterizer(mut self, rasterizer: Arc<dyn Rasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    pub fn build(self) -> ExportPipeline {
        let fonts = self.fonts.unwrap_or_else(|| Arc::new(FontStore::system()));
        let rasterizer = self
            .rasterizer
            .unwrap_or_else(|| Arc::new(SkiaRasterizer::new(Arc::clone(&fonts))));
        ExportPipeline::new(self.templates, rasterizer, fonts, self.config)
    }
}

impl Default for ExportPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
