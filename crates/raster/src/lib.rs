//! Capture stage: renders a page of markup into a print-quality bitmap.
//!
//! The orchestrator talks to this crate through the [`Rasterizer`] trait so
//! tests can substitute failing or slow captures. The production
//! implementation, [`SkiaRasterizer`], paints onto a `tiny-skia` pixmap and
//! draws text from font outlines resolved through a [`FontStore`].
//!
//! Capture must not start before the fonts it needs are loaded; the
//! [`FontStore::ensure_ready`] signal makes that explicit instead of
//! relying on a timed settle delay.

mod capture;
mod error;
mod fonts;
mod image;

pub use capture::SkiaRasterizer;
pub use error::RasterError;
pub use fonts::FontStore;
pub use image::CapturedImage;

use parchment_template::PageMarkup;
use parchment_types::Color;

/// Lowest accepted oversampling factor.
pub const MIN_SCALE: f32 = 1.0;
/// Highest accepted oversampling factor. Values observed in practice are
/// 2-3; anything above 4 only costs memory.
pub const MAX_SCALE: f32 = 4.0;

/// Options for one capture.
#[derive(Debug, Clone, Copy)]
pub struct CaptureOptions {
    /// Pixels per page point. Trades fidelity for memory and time.
    pub scale: f32,
    /// Color painted behind the markup's own background.
    pub background: Color,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self { scale: 2.0, background: Color::WHITE }
    }
}

/// Converts one page of markup into a bitmap.
pub trait Rasterizer: Send + Sync {
    fn capture(
        &self,
        markup: &PageMarkup,
        options: &CaptureOptions,
    ) -> Result<CapturedImage, RasterError>;
}
