use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// A bitmap captured from one page of markup.
///
/// Ephemeral: it exists only between capture and document assembly. The raw
/// RGB plane feeds the PDF image object; the PNG form backs `data_url` for
/// callers that preview the capture instead of saving it.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub width_px: u32,
    pub height_px: u32,
    /// The oversampling factor the capture ran at.
    pub scale: f32,
    /// Tightly packed 8-bit RGB rows, top to bottom.
    pub rgb: Vec<u8>,
    /// The same pixels encoded as PNG.
    pub png: Vec<u8>,
}

impl CapturedImage {
    pub fn is_empty(&self) -> bool {
        self.rgb.is_empty() || self.width_px == 0 || self.height_px == 0
    }

    /// The capture as a `data:image/png;base64,...` URL.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}
