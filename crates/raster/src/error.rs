use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("capture scale {0} is outside the supported range 1..=4")]
    InvalidScale(f32),

    #[error("page markup has a degenerate size {width}x{height}")]
    EmptyPage { width: f32, height: f32 },

    #[error("could not allocate a {width}x{height} capture surface")]
    SurfaceAlloc { width: u32, height: u32 },

    #[error("bitmap encoding failed: {0}")]
    Encode(String),

    #[error("capture failed: {0}")]
    Failed(String),
}
