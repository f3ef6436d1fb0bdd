use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("captured image is empty")]
    EmptyImage,

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
