//! Document assembly: embeds a captured bitmap into a single-page PDF of a
//! fixed physical page size and derives the file's name from the record's
//! identity fields.

mod assembler;
mod error;
mod filename;

pub use assembler::{assemble, assemble_to_bytes, placement, save_to_path};
pub use error::ComposeError;
pub use filename::{derive_filename, sanitize_component};
