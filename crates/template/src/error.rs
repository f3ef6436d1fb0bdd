use thiserror::Error;

/// Errors that can occur while rendering a record into page markup.
///
/// Missing fields are not errors, since templates substitute fallback text,
/// so the only failure left is a record that is not usable at all.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("no template registered for document kind '{0}'")]
    UnknownKind(parchment_types::DocKind),
}
