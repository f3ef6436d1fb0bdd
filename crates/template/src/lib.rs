//! Page templates for the document export pipeline.
//!
//! A template turns one exportable record (a JSON object fetched by the
//! caller) into a [`PageMarkup`]: a fixed-size, inline-styled tree of placed
//! elements representing a single printable page. Templates are pure (they
//! never touch the filesystem or the capture surface) and they never fail
//! on missing record fields; absent values are substituted with fallback
//! text instead.
//!
//! ## Key abstractions
//!
//! - [`DocTemplate`]: the contract between a record and one page of markup
//! - [`ExportableRecord`]: field access over a JSON record with fallbacks
//! - [`TemplateSet`]: the registry mapping a [`DocKind`] to its template

pub mod certificate;
mod error;
pub mod grading;
pub mod id_card;
pub mod markup;
pub mod record;
pub mod transcript;

pub use error::TemplateError;
pub use markup::{
    BoxStyle, Element, ElementKind, FontFamily, PageMarkup, RuleStyle, Stroke, TextAlign,
    TextBlock, TextStyle,
};
pub use record::{ExportableRecord, FALLBACK_RECOGNITION};

use parchment_types::{DocKind, PageSpec};
use std::collections::HashMap;
use std::sync::Arc;

/// A template producing one printable page for one kind of document.
pub trait DocTemplate: Send + Sync {
    /// The document kind this template renders.
    fn kind(&self) -> DocKind;

    /// The physical page the rendered markup targets.
    fn page(&self) -> PageSpec;

    /// Renders a record into a single page of placed, inline-styled markup.
    ///
    /// Missing fields must degrade to fallback text; the only error a
    /// template may raise is a structurally unusable record.
    fn render(&self, record: &ExportableRecord) -> Result<PageMarkup, TemplateError>;
}

/// The set of registered templates, keyed by document kind.
pub struct TemplateSet {
    templates: HashMap<DocKind, Arc<dyn DocTemplate>>,
}

impl TemplateSet {
    /// An empty set with no templates registered.
    pub fn empty() -> Self {
        Self { templates: HashMap::new() }
    }

    /// Registers a template, replacing any previous one for the same kind.
    pub fn register(&mut self, template: Arc<dyn DocTemplate>) {
        self.templates.insert(template.kind(), template);
    }

    pub fn get(&self, kind: DocKind) -> Option<&Arc<dyn DocTemplate>> {
        self.templates.get(&kind)
    }
}

impl Default for TemplateSet {
    /// The built-in templates: certificate, transcript and student ID card.
    fn default() -> Self {
        let mut set = Self::empty();
        set.register(Arc::new(certificate::CertificateTemplate::default()));
        set.register(Arc::new(transcript::TranscriptTemplate::default()));
        set.register(Arc::new(id_card::IdCardTemplate::default()));
        set
    }
}
