//! Spec-level template and filename behavior through the public API.

mod common;

use common::{TestResult, sample_certificate};
use parchment::{
    DocKind, ExportableRecord, FALLBACK_RECOGNITION, TemplateSet, derive_filename,
    sanitize_component,
};

#[test]
fn certificate_markup_carries_number_and_type() -> TestResult {
    let templates = TemplateSet::default();
    let record = ExportableRecord::new(sample_certificate())?;
    let markup = templates.get(DocKind::Certificate).unwrap().render(&record)?;

    assert!(markup.contains_text("CERT-001"));
    assert!(markup.contains_text("ACADEMIC EXCELLENCE"));
    assert!(markup.contains_text("Ana Lee"));
    Ok(())
}

#[test]
fn missing_description_renders_recognition_sentence() -> TestResult {
    let templates = TemplateSet::default();
    let record = ExportableRecord::new(serde_json::json!({
        "certificateType": "Merit",
        "student": { "firstName": "Ana", "lastName": "Lee" }
    }))?;
    let markup = templates.get(DocKind::Certificate).unwrap().render(&record)?;

    let text = markup.text_content();
    assert!(text.contains(&FALLBACK_RECOGNITION[..40]));
    assert!(!text.contains("undefined"));
    Ok(())
}

#[test]
fn filenames_are_deterministic_and_safe() {
    assert_eq!(derive_filename("Ana", "Lee", DocKind::Certificate), "Ana_Lee_Certificate.pdf");
    assert_eq!(
        derive_filename("Ana", "Lee", DocKind::Certificate),
        derive_filename("Ana", "Lee", DocKind::Certificate),
    );
    // Separators and quotes collapse instead of escaping the directory.
    let hostile = derive_filename("../a", "b/c", DocKind::Transcript);
    assert!(!hostile.contains('/'));
    assert_eq!(hostile, "a_b_c_Transcript.pdf");
    assert_eq!(sanitize_component(""), "Student");
}

#[test]
fn every_kind_renders_a_nonempty_page() -> TestResult {
    let templates = TemplateSet::default();
    let record = ExportableRecord::new(serde_json::json!({ "firstName": "Solo" }))?;
    for kind in DocKind::all() {
        let template = templates.get(kind).unwrap();
        let markup = template.render(&record)?;
        assert!(!markup.elements.is_empty());
        assert!(!markup.size.is_empty());
        // Markup proportions match the physical page, so assembly is
        // full-bleed rather than distorted.
        let page = template.page();
        assert!((markup.size.aspect() - page.size.aspect()).abs() < 0.01);
    }
    Ok(())
}
