mod common;

use common::{
    TestResult, real_pipeline, sample_certificate, sample_id_card, sample_transcript,
};
use lopdf::Document;
use parchment::DocKind;

fn mediabox_dimensions(bytes: &[u8]) -> (f32, f32) {
    let doc = Document::load_mem(bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    let page_id = *doc.get_pages().get(&1).unwrap();
    let media_box = doc
        .get_object(page_id)
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .clone();
    (media_box[2].as_f32().unwrap(), media_box[3].as_f32().unwrap())
}

#[tokio::test]
async fn certificate_export_saves_landscape_a4() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = real_pipeline(dir.path());

    let outcome = pipeline.export(sample_certificate(), DocKind::Certificate).await?;
    let path = outcome.saved_path().expect("expected a saved file");

    assert_eq!(path.file_name().unwrap(), "Ana_Lee_Certificate.pdf");
    let bytes = std::fs::read(path)?;
    assert!(!bytes.is_empty());
    let (width, height) = mediabox_dimensions(&bytes);
    assert!(width > height, "certificate page must be landscape");
    assert!((width - 841.89).abs() < 0.01);
    assert!((height - 595.276).abs() < 0.01);

    assert_eq!(pipeline.attached_targets(), 0);
    Ok(())
}

#[tokio::test]
async fn transcript_export_saves_portrait_a4() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = real_pipeline(dir.path());

    let outcome = pipeline.export(sample_transcript(), DocKind::Transcript).await?;
    let path = outcome.saved_path().expect("expected a saved file");

    assert_eq!(path.file_name().unwrap(), "Ben_Okafor_Transcript.pdf");
    let (width, height) = mediabox_dimensions(&std::fs::read(path)?);
    assert!(height > width, "transcript page must be portrait");
    assert_eq!(pipeline.attached_targets(), 0);
    Ok(())
}

#[tokio::test]
async fn id_card_export_uses_card_page() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = real_pipeline(dir.path());

    let outcome = pipeline.export(sample_id_card(), DocKind::IdCard).await?;
    let path = outcome.saved_path().expect("expected a saved file");

    assert_eq!(path.file_name().unwrap(), "Mia_Park_ID_Card.pdf");
    let (width, height) = mediabox_dimensions(&std::fs::read(path)?);
    assert!((width - 242.65).abs() < 0.01);
    assert!((height - 153.07).abs() < 0.01);
    Ok(())
}

#[tokio::test]
async fn repeated_export_is_deterministic() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = real_pipeline(dir.path());

    let first = pipeline.export(sample_certificate(), DocKind::Certificate).await?;
    assert_eq!(pipeline.attached_targets(), 0);
    let second = pipeline.export(sample_certificate(), DocKind::Certificate).await?;
    assert_eq!(pipeline.attached_targets(), 0);

    assert_eq!(first.saved_path(), second.saved_path());
    // Exactly one file: the second run overwrote the first.
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[tokio::test]
async fn batch_export_saves_every_record() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = std::sync::Arc::new(real_pipeline(dir.path()));

    let records: Vec<_> = (0..5)
        .map(|i| {
            serde_json::json!({
                "certificateType": "Merit",
                "certificateNumber": format!("CERT-{:03}", i),
                "student": { "firstName": format!("Student{}", i), "lastName": "Test" }
            })
        })
        .collect();

    let results = pipeline.export_batch(records, DocKind::Certificate).await;
    assert_eq!(results.len(), 5);
    for result in &results {
        assert!(result.as_ref().unwrap().saved_path().is_some());
    }
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 5);
    assert_eq!(pipeline.attached_targets(), 0);
    Ok(())
}

#[tokio::test]
async fn non_object_record_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = real_pipeline(dir.path());

    let result = pipeline.export(serde_json::json!([1, 2, 3]), DocKind::Certificate).await;
    assert!(matches!(result, Err(parchment::ExportError::Template(_))));
    assert_eq!(pipeline.attached_targets(), 0);
    Ok(())
}
