//! lopdf-based single-page assembly.
//!
//! The captured bitmap becomes an image XObject placed aspect-correct and
//! centered inside the page's content box. Templates target markup with the
//! same proportions as their page, so in practice the placement is
//! full-bleed; the aspect guard only matters when margins are configured.

use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use parchment_raster::CapturedImage;
use parchment_types::{PageSpec, Rect, Size};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::ComposeError;

/// Computes where the image lands on the page: the largest aspect-preserving
/// rectangle inside the content box, centered. Returned in PDF user space
/// (origin bottom-left).
pub fn placement(image_size: Size, page: &PageSpec) -> Rect {
    let content = page.margins.content_box(page.size);
    if image_size.is_empty() || content.size().is_empty() {
        return content;
    }

    let scale = (content.width / image_size.width).min(content.height / image_size.height);
    let width = image_size.width * scale;
    let height = image_size.height * scale;
    let x = content.x + (content.width - width) / 2.0;
    // Content box is specified top-down; flip into PDF's bottom-up space.
    let top = content.y + (content.height - height) / 2.0;
    let y = page.size.height - top - height;
    Rect::new(x, y, width, height)
}

/// Builds a one-page PDF with the capture embedded.
pub fn assemble(image: &CapturedImage, page: &PageSpec) -> Result<Document, ComposeError> {
    if image.is_empty() {
        return Err(ComposeError::EmptyImage);
    }

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width_px as i64,
            "Height" => image.height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8i64,
        },
        image.rgb.clone(),
    ));
    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! { "Im1" => image_id },
    });

    let frame = placement(
        Size::new(image.width_px as f32 / image.scale, image.height_px as f32 / image.scale),
        page,
    );
    debug!(
        "placing {}x{} capture at ({:.1}, {:.1}) sized {:.1}x{:.1}",
        image.width_px, image.height_px, frame.x, frame.y, frame.width, frame.height
    );

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    frame.width.into(),
                    0.into(),
                    0.into(),
                    frame.height.into(),
                    frame.x.into(),
                    frame.y.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.0.into(),
            0.0.into(),
            page.size.width.into(),
            page.size.height.into(),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

/// Assembles and serializes in one step.
pub fn assemble_to_bytes(image: &CapturedImage, page: &PageSpec) -> Result<Vec<u8>, ComposeError> {
    let mut doc = assemble(image, page)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Saves an assembled document to disk.
pub fn save_to_path(doc: &mut Document, path: &Path) -> Result<(), ComposeError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)?;
    Ok(())
}
