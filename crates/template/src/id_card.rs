//! The student ID card template: one CR80-size card.

use parchment_types::{Color, DocKind, PageSpec, Rect};

use crate::markup::{BoxStyle, Element, FontFamily, PageMarkup, RuleStyle, TextAlign, TextStyle};
use crate::record::ExportableRecord;
use crate::{DocTemplate, TemplateError};

const BAND: Color = Color { r: 30, g: 64, b: 124, a: 1.0 };

#[derive(Debug, Default)]
pub struct IdCardTemplate;

impl DocTemplate for IdCardTemplate {
    fn kind(&self) -> DocKind {
        DocKind::IdCard
    }

    fn page(&self) -> PageSpec {
        PageSpec::cr80()
    }

    fn render(&self, record: &ExportableRecord) -> Result<PageMarkup, TemplateError> {
        let size = self.page().size;
        let mut page = PageMarkup::new(size, Color::WHITE);

        // Header band with the institution name.
        page.push(Element::boxed(
            Rect::new(0.0, 0.0, size.width, 38.0),
            BoxStyle::filled(BAND),
        ));
        let school = record.text_or(&["school.name", "schoolName"], "Academy");
        page.push(Element::text(
            Rect::new(0.0, 9.0, size.width, 14.0),
            school.to_uppercase(),
            TextStyle::new(FontFamily::SansSerif, 11.0)
                .color(Color::WHITE)
                .align(TextAlign::Center)
                .letter_spacing(1.0),
        ));
        page.push(Element::text(
            Rect::new(0.0, 23.0, size.width, 10.0),
            "STUDENT IDENTITY CARD",
            TextStyle::new(FontFamily::SansSerif, 6.5)
                .color(Color::gray(210))
                .align(TextAlign::Center)
                .letter_spacing(1.5),
        ));

        let (first, last) = record.subject_names();
        page.push(Element::text(
            Rect::new(14.0, 52.0, size.width - 28.0, 18.0),
            format!("{} {}", first, last).trim().to_string(),
            TextStyle::new(FontFamily::Serif, 15.0).color(Color::BLACK),
        ));
        page.push(Element::rule(
            Rect::new(14.0, 72.0, size.width - 28.0, 1.0),
            RuleStyle { color: Color::gray(200), thickness: 0.8 },
        ));

        let detail = |label: &str, value: &str| format!("{}: {}", label, value);
        let small = || TextStyle::new(FontFamily::SansSerif, 8.5).color(Color::gray(60));
        let mut y = 82.0;
        let id = record.text_or(&["student.studentId", "studentId", "admissionNumber"], "N/A");
        page.push(Element::text(Rect::new(14.0, y, 180.0, 10.0), detail("ID", id), small()));
        y += 14.0;
        if let Some(class) = record.text("student.className").or_else(|| record.text("className")) {
            page.push(Element::text(Rect::new(14.0, y, 180.0, 10.0), detail("Class", class), small()));
            y += 14.0;
        }
        if let Some(year) = record.text("academicYear") {
            page.push(Element::text(
                Rect::new(14.0, y, 180.0, 10.0),
                detail("Academic Year", year),
                small(),
            ));
        }

        // Footer stripe mirrors the band color.
        page.push(Element::boxed(
            Rect::new(0.0, size.height - 10.0, size.width, 10.0),
            BoxStyle::filled(BAND),
        ));

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_identity_fields() {
        let record = ExportableRecord::new(json!({
            "student": {"firstName": "Mia", "lastName": "Park", "studentId": "S-7", "className": "5B"},
            "academicYear": "2025/2026",
            "schoolName": "Hillside School"
        }))
        .unwrap();
        let page = IdCardTemplate.render(&record).unwrap();
        assert!(page.contains_text("Mia Park"));
        assert!(page.contains_text("ID: S-7"));
        assert!(page.contains_text("HILLSIDE SCHOOL"));
        assert!(page.contains_text("Academic Year: 2025/2026"));
    }

    #[test]
    fn missing_id_degrades_to_placeholder() {
        let record = ExportableRecord::new(json!({"firstName": "Mia"})).unwrap();
        let page = IdCardTemplate.render(&record).unwrap();
        assert!(page.contains_text("ID: N/A"));
    }
}
