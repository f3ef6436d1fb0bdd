//! The transcript template: one portrait A4 page with a grade table.

use log::warn;
use parchment_types::{Color, DocKind, Margins, Orientation, PageSpec, Rect};
use serde_json::Value;

use crate::grading;
use crate::markup::{BoxStyle, Element, FontFamily, PageMarkup, RuleStyle, TextAlign, TextStyle};
use crate::record::ExportableRecord;
use crate::{DocTemplate, TemplateError};

const INK: Color = Color { r: 30, g: 41, b: 59, a: 1.0 };
const ROW_HEIGHT: f32 = 22.0;
const TABLE_TOP: f32 = 250.0;
const TABLE_BOTTOM: f32 = 700.0;

// Column layout: subject | score | grade.
const COL_SUBJECT_X: f32 = 56.0;
const COL_SCORE_X: f32 = 380.0;
const COL_GRADE_X: f32 = 470.0;
const TABLE_RIGHT: f32 = 540.0;

#[derive(Debug, Default)]
pub struct TranscriptTemplate;

impl DocTemplate for TranscriptTemplate {
    fn kind(&self) -> DocKind {
        DocKind::Transcript
    }

    fn page(&self) -> PageSpec {
        PageSpec::a4(Orientation::Portrait).with_margins(Margins::uniform(18.0))
    }

    fn render(&self, record: &ExportableRecord) -> Result<PageMarkup, TemplateError> {
        let size = self.page().size;
        let mut page = PageMarkup::new(size, Color::WHITE);

        let school = record.text_or(&["school.name", "schoolName"], "Academy");
        page.push(Element::text(
            Rect::new(0.0, 48.0, size.width, 22.0),
            school.to_uppercase(),
            TextStyle::new(FontFamily::Serif, 18.0)
                .color(INK)
                .align(TextAlign::Center)
                .letter_spacing(1.5),
        ));
        page.push(Element::text(
            Rect::new(0.0, 80.0, size.width, 20.0),
            "ACADEMIC TRANSCRIPT",
            TextStyle::new(FontFamily::SansSerif, 15.0)
                .color(Color::gray(90))
                .align(TextAlign::Center)
                .letter_spacing(3.0),
        ));
        page.push(Element::rule(
            Rect::new(COL_SUBJECT_X, 112.0, TABLE_RIGHT - COL_SUBJECT_X, 1.0),
            RuleStyle { color: INK, thickness: 1.5 },
        ));

        let (first, last) = record.subject_names();
        let info_style = || TextStyle::new(FontFamily::SansSerif, 11.5).color(Color::gray(40));
        let mut info_y = 136.0;
        let mut info_line = |page: &mut PageMarkup, label: &str, value: String| {
            page.push(Element::text(
                Rect::new(COL_SUBJECT_X, info_y, 420.0, 14.0),
                format!("{}: {}", label, value),
                info_style(),
            ));
            info_y += 20.0;
        };
        info_line(&mut page, "Student", format!("{} {}", first, last).trim().to_string());
        if let Some(id) = record.text("student.studentId").or_else(|| record.text("studentId")) {
            info_line(&mut page, "Student ID", id.to_string());
        }
        if let Some(class) = record.text("student.className").or_else(|| record.text("className")) {
            info_line(&mut page, "Class", class.to_string());
        }
        if let Some(year) = record.text("academicYear") {
            info_line(&mut page, "Academic Year", year.to_string());
        }

        // Table header.
        page.push(Element::boxed(
            Rect::new(COL_SUBJECT_X, TABLE_TOP, TABLE_RIGHT - COL_SUBJECT_X, ROW_HEIGHT),
            BoxStyle::filled(Color::gray(229)),
        ));
        let header_style = || TextStyle::new(FontFamily::SansSerif, 11.0).color(INK);
        let text_y = |row_top: f32| row_top + 5.0;
        page.push(Element::text(
            Rect::new(COL_SUBJECT_X + 8.0, text_y(TABLE_TOP), 280.0, 13.0),
            "Subject",
            header_style(),
        ));
        page.push(Element::text(
            Rect::new(COL_SCORE_X, text_y(TABLE_TOP), 70.0, 13.0),
            "Score",
            header_style().align(TextAlign::Right),
        ));
        page.push(Element::text(
            Rect::new(COL_GRADE_X, text_y(TABLE_TOP), 60.0, 13.0),
            "Grade",
            header_style().align(TextAlign::Right),
        ));

        let grades = record
            .get("grades")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let max_rows = ((TABLE_BOTTOM - TABLE_TOP) / ROW_HEIGHT) as usize - 1;
        if grades.len() > max_rows {
            warn!(
                "transcript has {} grade rows, only the first {} fit on one page",
                grades.len(),
                max_rows
            );
        }

        let cell_style = || TextStyle::new(FontFamily::SansSerif, 11.0).color(Color::gray(30));
        let mut y = TABLE_TOP + ROW_HEIGHT;
        let mut total = 0.0;
        let mut counted = 0usize;
        for (index, entry) in grades.iter().take(max_rows).enumerate() {
            if index % 2 == 1 {
                page.push(Element::boxed(
                    Rect::new(COL_SUBJECT_X, y, TABLE_RIGHT - COL_SUBJECT_X, ROW_HEIGHT),
                    BoxStyle::filled(Color::gray(245)),
                ));
            }
            let subject = entry
                .get("subject")
                .or_else(|| entry.get("subjectName"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown Subject");
            page.push(Element::text(
                Rect::new(COL_SUBJECT_X + 8.0, text_y(y), 280.0, 13.0),
                subject,
                cell_style(),
            ));

            let score = entry
                .get("score")
                .or_else(|| entry.get("marks"))
                .and_then(Value::as_f64);
            let (score_text, letter) = match score {
                Some(s) => {
                    total += s;
                    counted += 1;
                    (format!("{:.1}", s), grading::letter_for(s))
                }
                None => ("-".to_string(), "-"),
            };
            page.push(Element::text(
                Rect::new(COL_SCORE_X, text_y(y), 70.0, 13.0),
                score_text,
                cell_style().align(TextAlign::Right),
            ));
            page.push(Element::text(
                Rect::new(COL_GRADE_X, text_y(y), 60.0, 13.0),
                letter,
                cell_style().align(TextAlign::Right),
            ));
            y += ROW_HEIGHT;
        }
        page.push(Element::rule(
            Rect::new(COL_SUBJECT_X, y + 1.0, TABLE_RIGHT - COL_SUBJECT_X, 1.0),
            RuleStyle { color: INK, thickness: 1.0 },
        ));

        let summary_style = || TextStyle::new(FontFamily::SansSerif, 11.5).color(INK);
        let mut summary_y = y + 14.0;
        if counted > 0 {
            let average = total / counted as f64;
            page.push(Element::text(
                Rect::new(COL_SUBJECT_X, summary_y, 420.0, 14.0),
                format!("Overall Average: {:.1} ({})", average, grading::letter_for(average)),
                summary_style(),
            ));
            summary_y += 20.0;
        }
        if let Some(attendance) = record.number("attendancePercentage") {
            page.push(Element::text(
                Rect::new(COL_SUBJECT_X, summary_y, 420.0, 14.0),
                format!("Attendance: {:.1}%", attendance),
                summary_style(),
            ));
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: serde_json::Value) -> PageMarkup {
        let record = ExportableRecord::new(value).unwrap();
        TranscriptTemplate.render(&record).unwrap()
    }

    #[test]
    fn renders_grade_rows_with_letters() {
        let page = render(json!({
            "student": {"firstName": "Ben", "lastName": "Okafor", "studentId": "S-42"},
            "grades": [
                {"subject": "Mathematics", "score": 91.0},
                {"subject": "History", "score": 74.5}
            ],
            "attendancePercentage": 96.25
        }));
        let text = page.text_content();
        assert!(text.contains("Mathematics"));
        assert!(text.contains("91.0"));
        assert!(text.contains("A"));
        assert!(text.contains("History"));
        assert!(text.contains("C"));
        assert!(text.contains("Overall Average: 82.8 (B)"));
        assert!(text.contains("Attendance: 96.2%"));
    }

    #[test]
    fn tolerates_missing_grades() {
        let page = render(json!({"firstName": "Ben"}));
        assert!(page.contains_text("ACADEMIC TRANSCRIPT"));
        assert!(!page.text_content().contains("Overall Average"));
    }

    #[test]
    fn overflow_rows_are_dropped_not_overflowed() {
        let rows: Vec<_> = (0..60)
            .map(|i| json!({"subject": format!("Subject {}", i), "score": 75.0}))
            .collect();
        let page = render(json!({"firstName": "Ben", "grades": rows}));
        // No text element may sit below the table's bottom boundary.
        for element in &page.elements {
            assert!(element.frame.y < TABLE_BOTTOM + 40.0);
        }
    }
}
