//! The certificate template: one landscape A4 page presenting an award.

use chrono::NaiveDate;
use parchment_types::{Color, DocKind, Margins, Orientation, PageSpec, Rect};

use crate::markup::{BoxStyle, Element, FontFamily, PageMarkup, RuleStyle, TextAlign, TextStyle};
use crate::record::{ExportableRecord, FALLBACK_RECOGNITION};
use crate::{DocTemplate, TemplateError};

const INK: Color = Color { r: 30, g: 41, b: 59, a: 1.0 };
const ACCENT: Color = Color { r: 180, g: 140, b: 50, a: 1.0 };

#[derive(Debug, Default)]
pub struct CertificateTemplate;

impl DocTemplate for CertificateTemplate {
    fn kind(&self) -> DocKind {
        DocKind::Certificate
    }

    fn page(&self) -> PageSpec {
        PageSpec::a4(Orientation::Landscape).with_margins(Margins::uniform(18.0))
    }

    fn render(&self, record: &ExportableRecord) -> Result<PageMarkup, TemplateError> {
        let size = self.page().size;
        let mut page = PageMarkup::new(size, Color::WHITE);

        // Double border frame.
        let outer = Rect::from_size(size).inset(24.0);
        page.push(Element::boxed(outer, BoxStyle::outlined(ACCENT, 3.0)));
        page.push(Element::boxed(outer.inset(8.0), BoxStyle::outlined(INK, 1.0)));

        let school = record.text_or(&["school.name", "schoolName"], "");
        if !school.is_empty() {
            page.push(Element::text(
                Rect::new(0.0, 58.0, size.width, 18.0),
                school.to_uppercase(),
                TextStyle::new(FontFamily::SansSerif, 13.0)
                    .color(Color::gray(100))
                    .align(TextAlign::Center)
                    .letter_spacing(2.0),
            ));
        }

        page.push(Element::text(
            Rect::new(0.0, 92.0, size.width, 52.0),
            "CERTIFICATE",
            TextStyle::new(FontFamily::Serif, 46.0)
                .color(INK)
                .align(TextAlign::Center)
                .letter_spacing(6.0),
        ));

        let certificate_type = record.text_or(&["certificateType", "type"], "Achievement");
        page.push(Element::text(
            Rect::new(0.0, 152.0, size.width, 26.0),
            certificate_type.to_uppercase(),
            TextStyle::new(FontFamily::SansSerif, 20.0)
                .color(ACCENT)
                .align(TextAlign::Center)
                .letter_spacing(3.0),
        ));

        page.push(Element::text(
            Rect::new(0.0, 212.0, size.width, 18.0),
            "This certificate is proudly presented to",
            TextStyle::new(FontFamily::SansSerif, 14.0)
                .color(Color::gray(90))
                .align(TextAlign::Center),
        ));

        let (first, last) = record.subject_names();
        let full_name = format!("{} {}", first, last).trim().to_string();
        page.push(Element::text(
            Rect::new(0.0, 248.0, size.width, 44.0),
            full_name,
            TextStyle::new(FontFamily::Serif, 36.0).color(INK).align(TextAlign::Center),
        ));
        page.push(Element::rule(
            Rect::new(size.width / 2.0 - 160.0, 302.0, 320.0, 1.0),
            RuleStyle { color: ACCENT, thickness: 1.0 },
        ));

        let description = record.text_or(&["description"], FALLBACK_RECOGNITION);
        let mut y = 334.0;
        for line in wrap_line(description, 84) {
            page.push(Element::text(
                Rect::new(80.0, y, size.width - 160.0, 18.0),
                line,
                TextStyle::new(FontFamily::SansSerif, 13.0)
                    .color(Color::gray(70))
                    .align(TextAlign::Center),
            ));
            y += 19.0;
        }

        let issued = format!("Issued on {}", format_issue_date(record.text("issueDate")));
        page.push(Element::text(
            Rect::new(0.0, 430.0, size.width, 16.0),
            issued,
            TextStyle::new(FontFamily::SansSerif, 12.0)
                .color(Color::gray(90))
                .align(TextAlign::Center),
        ));

        let number = record.text_or(&["certificateNumber"], "N/A");
        page.push(Element::text(
            Rect::new(64.0, 512.0, 300.0, 14.0),
            format!("Certificate No: {}", number),
            TextStyle::new(FontFamily::SansSerif, 11.0).color(Color::gray(110)),
        ));

        let sig = Rect::new(size.width - 284.0, 500.0, 220.0, 1.0);
        page.push(Element::rule(sig, RuleStyle { color: INK, thickness: 1.0 }));
        page.push(Element::text(
            Rect::new(sig.x, 508.0, sig.width, 14.0),
            "Authorized Signature",
            TextStyle::new(FontFamily::SansSerif, 11.0)
                .color(Color::gray(110))
                .align(TextAlign::Center),
        ));

        Ok(page)
    }
}

/// Formats an ISO `YYYY-MM-DD` issue date as e.g. "January 10, 2025".
/// Unparseable values pass through untouched; a missing date becomes today.
fn format_issue_date(raw: Option<&str>) -> String {
    match raw {
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => s.to_string(),
        },
        None => chrono::Local::now().date_naive().format("%B %-d, %Y").to_string(),
    }
}

/// Greedy word wrap; a single overlong word becomes its own line.
fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
