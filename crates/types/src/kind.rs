use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of document a record is exported as. Each kind selects a page
/// template and a physical page format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocKind {
    Certificate,
    Transcript,
    IdCard,
}

impl DocKind {
    /// The label used in derived filenames, e.g. `Ana_Lee_Certificate.pdf`.
    pub fn label(&self) -> &'static str {
        match self {
            DocKind::Certificate => "Certificate",
            DocKind::Transcript => "Transcript",
            DocKind::IdCard => "ID_Card",
        }
    }

    pub fn all() -> [DocKind; 3] {
        [DocKind::Certificate, DocKind::Transcript, DocKind::IdCard]
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocKind::Certificate => "certificate",
            DocKind::Transcript => "transcript",
            DocKind::IdCard => "id-card",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DocKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "certificate" => Ok(DocKind::Certificate),
            "transcript" => Ok(DocKind::Transcript),
            "id-card" | "idcard" | "id_card" => Ok(DocKind::IdCard),
            other => Err(format!(
                "unknown document kind '{}', expected certificate, transcript or id-card",
                other
            )),
        }
    }
}
