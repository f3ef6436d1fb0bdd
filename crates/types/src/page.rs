//! Physical page formats, in PDF points (1 pt = 1/72 inch).

use crate::geometry::{Margins, Size};
use serde::{Deserialize, Serialize};

/// A4 in portrait orientation.
pub const A4_WIDTH_PT: f32 = 595.276;
pub const A4_HEIGHT_PT: f32 = 841.89;

/// CR80 card stock (85.6 mm x 54 mm), the standard ID card size.
pub const CR80_WIDTH_PT: f32 = 242.65;
pub const CR80_HEIGHT_PT: f32 = 153.07;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// The physical geometry of an output page: size, orientation and the
/// margins inside which a captured bitmap is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub size: Size,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl PageSpec {
    pub fn a4(orientation: Orientation) -> Self {
        let size = match orientation {
            Orientation::Portrait => Size::new(A4_WIDTH_PT, A4_HEIGHT_PT),
            Orientation::Landscape => Size::new(A4_HEIGHT_PT, A4_WIDTH_PT),
        };
        Self { size, orientation, margins: Margins::default() }
    }

    pub fn cr80() -> Self {
        Self {
            size: Size::new(CR80_WIDTH_PT, CR80_HEIGHT_PT),
            orientation: Orientation::Landscape,
            margins: Margins::default(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_landscape_swaps_dimensions() {
        let page = PageSpec::a4(Orientation::Landscape);
        assert!(page.is_landscape());
        assert_eq!(page.size.width, A4_HEIGHT_PT);
        assert_eq!(page.size.height, A4_WIDTH_PT);
    }

    #[test]
    fn cr80_is_card_sized() {
        let card = PageSpec::cr80();
        assert!(card.size.width < 250.0 && card.size.height < 160.0);
        assert!(card.is_landscape());
    }
}
