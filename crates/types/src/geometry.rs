use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self { x: 0.0, y: 0.0, width: size.width, height: size.height }
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Shrinks the rectangle on all four sides.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self { width: 0.0, height: 0.0 }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }

    /// Width divided by height. Zero-height sizes report an aspect of zero.
    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 { 0.0 } else { self.width / self.height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// The rectangle left after removing the margins from `size`.
    pub fn content_box(&self, size: Size) -> Rect {
        Rect {
            x: self.left,
            y: self.top,
            width: (size.width - self.horizontal()).max(0.0),
            height: (size.height - self.vertical()).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn content_box_subtracts_margins() {
        let m = Margins { top: 10.0, right: 20.0, bottom: 30.0, left: 40.0 };
        let b = m.content_box(Size::new(200.0, 100.0));
        assert_eq!(b.x, 40.0);
        assert_eq!(b.y, 10.0);
        assert_eq!(b.width, 140.0);
        assert_eq!(b.height, 60.0);
    }

    #[test]
    fn scaled_multiplies_both_axes() {
        assert_eq!(Size::new(100.0, 50.0).scaled(2.0), Size::new(200.0, 100.0));
    }

    #[test]
    fn aspect_of_degenerate_size_is_zero() {
        assert_eq!(Size::new(10.0, 0.0).aspect(), 0.0);
    }
}
