pub mod color;
pub mod geometry;
pub mod ids;
pub mod kind;
pub mod page;

pub use color::Color;
pub use geometry::{Margins, Rect, Size};
pub use ids::RecordId;
pub use kind::DocKind;
pub use page::{Orientation, PageSpec};
