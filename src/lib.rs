pub mod compat;
pub mod config;
pub mod direction;
pub mod geometry;
pub mod host;
pub mod overflow;
pub mod placement;
pub mod position;
pub mod style;

pub use config::{Config, PlacementConfig, load_config};
pub use direction::{CANONICAL_ORDER, Direction, PlaceParseError, complete, parse_place};
pub use geometry::{Length, PartialRect, Point, Rect, Size, amend, intersection};
pub use host::{Host, scroll_offset};
pub use overflow::{over_dirs, reference_area, viewport_rect};
pub use placement::{AdjustOptions, Offset, PlaceRequest, Placement, StyleOffset, adjust, placement};
pub use position::{Origin, position};
pub use style::Style;
