use crate::direction::Direction;
use crate::geometry::{Rect, intersection};
use crate::host::{Host, scroll_offset};
use crate::position::position;

/// Visible viewport in document coordinates: scroll offset plus the
/// window's inner dimensions.
pub fn viewport_rect<H: Host>(host: &H) -> Rect {
    let scroll = scroll_offset(host);
    let size = host.viewport_size();
    Rect::from_parts(scroll.y, scroll.x, size.width, size.height)
}

/// Area a candidate tip must stay inside. A container clips the viewport
/// via intersection; it never replaces it (nested scroll clipping).
pub fn reference_area<H: Host>(host: &H, container: Option<&H::Element>) -> Rect {
    let viewport = viewport_rect(host);
    match container {
        Some(element) => intersection(&viewport, &position(host, Some(element))),
        None => viewport,
    }
}

/// Directions along which the tip rectangle exceeds the reference area.
/// Empty result means the tip is fully contained.
pub fn over_dirs(tip: &Rect, area: &Rect) -> Vec<Direction> {
    let mut dirs = Vec::new();
    if tip.top < area.top {
        dirs.push(Direction::Top);
    }
    if tip.right > area.right {
        dirs.push(Direction::Right);
    }
    if tip.bottom > area.bottom {
        dirs.push(Direction::Bottom);
    }
    if tip.left < area.left {
        dirs.push(Direction::Left);
    }
    dirs
}
