use crate::geometry::{Point, Rect, Size};

/// Measurement seam to the host rendering environment. The engine only
/// ever reads through this trait; it never mutates the host.
pub trait Host {
    type Element;

    /// Bounding rectangle of an element relative to the visible viewport
    /// (not the document; scroll is folded in by [`crate::position`]).
    fn client_rect(&self, element: &Self::Element) -> Rect;

    /// Scroll offsets reported by the host's scroll containers, most
    /// authoritative first. Hosts commonly report zero on one container
    /// and the real offset on another, which is why this is a list.
    fn scroll_candidates(&self) -> Vec<Option<Point>>;

    /// Inner size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Resolves a string identifier to an element, if the host knows it.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Current scroll offset: the first defined, non-zero candidate wins.
/// All-zero (or absent) candidates mean the document is not scrolled.
pub fn scroll_offset<H: Host>(host: &H) -> Point {
    for candidate in host.scroll_candidates().into_iter().flatten() {
        if candidate.x != 0.0 || candidate.y != 0.0 {
            return candidate;
        }
    }
    Point { x: 0.0, y: 0.0 }
}
