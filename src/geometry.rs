use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Rectangle in document coordinates: top/left are measured from the
/// document origin with scroll folded in, so values are stable regardless
/// of the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        top: 0.0,
        left: 0.0,
        right: 0.0,
        bottom: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn from_parts(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Zero-size rectangle collapsed onto a single point.
    pub fn from_point(point: Point) -> Self {
        Self::from_parts(point.y, point.x, 0.0, 0.0)
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Geometric overlap of two rectangles. Width and height go negative when
/// the inputs do not overlap; callers decide what that means.
pub fn intersection(a: &Rect, b: &Rect) -> Rect {
    let top = a.top.max(b.top);
    let left = a.left.max(b.left);
    let right = a.right.min(b.right);
    let bottom = a.bottom.min(b.bottom);
    Rect {
        top,
        left,
        right,
        bottom,
        width: right - left,
        height: bottom - top,
    }
}

/// A pixel length as handed over by the host environment: either already
/// numeric or a raw style string like `"68px"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Px(f32),
    Raw(String),
}

impl Length {
    /// Strips a trailing unit suffix and parses. Malformed input resolves
    /// to `NaN` and propagates through arithmetic rather than failing.
    pub fn resolve(&self) -> f32 {
        match self {
            Length::Px(value) => *value,
            Length::Raw(text) => {
                let trimmed = text
                    .trim()
                    .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
                trimmed.parse().unwrap_or(f32::NAN)
            }
        }
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::Px(value)
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Length::Raw(value.to_string())
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Length::Raw(value)
    }
}

/// Rectangle with possibly-missing sides, prior to amending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRect {
    pub top: Option<Length>,
    pub left: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
}

impl From<Rect> for PartialRect {
    fn from(rect: Rect) -> Self {
        Self {
            top: Some(Length::Px(rect.top)),
            left: Some(Length::Px(rect.left)),
            right: Some(Length::Px(rect.right)),
            bottom: Some(Length::Px(rect.bottom)),
            width: Some(Length::Px(rect.width)),
            height: Some(Length::Px(rect.height)),
        }
    }
}

/// Completes a partial rectangle into fully numeric form. Missing top/left
/// default to 0; missing right/bottom derive from left+width / top+height;
/// missing width/height derive from the opposite edges when present.
pub fn amend(rect: &PartialRect) -> Rect {
    let top = rect.top.as_ref().map(Length::resolve).unwrap_or(0.0);
    let left = rect.left.as_ref().map(Length::resolve).unwrap_or(0.0);
    let width = match (&rect.width, &rect.right) {
        (Some(width), _) => width.resolve(),
        (None, Some(right)) => right.resolve() - left,
        (None, None) => f32::NAN,
    };
    let height = match (&rect.height, &rect.bottom) {
        (Some(height), _) => height.resolve(),
        (None, Some(bottom)) => bottom.resolve() - top,
        (None, None) => f32::NAN,
    };
    let right = match &rect.right {
        Some(right) => right.resolve(),
        None => left + width,
    };
    let bottom = match &rect.bottom {
        Some(bottom) => bottom.resolve(),
        None => top + height,
    };
    Rect {
        top,
        left,
        right,
        bottom,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_resolves_px_suffix() {
        assert_eq!(Length::from("68px").resolve(), 68.0);
        assert_eq!(Length::from("-22.5px").resolve(), -22.5);
        assert_eq!(Length::Px(12.0).resolve(), 12.0);
    }

    #[test]
    fn length_malformed_resolves_to_nan() {
        assert!(Length::from("wide").resolve().is_nan());
        assert!(Length::from("").resolve().is_nan());
    }

    #[test]
    fn amend_defaults_and_derives() {
        let partial = PartialRect {
            width: Some(Length::Px(40.0)),
            height: Some(Length::from("20px")),
            ..PartialRect::default()
        };
        let rect = amend(&partial);
        assert_eq!(rect.top, 0.0);
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.right, 40.0);
        assert_eq!(rect.bottom, 20.0);
    }

    #[test]
    fn amend_derives_size_from_edges() {
        let partial = PartialRect {
            top: Some(Length::Px(10.0)),
            left: Some(Length::Px(5.0)),
            right: Some(Length::Px(45.0)),
            bottom: Some(Length::Px(30.0)),
            ..PartialRect::default()
        };
        let rect = amend(&partial);
        assert_eq!(rect.width, 40.0);
        assert_eq!(rect.height, 20.0);
    }

    #[test]
    fn amend_is_idempotent() {
        let partial = PartialRect {
            top: Some(Length::from("68px")),
            left: Some(Length::Px(80.0)),
            width: Some(Length::Px(40.0)),
            height: Some(Length::Px(20.0)),
            ..PartialRect::default()
        };
        let once = amend(&partial);
        let twice = amend(&PartialRect::from(once));
        assert_eq!(once, twice);
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = Rect::from_parts(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_parts(50.0, 30.0, 100.0, 100.0);
        assert_eq!(intersection(&a, &b), intersection(&b, &a));
    }

    #[test]
    fn intersection_of_disjoint_rects_has_negative_size() {
        let a = Rect::from_parts(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_parts(50.0, 50.0, 10.0, 10.0);
        let overlap = intersection(&a, &b);
        assert!(overlap.width < 0.0);
        assert!(overlap.height < 0.0);
    }

    #[test]
    fn intersection_of_nested_rects_is_inner() {
        let outer = Rect::from_parts(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::from_parts(10.0, 20.0, 30.0, 40.0);
        assert_eq!(intersection(&outer, &inner), inner);
    }
}
