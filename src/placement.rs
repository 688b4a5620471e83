use serde::Serialize;

use crate::config::PlacementConfig;
use crate::direction::{Direction, PlaceParseError, complete, parse_place};
use crate::geometry::{Length, PartialRect, Rect, Size, amend};
use crate::host::Host;
use crate::overflow::{over_dirs, reference_area};
use crate::position::Origin;

/// Style-positioning values for the tip's top-left corner, kept numeric
/// until handed to the rendering component. Only the axis relevant to the
/// chosen direction is overridden; the cross axis is centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Offset {
    /// Px-string form for the rendering boundary. Width and height pass
    /// through as numbers.
    pub fn to_style(&self) -> StyleOffset {
        StyleOffset {
            top: px(self.top),
            left: px(self.left),
            right: px(self.right),
            bottom: px(self.bottom),
            width: self.width,
            height: self.height,
        }
    }

    /// Document-coordinate rectangle the tip would occupy.
    pub fn tip_rect(&self) -> Rect {
        amend(&PartialRect {
            top: Some(Length::Px(self.top)),
            left: Some(Length::Px(self.left)),
            width: Some(Length::Px(self.width)),
            height: Some(Length::Px(self.height)),
            ..PartialRect::default()
        })
    }
}

fn px(value: f32) -> String {
    format!("{value}px")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleOffset {
    pub top: String,
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub width: f32,
    pub height: f32,
}

/// Chosen offset and the direction it corresponds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub offset: Offset,
    pub place: Direction,
}

/// Candidate offset for placing content of the given size on one side of
/// the origin rectangle.
pub fn placement(
    place: Direction,
    content: Size,
    origin: &Rect,
    config: &PlacementConfig,
) -> Offset {
    // Bare-point default: a zero-size origin collapses every side onto
    // the point itself.
    let mut offset = Offset {
        top: origin.top,
        bottom: origin.top,
        left: origin.left,
        right: origin.left,
        width: content.width,
        height: content.height,
    };

    match place {
        Direction::Top | Direction::Bottom => {
            offset.left = origin.left + origin.width / 2.0 - content.width / 2.0;
        }
        Direction::Left | Direction::Right => {
            offset.top = origin.top + origin.height / 2.0 - content.height / 2.0;
        }
    }

    match place {
        Direction::Top => offset.top = origin.top - content.height - config.gap,
        Direction::Bottom => offset.top = origin.top + origin.height + config.gap,
        Direction::Right => offset.left = origin.right + config.gap,
        Direction::Left => offset.left = origin.left - content.width - config.gap,
    }

    offset
}

/// Priority of directions to try, as callers express it.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceRequest {
    One(Direction),
    Many(Vec<Direction>),
    /// Comma-joined string such as `"top, left"`, parsed per call.
    Raw(String),
}

impl PlaceRequest {
    fn directions(&self) -> Result<Vec<Direction>, PlaceParseError> {
        match self {
            PlaceRequest::One(direction) => Ok(vec![*direction]),
            PlaceRequest::Many(directions) => {
                if directions.is_empty() {
                    Err(PlaceParseError::Empty)
                } else {
                    Ok(directions.clone())
                }
            }
            PlaceRequest::Raw(text) => parse_place(text),
        }
    }
}

impl From<Direction> for PlaceRequest {
    fn from(direction: Direction) -> Self {
        PlaceRequest::One(direction)
    }
}

impl From<Vec<Direction>> for PlaceRequest {
    fn from(directions: Vec<Direction>) -> Self {
        PlaceRequest::Many(directions)
    }
}

impl From<&str> for PlaceRequest {
    fn from(text: &str) -> Self {
        PlaceRequest::Raw(text.to_string())
    }
}

/// Options for one [`adjust`] call. `origin` wins over the legacy `el`
/// when both are set; see [`crate::compat`] for the advisory warning.
pub struct AdjustOptions<'a, E> {
    pub place: PlaceRequest,
    /// Append the remaining canonical directions after the given ones.
    pub auto: bool,
    /// Bounding container accessor, evaluated once per call.
    pub within: Option<Box<dyn Fn() -> Option<E> + 'a>>,
    pub origin: Option<Origin<E>>,
    /// Deprecated alias for `origin`.
    pub el: Option<Origin<E>>,
}

impl<'a, E> AdjustOptions<'a, E> {
    pub fn new(place: impl Into<PlaceRequest>) -> Self {
        Self {
            place: place.into(),
            auto: false,
            within: None,
            origin: None,
            el: None,
        }
    }
}

/// Tries each requested direction in priority order and returns the first
/// whose candidate tip stays inside the reference area. When every
/// direction overflows, the first attempt stands; there is no "no
/// placement possible" outcome.
pub fn adjust<H: Host>(
    host: &H,
    content: &H::Element,
    options: &AdjustOptions<'_, H::Element>,
    config: &PlacementConfig,
) -> Result<Placement, PlaceParseError> {
    let requested = options.place.directions()?;
    let order = if options.auto {
        complete(&requested)
    } else {
        requested
    };

    let origin = options
        .origin
        .as_ref()
        .or(options.el.as_ref())
        .map(|origin| origin.resolve(host))
        .unwrap_or(Rect::ZERO);
    let content_size = host.client_rect(content).size();
    let container = options.within.as_ref().and_then(|accessor| accessor());
    let area = reference_area(host, container.as_ref());

    let mut first_attempt: Option<Placement> = None;
    for place in order {
        let offset = placement(place, content_size, &origin, config);
        if over_dirs(&offset.tip_rect(), &area).is_empty() {
            return Ok(Placement { offset, place });
        }
        if first_attempt.is_none() {
            first_attempt = Some(Placement { offset, place });
        }
    }
    first_attempt.ok_or(PlaceParseError::Empty)
}
