use crate::geometry::{Point, Rect};
use crate::host::{Host, scroll_offset};

/// Document-coordinate rectangle of an element. `None` degrades to the
/// all-zero rectangle; absent elements never fail a placement call.
pub fn position<H: Host>(host: &H, element: Option<&H::Element>) -> Rect {
    let Some(element) = element else {
        return Rect::ZERO;
    };
    let client = host.client_rect(element);
    let scroll = scroll_offset(host);
    Rect::from_parts(
        client.top + scroll.y,
        client.left + scroll.x,
        client.width,
        client.height,
    )
}

/// Where a tip is anchored. Elements and identifiers get measured fresh
/// per call; points and pre-computed rectangles are used as-is.
#[derive(Debug, Clone)]
pub enum Origin<E> {
    Element(E),
    Id(String),
    Point(Point),
    Rect(Rect),
}

impl<E> Origin<E> {
    pub fn resolve<H: Host<Element = E>>(&self, host: &H) -> Rect {
        match self {
            Origin::Element(element) => position(host, Some(element)),
            Origin::Id(id) => match host.element_by_id(id) {
                Some(element) => position(host, Some(&element)),
                None => Rect::ZERO,
            },
            Origin::Point(point) => Rect::from_point(*point),
            Origin::Rect(rect) => *rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use std::collections::HashMap;

    struct OneElement {
        rects: HashMap<&'static str, Rect>,
        scroll: Point,
    }

    impl Host for OneElement {
        type Element = &'static str;

        fn client_rect(&self, element: &&'static str) -> Rect {
            self.rects.get(element).copied().unwrap_or(Rect::ZERO)
        }

        fn scroll_candidates(&self) -> Vec<Option<Point>> {
            vec![Some(self.scroll)]
        }

        fn viewport_size(&self) -> Size {
            Size {
                width: 800.0,
                height: 600.0,
            }
        }

        fn element_by_id(&self, id: &str) -> Option<&'static str> {
            self.rects.get_key_value(id).map(|(key, _)| *key)
        }
    }

    fn host() -> OneElement {
        let mut rects = HashMap::new();
        rects.insert("anchor", Rect::from_parts(40.0, 30.0, 100.0, 50.0));
        OneElement {
            rects,
            scroll: Point { x: 10.0, y: 20.0 },
        }
    }

    #[test]
    fn position_normalizes_for_scroll() {
        let host = host();
        let rect = position(&host, Some(&"anchor"));
        assert_eq!(rect.top, 60.0);
        assert_eq!(rect.left, 40.0);
        assert_eq!(rect.right, 140.0);
        assert_eq!(rect.bottom, 110.0);
    }

    #[test]
    fn position_of_nothing_is_empty() {
        assert_eq!(position(&host(), None), Rect::ZERO);
    }

    #[test]
    fn origin_id_resolves_through_lookup() {
        let host = host();
        let by_id = Origin::<&'static str>::Id("anchor".to_string()).resolve(&host);
        let direct = Origin::Element("anchor").resolve(&host);
        assert_eq!(by_id, direct);
    }

    #[test]
    fn origin_unknown_id_degrades_to_empty() {
        let host = host();
        let rect = Origin::<&'static str>::Id("missing".to_string()).resolve(&host);
        assert_eq!(rect, Rect::ZERO);
    }

    #[test]
    fn origin_point_is_zero_size() {
        let host = host();
        let rect = Origin::<&'static str>::Point(Point { x: 100.0, y: 50.0 }).resolve(&host);
        assert_eq!(rect, Rect::from_parts(50.0, 100.0, 0.0, 0.0));
    }

    #[test]
    fn origin_rect_is_used_as_is() {
        let host = host();
        let given = Rect::from_parts(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Origin::<&'static str>::Rect(given).resolve(&host), given);
    }
}
