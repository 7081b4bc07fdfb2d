use crate::foundation::core::Rect;

/// Region where points may not be placed (e.g. over a control panel).
pub trait BlockedArea {
    fn contains(&self, x: f64, y: f64) -> bool;
}

/// Blocks nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBlockedArea;

impl BlockedArea for NoBlockedArea {
    fn contains(&self, _x: f64, _y: f64) -> bool {
        false
    }
}

/// Blocks a closed rectangle.
#[derive(Clone, Copy, Debug)]
pub struct RectArea(pub Rect);

impl BlockedArea for RectArea {
    fn contains(&self, x: f64, y: f64) -> bool {
        let r = self.0;
        r.x0 <= x && x <= r.x1 && r.y0 <= y && y <= r.y1
    }
}
