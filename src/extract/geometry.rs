//! Coordinate normalization against a single document origin.

use crate::document::BoundingBox;
use crate::types::Position;

/// The document's coordinate origin, captured exactly once from the first
/// depth-0 node that carries a bounding box. All positions are expressed
/// relative to it; before capture (and when no root ever provides a box)
/// absolute coordinates pass through untranslated.
#[derive(Debug, Default)]
pub struct FrameOrigin {
    origin: Option<(f64, f64)>,
}

impl FrameOrigin {
    /// Record the origin if it has not been captured yet.
    pub fn capture(&mut self, bb: &BoundingBox) {
        if self.origin.is_none() {
            self.origin = Some((bb.x, bb.y));
        }
    }

    /// Translate an absolute bounding box into frame-relative, integer
    /// coordinates. Rounding is half-away-from-zero per component.
    pub fn relative(&self, bb: &BoundingBox) -> Position {
        let (ox, oy) = self.origin.unwrap_or((0.0, 0.0));
        Position {
            x: round(bb.x - ox),
            y: round(bb.y - oy),
            width: round(bb.width),
            height: round(bb.height),
        }
    }
}

fn round(v: f64) -> i64 {
    v.round() as i64
}
