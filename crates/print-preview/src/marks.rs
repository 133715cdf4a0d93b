//! Crop-mark geometry for the page preview
//!
//! Each corner of the trimmed (or bled) area gets an L-shaped pair of ticks:
//! one horizontal and one vertical, both starting at a point offset
//! diagonally away from the corner and extending outward.

use crate::constants::{CROP_MARK_LENGTH_MM, CROP_MARK_OFFSET_MM};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A point in preview pixels, measured from the canvas top-left
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned box in preview pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `inset` on all four sides. Width and height saturate at zero.
    pub fn inset(&self, inset: f32) -> Rect {
        let width = (self.width - 2.0 * inset).max(0.0);
        let height = (self.height - 2.0 * inset).max(0.0);
        Rect {
            x: self.x + inset.min(self.width / 2.0),
            y: self.y + inset.min(self.height / 2.0),
            width,
            height,
        }
    }
}

/// A straight tick from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn length(&self) -> f32 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Outward direction along (x, y); y grows downward
    fn direction(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }

    fn point_of(self, rect: &Rect) -> Point {
        match self {
            Corner::TopLeft => Point {
                x: rect.x,
                y: rect.y,
            },
            Corner::TopRight => Point {
                x: rect.right(),
                y: rect.y,
            },
            Corner::BottomLeft => Point {
                x: rect.x,
                y: rect.bottom(),
            },
            Corner::BottomRight => Point {
                x: rect.right(),
                y: rect.bottom(),
            },
        }
    }
}

/// The two ticks marking one corner
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CropMark {
    pub corner: Corner,
    pub horizontal: Segment,
    pub vertical: Segment,
}

/// Extra room needed around the marked box so every tick stays on the canvas
pub fn crop_mark_margin(scale: f32) -> f32 {
    (CROP_MARK_LENGTH_MM + CROP_MARK_OFFSET_MM) * scale
}

/// Crop marks around the four corners of `target`
pub fn crop_marks(target: &Rect, scale: f32) -> Vec<CropMark> {
    let length = CROP_MARK_LENGTH_MM * scale;
    let offset = CROP_MARK_OFFSET_MM * scale;

    Corner::ALL
        .into_iter()
        .map(|corner| {
            let (dx, dy) = corner.direction();
            let p = corner.point_of(target);
            let anchor = Point {
                x: p.x + dx * offset,
                y: p.y + dy * offset,
            };
            CropMark {
                corner,
                horizontal: Segment {
                    start: anchor,
                    end: Point {
                        x: anchor.x + dx * length,
                        y: anchor.y,
                    },
                },
                vertical: Segment {
                    start: anchor,
                    end: Point {
                        x: anchor.x,
                        y: anchor.y + dy * length,
                    },
                },
            }
        })
        .collect()
}
