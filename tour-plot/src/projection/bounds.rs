#[cfg(test)]
#[path = "../../tests/unit/projection/bounds_test.rs"]
mod bounds_test;

use crate::projection::ProjectedPoint;
use std::ops::Range;

/// An axis aligned bounding box in figure coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Min x.
    pub min_x: f64,
    /// Max x.
    pub max_x: f64,
    /// Min y.
    pub min_y: f64,
    /// Max y.
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds which enclose all points. Returns `None` for empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ProjectedPoint>,
    {
        points.into_iter().fold(None, |acc: Option<Bounds>, &(x, y)| match acc {
            Some(bounds) => Some(Bounds {
                min_x: bounds.min_x.min(x),
                max_x: bounds.max_x.max(x),
                min_y: bounds.min_y.min(y),
                max_y: bounds.max_y.max(y),
            }),
            None => Some(Bounds { min_x: x, max_x: x, min_y: y, max_y: y }),
        })
    }

    /// Returns width.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns height.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns center point.
    pub fn center(&self) -> ProjectedPoint {
        ((self.min_x + self.max_x) / 2., (self.min_y + self.max_y) / 2.)
    }

    /// Grows each side so that width and height are at least `min_extent`.
    pub fn with_min_extent(self, min_extent: f64) -> Self {
        let (cx, cy) = self.center();
        let half_width = self.width().max(min_extent) / 2.;
        let half_height = self.height().max(min_extent) / 2.;

        Bounds { min_x: cx - half_width, max_x: cx + half_width, min_y: cy - half_height, max_y: cy + half_height }
    }

    /// Adds a padding proportional to the size.
    pub fn with_padding(self, ratio: f64) -> Self {
        let dx = self.width() * ratio;
        let dy = self.height() * ratio;

        Bounds { min_x: self.min_x - dx, max_x: self.max_x + dx, min_y: self.min_y - dy, max_y: self.max_y + dy }
    }

    /// Expands the shorter side so that width to height ratio equals to `aspect`.
    pub fn with_aspect(self, aspect: f64) -> Self {
        if !aspect.is_finite() || aspect <= 0. || self.height() <= 0. {
            return self;
        }

        let (cx, cy) = self.center();
        let (width, height) = if self.width() / self.height() > aspect {
            (self.width(), self.width() / aspect)
        } else {
            (self.height() * aspect, self.height())
        };

        Bounds { min_x: cx - width / 2., max_x: cx + width / 2., min_y: cy - height / 2., max_y: cy + height / 2. }
    }

    /// Returns x range.
    pub fn x_range(&self) -> Range<f64> {
        self.min_x..self.max_x
    }

    /// Returns y range.
    pub fn y_range(&self) -> Range<f64> {
        self.min_y..self.max_y
    }
}
