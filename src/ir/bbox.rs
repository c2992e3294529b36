//! Bounding boxes in upper-left + size (XYWH) form.

use super::coord::Coord;
use super::{Percent, Pixel};

/// An axis-aligned bounding box stored as its upper-left corner plus size.
///
/// The `TSpace` parameter is either [`Pixel`] or [`Percent`], so a pixel box
/// cannot be written where Label Studio expects percentages.
///
/// Note: the constructor does NOT enforce positive sizes. A VOC box with
/// `xmax < xmin` becomes a box with negative width and stays that way through
/// the percentage conversion.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYWH<TSpace> {
    pub origin: Coord<TSpace>,
    pub width: f64,
    pub height: f64,
}

impl<TSpace> BBoxXYWH<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Coord::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Returns `(x, y, width, height)`.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.origin.x, self.origin.y, self.width, self.height)
    }
}

impl BBoxXYWH<Pixel> {
    /// Builds a pixel box from VOC's two-corner `bndbox`.
    ///
    /// `width = xmax - xmin`, `height = ymax - ymin`, unvalidated.
    #[inline]
    pub fn from_voc_corners(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(xmin, ymin, xmax - xmin, ymax - ymin)
    }

    /// Converts to percentage-of-image space.
    ///
    /// Each value is `pixel / image_dimension * 100.0` with no clamping.
    /// Returns `None` when either image dimension is zero.
    pub fn to_percent(&self, image_width: u32, image_height: u32) -> Option<BBoxXYWH<Percent>> {
        if image_width == 0 || image_height == 0 {
            return None;
        }

        let w = image_width as f64;
        let h = image_height as f64;

        Some(BBoxXYWH {
            origin: self.origin.scale_to_percent(w, h),
            width: self.width / w * 100.0,
            height: self.height / h * 100.0,
        })
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYWH<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYWH")
            .field("x", &self.origin.x)
            .field("y", &self.origin.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<TSpace> Default for BBoxXYWH<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
