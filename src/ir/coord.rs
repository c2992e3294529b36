//! Typed points using PhantomData for compile-time safety.

use std::marker::PhantomData;

/// A 2D point with a type-level marker for the coordinate space.
///
/// The `TSpace` parameter is either [`Pixel`](super::Pixel) or
/// [`Percent`](super::Percent).
#[derive(Clone, Copy, PartialEq)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Coord<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Divides each axis by the matching image dimension and scales by 100.
    ///
    /// Callers guarantee non-zero dimensions.
    #[inline]
    pub(crate) fn scale_to_percent<TOut>(&self, image_width: f64, image_height: f64) -> Coord<TOut> {
        Coord::new(
            self.x / image_width * 100.0,
            self.y / image_height * 100.0,
        )
    }
}

impl<TSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coord")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<TSpace> Default for Coord<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
