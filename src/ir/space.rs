//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to keep pixel
//! boxes read from VOC apart from the percentage boxes Label Studio expects.

use std::fmt;

/// Marker type for pixel coordinates (absolute values).
///
/// (0, 0) is the top-left corner of the image.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for percentage-of-image coordinates.
///
/// Values are nominally 0.0 to 100.0 but are never clamped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Percent {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Pixel has no variants
    }
}

impl fmt::Debug for Percent {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
