//! Newtype IDs for type-safe identification of input images.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one input image: the zero-based position of its annotation
/// file in the input listing.
///
/// It is never read from the annotation data itself.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u64);

impl ImageId {
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<usize> for ImageId {
    fn from(index: usize) -> Self {
        Self(index as u64)
    }
}

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_orders_by_listing_index() {
        let mut ids = vec![ImageId::from(2usize), ImageId::new(0), ImageId::from(1usize)];
        ids.sort();
        assert_eq!(ids, vec![ImageId(0), ImageId(1), ImageId(2)]);
    }

    #[test]
    fn image_id_serializes_transparently() {
        let json = serde_json::to_string(&ImageId::new(7)).expect("serialize");
        assert_eq!(json, "7");
    }
}
