//! Annotation records and the two format adapters of vocstudio.
//!
//! Pascal VOC files are read into [`AnnotationRecord`]s carrying pixel boxes;
//! the Label Studio adapter turns those into percentage-space results grouped
//! into tasks.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: pixel and percentage boxes are distinct types
//!    ([`BBoxXYWH<Pixel>`] vs [`BBoxXYWH<Percent>`]).
//!
//! 2. **Permissive Construction**: boxes with inverted corners or coordinates
//!    outside the image are carried through unchanged, never clamped.
//!
//! # Example
//!
//! ```
//! use vocstudio::ir::{BBoxXYWH, Pixel};
//!
//! let bbox = BBoxXYWH::<Pixel>::from_voc_corners(10.0, 20.0, 110.0, 70.0);
//! let pct = bbox.to_percent(200, 100).unwrap();
//! assert_eq!(pct.width, 50.0);
//! ```

mod bbox;
mod coord;
mod ids;
pub mod io_label_studio_json;
pub mod io_voc_xml;
mod model;
mod space;

// Re-export core types for convenient access
pub use bbox::BBoxXYWH;
pub use ids::ImageId;
pub use model::{AnnotationRecord, CategorySet, VocFile};
pub use space::{Percent, Pixel};
